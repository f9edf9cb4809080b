//! The technique battery of the hint engine.
//!
//! Each solving technique is represented by a [`Technique`] value carrying
//! its contractual name and difficulty, and by a detector module that finds
//! the next application of that technique on a candidate state. Detectors
//! are pure: they read the board and candidates and return a
//! [`Hint`](crate::Hint) describing a state change, or `None`.
//!
//! [`get_hint`] tries the detectors in ascending difficulty order and
//! returns the first hit, so a returned hint is always the easiest known
//! deduction. Within one detector, units and cells are visited in a fixed
//! order (unit index, then cell index), making the first hit reproducible.

use nanpure_core::{Board, Candidates, UnitKind};

use crate::{Grade, Hint};

pub(crate) mod chute_remote_pairs;
pub(crate) mod coloring;
pub(crate) mod fish;
pub(crate) mod hidden_set;
pub(crate) mod hidden_single;
pub(crate) mod intersection;
pub(crate) mod last_remaining;
pub(crate) mod mistakes;
pub(crate) mod naked_set;
pub(crate) mod naked_single;
pub(crate) mod y_wing;

/// A named solving technique with a fixed difficulty rating.
///
/// The numeric difficulties form an opaque 0-99 scale calibrated by human
/// ranking of technique families; both the scorer and the generator treat
/// the values as contractual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// A placed digit disagreeing with the unique solution.
    IncorrectValue,
    /// An empty cell whose pencil marks lack the digit it must take.
    MissingCandidate,
    /// A cell with exactly one candidate.
    NakedSingle,
    /// The single empty cell of a box.
    LastRemainingInBox,
    /// The single empty cell of a row.
    LastRemainingInRow,
    /// The single empty cell of a column.
    LastRemainingInColumn,
    /// A digit with exactly one candidate cell in some unit.
    HiddenSingle,
    /// Two cells of a unit sharing the same two candidates.
    NakedPairs,
    /// A digit confined to one row/column inside a box.
    PointingPairs,
    /// A digit confined to one box inside a row/column.
    BoxLineReduction,
    /// Two digits confined to the same two cells of a unit.
    HiddenPairs,
    /// Three cells of a unit covering exactly three candidates.
    NakedTriples,
    /// Three digits confined to the same three cells of a unit.
    HiddenTriples,
    /// Four cells of a unit covering exactly four candidates.
    NakedQuads,
    /// Four digits confined to the same four cells of a unit.
    HiddenQuads,
    /// A digit held to two aligned cells in each of two parallel lines.
    XWing,
    /// A bent triple of bi-value cells eliminating the shared digit.
    YWing,
    /// A remote bi-value pair within one chute.
    ChuteRemotePairs,
    /// Conjugate-pair two-coloring of one digit.
    SimpleColoring,
    /// A digit held to at most three cells in each of three parallel lines.
    Swordfish,
}

impl Technique {
    /// All techniques in ascending difficulty order.
    ///
    /// This is also the order the detectors are tried in; ties keep the
    /// listed order.
    pub const ALL: [Self; 20] = [
        Self::IncorrectValue,
        Self::MissingCandidate,
        Self::NakedSingle,
        Self::LastRemainingInBox,
        Self::LastRemainingInRow,
        Self::LastRemainingInColumn,
        Self::HiddenSingle,
        Self::NakedPairs,
        Self::PointingPairs,
        Self::BoxLineReduction,
        Self::HiddenPairs,
        Self::NakedTriples,
        Self::HiddenTriples,
        Self::NakedQuads,
        Self::HiddenQuads,
        Self::XWing,
        Self::YWing,
        Self::ChuteRemotePairs,
        Self::SimpleColoring,
        Self::Swordfish,
    ];

    /// Returns the canonical snake_case name of this technique.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IncorrectValue => "incorrect_value",
            Self::MissingCandidate => "missing_candidate",
            Self::NakedSingle => "naked_single",
            Self::LastRemainingInBox => "last_remaining_in_box",
            Self::LastRemainingInRow => "last_remaining_in_row",
            Self::LastRemainingInColumn => "last_remaining_in_column",
            Self::HiddenSingle => "hidden_single",
            Self::NakedPairs => "naked_pairs",
            Self::PointingPairs => "pointing_pairs",
            Self::BoxLineReduction => "box_line_reduction",
            Self::HiddenPairs => "hidden_pairs",
            Self::NakedTriples => "naked_triples",
            Self::HiddenTriples => "hidden_triples",
            Self::NakedQuads => "naked_quads",
            Self::HiddenQuads => "hidden_quads",
            Self::XWing => "x_wing",
            Self::YWing => "y_wing",
            Self::ChuteRemotePairs => "chute_remote_pairs",
            Self::SimpleColoring => "simple_coloring",
            Self::Swordfish => "swordfish",
        }
    }

    /// Looks a technique up by its canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Returns the difficulty rating (0-99) of this technique.
    #[must_use]
    pub const fn difficulty(self) -> u8 {
        match self {
            Self::IncorrectValue | Self::MissingCandidate => 0,
            Self::NakedSingle => 1,
            Self::LastRemainingInBox => 3,
            Self::LastRemainingInRow => 4,
            Self::LastRemainingInColumn => 5,
            Self::HiddenSingle => 7,
            Self::NakedPairs => 9,
            Self::PointingPairs => 12,
            Self::BoxLineReduction => 14,
            Self::HiddenPairs => 18,
            Self::NakedTriples => 22,
            Self::HiddenTriples => 28,
            Self::NakedQuads => 35,
            Self::HiddenQuads => 42,
            Self::XWing => 46,
            Self::YWing => 50,
            Self::ChuteRemotePairs => 52,
            Self::SimpleColoring => 54,
            Self::Swordfish => 62,
        }
    }

    /// Returns the difficulty band this technique falls in.
    #[must_use]
    pub fn grade(self) -> Grade {
        Grade::of(self.difficulty())
    }
}

impl std::fmt::Display for Technique {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the difficulty of the technique named `name`.
///
/// Unknown names rate 50.
#[must_use]
pub fn technique_difficulty(name: &str) -> u8 {
    Technique::from_name(name).map_or(50, Technique::difficulty)
}

/// Finds the easiest applicable deduction on the given state.
///
/// Detectors run in ascending difficulty order and the first hit is
/// returned; `None` means no implemented technique applies. The mistake
/// detectors need ground truth and only run when `solution` is provided.
///
/// Every returned hint changes state when applied: either it places a digit
/// or it eliminates at least one pencil mark.
#[must_use]
pub fn get_hint(board: &Board, candidates: &Candidates, solution: Option<&Board>) -> Option<Hint> {
    Technique::ALL
        .into_iter()
        .find_map(|technique| find_with(technique, board, candidates, solution))
}

fn find_with(
    technique: Technique,
    board: &Board,
    candidates: &Candidates,
    solution: Option<&Board>,
) -> Option<Hint> {
    match technique {
        Technique::IncorrectValue => mistakes::find_incorrect_value(board, solution?),
        Technique::MissingCandidate => {
            mistakes::find_missing_candidate(board, candidates, solution?)
        }
        Technique::NakedSingle => naked_single::find(board, candidates),
        Technique::LastRemainingInBox => last_remaining::find(board, UnitKind::Box),
        Technique::LastRemainingInRow => last_remaining::find(board, UnitKind::Row),
        Technique::LastRemainingInColumn => last_remaining::find(board, UnitKind::Column),
        Technique::HiddenSingle => hidden_single::find(board, candidates),
        Technique::NakedPairs => naked_set::find(board, candidates, 2),
        Technique::NakedTriples => naked_set::find(board, candidates, 3),
        Technique::NakedQuads => naked_set::find(board, candidates, 4),
        Technique::HiddenPairs => hidden_set::find(board, candidates, 2),
        Technique::HiddenTriples => hidden_set::find(board, candidates, 3),
        Technique::HiddenQuads => hidden_set::find(board, candidates, 4),
        Technique::PointingPairs => intersection::find_pointing(board, candidates),
        Technique::BoxLineReduction => intersection::find_box_line(board, candidates),
        Technique::XWing => fish::find(board, candidates, 2),
        Technique::Swordfish => fish::find(board, candidates, 3),
        Technique::YWing => y_wing::find(board, candidates),
        Technique::ChuteRemotePairs => chute_remote_pairs::find(board, candidates),
        Technique::SimpleColoring => coloring::find(board, candidates),
    }
}

/// Visits the k-combinations of `0..n` in lexicographic order, stopping at
/// the first visit that returns a value.
///
/// `k` is at most 4 (the largest subset any technique looks for).
pub(crate) fn combinations<T>(
    n: usize,
    k: usize,
    mut visit: impl FnMut(&[usize]) -> Option<T>,
) -> Option<T> {
    debug_assert!((1..=4).contains(&k));
    if k > n {
        return None;
    }
    let mut idx: tinyvec::ArrayVec<[usize; 4]> = (0..k).collect();
    loop {
        if let Some(found) = visit(&idx) {
            return Some(found);
        }
        let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return None;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
