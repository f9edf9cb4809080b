//! Hint records and the apply-hint state transition.

use nanpure_core::{Board, Candidates, Cell, CellSet, Chute, Digit, DigitSet, Unit};

use crate::Technique;

/// A batch of pencil-mark removals: each digit of `digits` is removed from
/// every cell of `cells` where it is still marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// Cells losing pencil marks.
    pub cells: CellSet,
    /// Digits removed from those cells.
    pub digits: DigitSet,
}

impl Elimination {
    /// Creates an elimination of a single digit from a set of cells.
    #[must_use]
    pub const fn of_digit(cells: CellSet, digit: Digit) -> Self {
        Elimination {
            cells,
            digits: DigitSet::from_digit(digit),
        }
    }

    /// Returns whether applying this elimination to `candidates` would
    /// change anything.
    #[must_use]
    pub fn changes(&self, candidates: &Candidates) -> bool {
        self.digits
            .into_iter()
            .any(|digit| candidates.would_remove_mask(self.cells, digit))
    }
}

/// The rule that fired in a simple-coloring deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringRule {
    /// Two cells of one color share a unit, so that color is false
    /// everywhere.
    Rule2,
    /// A cell outside the chain sees both colors, so it cannot hold the
    /// digit.
    Rule4,
}

/// A single human-style deduction, tagged by technique.
///
/// Every variant describes both the evidence (pivot cells, digits, units)
/// and the state change. [`apply`] performs the change; a hint returned by
/// [`get_hint`](crate::get_hint) always makes progress when applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// A placed digit disagrees with the unique solution.
    IncorrectValue {
        /// The offending cell.
        cell: Cell,
        /// The digit currently placed there.
        actual: Digit,
        /// The digit the solution requires.
        correct: Digit,
    },
    /// An empty cell's pencil marks are missing its solution digit.
    MissingCandidate {
        /// The affected cell.
        cell: Cell,
        /// The digit to restore.
        digit: Digit,
    },
    /// A single-cell placement (naked single, last remaining, hidden
    /// single).
    Single {
        /// The placing technique.
        technique: Technique,
        /// The cell receiving the digit.
        cell: Cell,
        /// The digit to place.
        digit: Digit,
        /// The unit justifying the placement, when one does.
        unit: Option<Unit>,
    },
    /// k cells of one unit covering exactly k digits.
    NakedSet {
        /// `NakedPairs`, `NakedTriples`, or `NakedQuads`.
        technique: Technique,
        /// The unit containing the set.
        unit: Unit,
        /// The k cells forming the set.
        cells: CellSet,
        /// The k digits they cover.
        digits: DigitSet,
        /// Pencil marks removed from the rest of the unit.
        elimination: Elimination,
    },
    /// k digits confined to k cells of one unit.
    HiddenSet {
        /// `HiddenPairs`, `HiddenTriples`, or `HiddenQuads`.
        technique: Technique,
        /// The unit containing the set.
        unit: Unit,
        /// The k cells hosting the digits.
        cells: CellSet,
        /// The k confined digits.
        digits: DigitSet,
        /// The other pencil marks removed from those cells.
        elimination: Elimination,
    },
    /// A digit confined to the intersection of a box and a line.
    IntersectionRemoval {
        /// `PointingPairs` or `BoxLineReduction`.
        technique: Technique,
        /// The confined digit.
        digit: Digit,
        /// The intersection cells carrying the digit.
        cells: CellSet,
        /// The unit the digit is confined within.
        primary: Unit,
        /// The unit the digit is removed from.
        secondary: Unit,
        /// Pencil marks removed from `secondary` outside the intersection.
        elimination: Elimination,
    },
    /// A basic fish: X-Wing (2 lines) or Swordfish (3 lines).
    Fish {
        /// `XWing` or `Swordfish`.
        technique: Technique,
        /// The fish digit.
        digit: Digit,
        /// The candidate cells forming the pattern.
        corners: CellSet,
        /// The base lines (all rows or all columns).
        base: Vec<Unit>,
        /// The cover lines crossed by the pattern.
        cover: Vec<Unit>,
        /// The digit's pencil marks removed from the cover lines.
        elimination: Elimination,
    },
    /// A Y-Wing over three bi-value cells.
    YWing {
        /// The AB cell seeing both pincers.
        pivot: Cell,
        /// The AC pincer.
        pincer1: Cell,
        /// The BC pincer.
        pincer2: Cell,
        /// Candidate A, shared by pivot and `pincer1`.
        a: Digit,
        /// Candidate B, shared by pivot and `pincer2`.
        b: Digit,
        /// Candidate C, shared by the pincers and eliminated.
        c: Digit,
        /// C's pencil marks removed from cells seeing both pincers.
        elimination: Elimination,
    },
    /// A simple-coloring deduction on one digit.
    SimpleColoring {
        /// The colored digit.
        digit: Digit,
        /// The conjugate-pair edges of the colored component.
        chain: Vec<(Cell, Cell)>,
        /// Cells of the first color.
        color_a: CellSet,
        /// Cells of the second color.
        color_b: CellSet,
        /// The rule that produced the elimination.
        rule: ColoringRule,
        /// The digit's pencil marks removed.
        elimination: Elimination,
        /// For rule 2, the unit holding two same-colored cells.
        conflict_unit: Option<Unit>,
        /// For rule 4, one eliminated cell seeing both colors.
        witness: Option<Cell>,
    },
    /// A remote bi-value pair within one chute.
    ChuteRemotePairs {
        /// The shared candidate pair, ascending.
        digits: (Digit, Digit),
        /// The two non-peer bi-value cells.
        remote_pair: (Cell, Cell),
        /// The chute containing both cells.
        chute: Chute,
        /// Cells of the chute's third box carrying the present digit.
        third_box_cells: CellSet,
        /// The pair digit present in the third box.
        present: Digit,
        /// The pair digit absent from the third box, eliminated.
        absent: Digit,
        /// The absent digit's pencil marks removed from cells seeing both
        /// remote cells.
        elimination: Elimination,
    },
}

impl Hint {
    /// Returns the technique that produced this hint.
    #[must_use]
    pub fn technique(&self) -> Technique {
        match self {
            Hint::IncorrectValue { .. } => Technique::IncorrectValue,
            Hint::MissingCandidate { .. } => Technique::MissingCandidate,
            Hint::Single { technique, .. }
            | Hint::NakedSet { technique, .. }
            | Hint::HiddenSet { technique, .. }
            | Hint::IntersectionRemoval { technique, .. }
            | Hint::Fish { technique, .. } => *technique,
            Hint::YWing { .. } => Technique::YWing,
            Hint::SimpleColoring { .. } => Technique::SimpleColoring,
            Hint::ChuteRemotePairs { .. } => Technique::ChuteRemotePairs,
        }
    }

    /// Returns the difficulty rating of this hint's technique.
    #[must_use]
    pub fn difficulty(&self) -> u8 {
        self.technique().difficulty()
    }

    /// Returns the pencil-mark removals of this hint, if it has any.
    ///
    /// Placements and candidate restorations return `None`.
    #[must_use]
    pub fn elimination(&self) -> Option<&Elimination> {
        match self {
            Hint::IncorrectValue { .. } | Hint::MissingCandidate { .. } | Hint::Single { .. } => {
                None
            }
            Hint::NakedSet { elimination, .. }
            | Hint::HiddenSet { elimination, .. }
            | Hint::IntersectionRemoval { elimination, .. }
            | Hint::Fish { elimination, .. }
            | Hint::YWing { elimination, .. }
            | Hint::SimpleColoring { elimination, .. }
            | Hint::ChuteRemotePairs { elimination, .. } => Some(elimination),
        }
    }
}

/// Applies a hint to the board state, exactly as a human would.
///
/// Placements write the digit and rub it out of all 20 peers' pencil marks;
/// eliminations rub out the listed marks; an incorrect value is overwritten
/// with the solution digit; a missing candidate is penciled back in.
///
/// Returns whether the state actually changed.
pub fn apply(hint: &Hint, board: &mut Board, candidates: &mut Candidates) -> bool {
    match hint {
        Hint::IncorrectValue { cell, correct, .. } => {
            let changed = board.get(*cell) != Some(*correct);
            place(board, candidates, *cell, *correct);
            changed
        }
        Hint::MissingCandidate { cell, digit } => candidates.add(*cell, *digit),
        Hint::Single { cell, digit, .. } => {
            let changed = board.get(*cell).is_none();
            place(board, candidates, *cell, *digit);
            changed
        }
        Hint::NakedSet { elimination, .. }
        | Hint::HiddenSet { elimination, .. }
        | Hint::IntersectionRemoval { elimination, .. }
        | Hint::Fish { elimination, .. }
        | Hint::YWing { elimination, .. }
        | Hint::SimpleColoring { elimination, .. }
        | Hint::ChuteRemotePairs { elimination, .. } => eliminate(candidates, elimination),
    }
}

fn place(board: &mut Board, candidates: &mut Candidates, cell: Cell, digit: Digit) {
    board.set(cell, Some(digit));
    candidates.place(cell, digit);
    candidates.remove_mask(cell.peers(), digit);
}

fn eliminate(candidates: &mut Candidates, elimination: &Elimination) -> bool {
    let mut changed = false;
    for digit in elimination.digits {
        changed |= candidates.remove_mask(elimination.cells, digit);
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_single_places_and_clears_peers() {
        let mut board = Board::new();
        let mut candidates = Candidates::new();
        let hint = Hint::Single {
            technique: Technique::NakedSingle,
            cell: Cell::new(0, 0),
            digit: Digit::D5,
            unit: None,
        };

        assert!(apply(&hint, &mut board, &mut candidates));
        assert_eq!(board.get(Cell::new(0, 0)), Some(Digit::D5));
        assert!(!candidates.candidates_at(Cell::new(0, 8)).contains(Digit::D5));
        assert!(!candidates.candidates_at(Cell::new(2, 2)).contains(Digit::D5));

        // Re-applying the same placement is no progress.
        assert!(!apply(&hint, &mut board, &mut candidates));
    }

    #[test]
    fn test_apply_incorrect_value_overwrites() {
        let mut board = Board::from_line("9");
        let mut candidates = Candidates::from_board(&board);
        let hint = Hint::IncorrectValue {
            cell: Cell::new(0, 0),
            actual: Digit::D9,
            correct: Digit::D5,
        };

        assert!(apply(&hint, &mut board, &mut candidates));
        assert_eq!(board.get(Cell::new(0, 0)), Some(Digit::D5));
        assert_eq!(
            candidates.candidates_at(Cell::new(0, 0)).single(),
            Some(Digit::D5)
        );
    }

    #[test]
    fn test_apply_missing_candidate_restores() {
        let mut board = Board::new();
        let mut candidates = Candidates::new();
        candidates.remove(Cell::new(3, 3), Digit::D7);

        let hint = Hint::MissingCandidate {
            cell: Cell::new(3, 3),
            digit: Digit::D7,
        };
        assert!(apply(&hint, &mut board, &mut candidates));
        assert!(candidates.candidates_at(Cell::new(3, 3)).contains(Digit::D7));
        assert!(!apply(&hint, &mut board, &mut candidates));
    }

    #[test]
    fn test_apply_elimination_reports_progress() {
        let mut board = Board::new();
        let mut candidates = Candidates::new();
        let elimination = Elimination {
            cells: CellSet::from_iter([Cell::new(0, 2), Cell::new(0, 3)]),
            digits: DigitSet::from_iter([Digit::D1, Digit::D2]),
        };
        let hint = Hint::NakedSet {
            technique: Technique::NakedPairs,
            unit: Unit::Row { r: 0 },
            cells: CellSet::from_iter([Cell::new(0, 0), Cell::new(0, 1)]),
            digits: elimination.digits,
            elimination,
        };

        assert!(elimination.changes(&candidates));
        assert!(apply(&hint, &mut board, &mut candidates));
        assert!(!candidates.candidates_at(Cell::new(0, 2)).contains(Digit::D1));
        assert!(!candidates.candidates_at(Cell::new(0, 3)).contains(Digit::D2));

        assert!(!elimination.changes(&candidates));
        assert!(!apply(&hint, &mut board, &mut candidates));
    }
}
