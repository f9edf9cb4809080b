//! Difficulty scoring of hint-solve traces.

use nanpure_core::Board;

use crate::{HintSolve, Technique, hint_solver};

/// The difficulty reserved for puzzles the hint engine cannot finish.
pub const UNSOLVABLE_BY_LOGIC: u8 = 100;

/// Coarse difficulty band over the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// Difficulty 0: mistake-repair steps only.
    Error,
    /// Difficulty 1-8.
    Trivial,
    /// Difficulty 9-25.
    Basic,
    /// Difficulty 26-45.
    Intermediate,
    /// Difficulty 46-68.
    Tough,
    /// Difficulty 69-84.
    Diabolical,
    /// Difficulty 85-92.
    Extreme,
    /// Difficulty 93-96.
    Master,
    /// Difficulty 97-100.
    Grandmaster,
}

impl Grade {
    /// All grades in ascending difficulty order.
    pub const ALL: [Self; 9] = [
        Self::Error,
        Self::Trivial,
        Self::Basic,
        Self::Intermediate,
        Self::Tough,
        Self::Diabolical,
        Self::Extreme,
        Self::Master,
        Self::Grandmaster,
    ];

    /// Returns the band containing `difficulty`.
    #[must_use]
    pub const fn of(difficulty: u8) -> Self {
        match difficulty {
            0 => Self::Error,
            1..=8 => Self::Trivial,
            9..=25 => Self::Basic,
            26..=45 => Self::Intermediate,
            46..=68 => Self::Tough,
            69..=84 => Self::Diabolical,
            85..=92 => Self::Extreme,
            93..=96 => Self::Master,
            _ => Self::Grandmaster,
        }
    }

    /// Returns the lowercase band name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Trivial => "trivial",
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Tough => "tough",
            Self::Diabolical => "diabolical",
            Self::Extreme => "extreme",
            Self::Master => "master",
            Self::Grandmaster => "grandmaster",
        }
    }

    /// Returns the generation target for this band as `(target, tolerance)`.
    ///
    /// The targets are the band midpoints used by the difficulty-targeted
    /// generator.
    #[must_use]
    pub const fn generation_target(self) -> (f64, f64) {
        match self {
            // Error has no generation target; reuse the trivial band.
            Self::Error | Self::Trivial => (4.0, 4.0),
            Self::Basic => (17.0, 8.0),
            Self::Intermediate => (35.5, 9.5),
            Self::Tough => (56.0, 12.0),
            Self::Diabolical => (76.0, 8.0),
            Self::Extreme => (88.0, 4.0),
            Self::Master => (94.0, 2.0),
            Self::Grandmaster => (98.0, 1.0),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the difficulty band containing `difficulty`.
///
/// Free-function spelling of [`Grade::of`].
#[must_use]
pub const fn difficulty_to_category(difficulty: u8) -> Grade {
    Grade::of(difficulty)
}

/// The scored difficulty of one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRating {
    /// Overall difficulty, 1-100.
    pub difficulty: u8,
    /// The band containing `difficulty`.
    pub grade: Grade,
    /// Whether the hint engine solved the puzzle to completion.
    pub solvable: bool,
    /// Distinct techniques used, in order of first use.
    pub techniques_used: Vec<Technique>,
    /// The highest-rated technique used, if any step was taken.
    pub hardest: Option<Technique>,
    /// Steps taken by the trace driver.
    pub total_steps: usize,
    /// Per-technique step counts, in order of first use.
    pub breakdown: Vec<(Technique, usize)>,
}

/// Scores a finished hint-solve trace.
///
/// An unsolved trace rates [`UNSOLVABLE_BY_LOGIC`]. A trace of only
/// difficulty-0 repairs rates 1. Otherwise the score blends the hardest
/// technique (weight 0.7), the mean step difficulty (0.2), and a small
/// diversity bonus capped at 5, clamped to 1-100.
#[must_use]
pub fn score_trace(result: &HintSolve) -> PuzzleRating {
    let mut techniques_used = Vec::new();
    let mut breakdown: Vec<(Technique, usize)> = Vec::new();
    for step in &result.steps {
        match breakdown.iter_mut().find(|(t, _)| *t == step.technique) {
            Some((_, count)) => *count += 1,
            None => {
                techniques_used.push(step.technique);
                breakdown.push((step.technique, 1));
            }
        }
    }
    let hardest = techniques_used
        .iter()
        .copied()
        .max_by_key(|t| t.difficulty());

    let difficulty = if result.solved {
        rate_steps(&techniques_used, &breakdown)
    } else {
        UNSOLVABLE_BY_LOGIC
    };

    PuzzleRating {
        difficulty,
        grade: Grade::of(difficulty),
        solvable: result.solved,
        techniques_used,
        hardest,
        total_steps: result.steps.len(),
        breakdown,
    }
}

fn rate_steps(techniques_used: &[Technique], breakdown: &[(Technique, usize)]) -> u8 {
    let rated: Vec<(f64, usize)> = breakdown
        .iter()
        .filter(|(t, _)| t.difficulty() > 0)
        .map(|(t, count)| (f64::from(t.difficulty()), *count))
        .collect();
    if rated.is_empty() {
        return 1;
    }

    let hardest = rated.iter().map(|(d, _)| *d).fold(0.0, f64::max);
    let steps: usize = rated.iter().map(|(_, count)| count).sum();
    #[expect(clippy::cast_precision_loss)]
    let mean = rated.iter().map(|(d, count)| d * *count as f64).sum::<f64>() / steps as f64;
    let diversity = techniques_used
        .iter()
        .filter(|t| t.grade() > Grade::Trivial)
        .count();
    #[expect(clippy::cast_precision_loss)]
    let bonus = f64::min(0.5 * diversity as f64, 5.0);

    let score = (0.7 * hardest + 0.2 * mean + bonus).round();
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = score.clamp(1.0, 100.0) as u8;
    score
}

/// Solves `puzzle` with the hint engine and scores the trace.
///
/// Deterministic: repeated calls on the same puzzle return the same rating,
/// technique list, and step count.
#[must_use]
pub fn evaluate_puzzle_difficulty(puzzle: &Board, max_steps: usize) -> PuzzleRating {
    score_trace(&hint_solver::solve_with_hints(puzzle, max_steps))
}
