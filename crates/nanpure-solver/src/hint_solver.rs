//! The hint-driven trace solver.

use nanpure_core::{Board, Candidates};

use crate::{Hint, Search, Technique, hint, technique};

/// Default cap on the number of hint steps per solve.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// One recorded step of a hint-driven solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintStep {
    /// The technique that fired.
    pub technique: Technique,
    /// Its difficulty rating.
    pub difficulty: u8,
    /// The full hint record.
    pub hint: Hint,
    /// The board placements after applying the hint.
    pub board_after: Board,
}

/// The outcome of driving the hint engine to termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSolve {
    /// Whether the board ended fully placed.
    pub solved: bool,
    /// The applied steps, in order.
    pub steps: Vec<HintStep>,
    /// The final board placements.
    pub board: Board,
    /// The final pencil marks.
    pub candidates: Candidates,
}

/// Solves a puzzle by repeatedly asking for and applying hints.
///
/// The driver stops when the board is fully placed, when no technique
/// applies, or when `max_steps` hints have been applied (the trace so far
/// is returned either way). A hint whose application changes nothing is
/// treated as terminal and logged; the driver never loops on it.
///
/// Ground truth for the mistake detectors is computed up front and only
/// when the puzzle has a unique solution.
#[must_use]
pub fn solve_with_hints(puzzle: &Board, max_steps: usize) -> HintSolve {
    let solution = unique_solution(puzzle);
    let mut board = *puzzle;
    let mut candidates = Candidates::from_board(&board);
    let mut steps = Vec::new();

    while !board.is_complete() {
        if steps.len() >= max_steps {
            log::debug!("hint solve hit the {max_steps}-step cap");
            break;
        }
        let Some(found) = technique::get_hint(&board, &candidates, solution.as_ref()) else {
            break;
        };
        let technique = found.technique();
        if !hint::apply(&found, &mut board, &mut candidates) {
            log::warn!("{technique} hint made no progress; stopping the trace");
            break;
        }
        log::trace!("step {}: {technique}", steps.len() + 1);
        steps.push(HintStep {
            technique,
            difficulty: technique.difficulty(),
            hint: found,
            board_after: board,
        });
    }

    HintSolve {
        solved: board.is_complete(),
        steps,
        board,
        candidates,
    }
}

/// Returns the puzzle's solution when it is unique, `None` otherwise.
fn unique_solution(puzzle: &Board) -> Option<Board> {
    let solution = Search::is_unique(puzzle)
        .ok()?
        .then(|| Search::new().solve(puzzle))??;
    Some(solution)
}

#[cfg(test)]
mod tests {
    use nanpure_core::Cell;

    use super::*;

    const EASY: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const EASY_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solves_easy_puzzle_with_hints() {
        let result = solve_with_hints(&Board::from_line(EASY), DEFAULT_MAX_STEPS);
        assert!(result.solved);
        assert_eq!(result.board, Board::from_line(EASY_SOLUTION));
        assert_eq!(result.steps.len(), 51); // one placement per empty cell
        assert!(result.steps.iter().all(|s| s.difficulty > 0));
    }

    #[test]
    fn test_every_step_snapshots_the_board() {
        let result = solve_with_hints(&Board::from_line(EASY), DEFAULT_MAX_STEPS);
        let mut filled = Board::from_line(EASY).clue_count();
        for step in &result.steps {
            filled += 1;
            assert_eq!(step.board_after.clue_count(), filled);
        }
    }

    #[test]
    fn test_step_cap_truncates_the_trace() {
        let result = solve_with_hints(&Board::from_line(EASY), 3);
        assert!(!result.solved);
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn test_empty_board_makes_no_progress() {
        // No unique solution and no forced deduction anywhere.
        let result = solve_with_hints(&Board::new(), DEFAULT_MAX_STEPS);
        assert!(!result.solved);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_incorrect_value_is_repaired_first() {
        use nanpure_core::Digit;

        // A player writes a wrong digit into an empty cell; ground truth
        // comes from the untouched clues.
        let puzzle = Board::from_line(EASY);
        let solution = Board::from_line(EASY_SOLUTION);
        let cell = Cell::new(0, 2); // solution digit is 4
        let mut board = puzzle;
        board.set(cell, Some(Digit::D8));
        let mut candidates = Candidates::from_board(&board);

        let found = technique::get_hint(&board, &candidates, Some(&solution)).unwrap();
        assert_eq!(found.technique(), Technique::IncorrectValue);
        assert_eq!(
            found,
            Hint::IncorrectValue {
                cell,
                actual: Digit::D8,
                correct: Digit::D4,
            }
        );

        assert!(hint::apply(&found, &mut board, &mut candidates));
        assert_eq!(board.get(cell), Some(Digit::D4));
    }
}
