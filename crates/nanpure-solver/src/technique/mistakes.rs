//! Mistake detection against the unique solution.
//!
//! These detectors compare the working state against ground truth and only
//! run when the caller could obtain a unique solution for the original
//! clues. They rate difficulty 0: repairing a mistake is not a deduction.

use nanpure_core::{Board, Candidates, Cell};

use crate::Hint;

/// Finds a placed digit disagreeing with the solution.
pub(crate) fn find_incorrect_value(board: &Board, solution: &Board) -> Option<Hint> {
    Cell::ALL.into_iter().find_map(|cell| {
        let actual = board.get(cell)?;
        let correct = solution.get(cell)?;
        (actual != correct).then_some(Hint::IncorrectValue {
            cell,
            actual,
            correct,
        })
    })
}

/// Finds an empty cell whose pencil marks are missing its solution digit.
pub(crate) fn find_missing_candidate(
    board: &Board,
    candidates: &Candidates,
    solution: &Board,
) -> Option<Hint> {
    Cell::ALL.into_iter().find_map(|cell| {
        if board.get(cell).is_some() {
            return None;
        }
        let digit = solution.get(cell)?;
        (!candidates.candidates_at(cell).contains(digit))
            .then_some(Hint::MissingCandidate { cell, digit })
    })
}
