//! Naked single detection.

use nanpure_core::{Board, Candidates, Cell};

use crate::{Hint, Technique};

/// Finds an empty cell with exactly one remaining candidate.
///
/// Cells are scanned in row-major order, so the first naked single is
/// always the same for a given state.
pub(crate) fn find(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let decided = candidates.decided_cells();
    Cell::ALL.into_iter().find_map(|cell| {
        if board.get(cell).is_some() || !decided.contains(cell) {
            return None;
        }
        let digit = candidates.candidates_at(cell).single()?;
        Some(Hint::Single {
            technique: Technique::NakedSingle,
            cell,
            digit,
            unit: None,
        })
    })
}
