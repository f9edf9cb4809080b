//! Hidden single detection.

use nanpure_core::{Board, Candidates, Digit, Unit};

use crate::{Hint, Technique};

/// Finds a unit where some digit has exactly one candidate cell left.
///
/// The cell itself may still carry several pencil marks; the unit forces
/// the digit. Units are scanned in table order, digits ascending.
pub(crate) fn find(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let filled = board.filled_cells();
    for unit in Unit::ALL {
        let free = unit.cells() & !filled;
        for digit in Digit::ALL {
            let places = candidates.digit_cells(digit) & free;
            let Some(cell) = places.single() else {
                continue;
            };
            // A lone candidate in its cell is a naked single, found earlier.
            if candidates.candidates_at(cell).len() == 1 {
                continue;
            }
            return Some(Hint::Single {
                technique: Technique::HiddenSingle,
                cell,
                digit,
                unit: Some(unit),
            });
        }
    }
    None
}
