//! Intersection removals: pointing pairs and box/line reduction.

use nanpure_core::{Board, Candidates, CellSet, Digit, Unit};

use crate::{Elimination, Hint, Technique};

/// Finds a digit whose candidates within a box all lie on one row or
/// column, eliminating the digit from that line outside the box.
pub(crate) fn find_pointing(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let filled = board.filled_cells();
    for unit in Unit::BOXES {
        let free = unit.cells() & !filled;
        for digit in Digit::ALL {
            let places = candidates.digit_cells(digit) & free;
            if places.len() < 2 {
                continue;
            }
            let Some(line) = common_line(places) else {
                continue;
            };
            let elim_cells =
                candidates.digit_cells(digit) & line.cells() & !unit.cells() & !filled;
            if elim_cells.is_empty() {
                continue;
            }
            return Some(Hint::IntersectionRemoval {
                technique: Technique::PointingPairs,
                digit,
                cells: places,
                primary: unit,
                secondary: line,
                elimination: Elimination::of_digit(elim_cells, digit),
            });
        }
    }
    None
}

/// Finds a digit whose candidates within a line all lie in one box,
/// eliminating the digit from the rest of the box.
pub(crate) fn find_box_line(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let filled = board.filled_cells();
    for unit in Unit::ROWS.into_iter().chain(Unit::COLUMNS) {
        let free = unit.cells() & !filled;
        for digit in Digit::ALL {
            let places = candidates.digit_cells(digit) & free;
            if places.len() < 2 {
                continue;
            }
            let Some(first) = places.first() else {
                continue;
            };
            let box_unit = Unit::Box {
                b: first.box_index(),
            };
            if !box_unit.cells().is_superset(places) {
                continue;
            }
            let elim_cells =
                candidates.digit_cells(digit) & box_unit.cells() & !unit.cells() & !filled;
            if elim_cells.is_empty() {
                continue;
            }
            return Some(Hint::IntersectionRemoval {
                technique: Technique::BoxLineReduction,
                digit,
                cells: places,
                primary: unit,
                secondary: box_unit,
                elimination: Elimination::of_digit(elim_cells, digit),
            });
        }
    }
    None
}

/// Returns the row or column containing every cell of `cells`, if any.
///
/// Rows win ties for single-cell sets, but callers only pass sets of two
/// or more cells.
fn common_line(cells: CellSet) -> Option<Unit> {
    let first = cells.first()?;
    let row = Unit::Row { r: first.row() };
    if row.cells().is_superset(cells) {
        return Some(row);
    }
    let column = Unit::Column { c: first.col() };
    column.cells().is_superset(cells).then_some(column)
}
