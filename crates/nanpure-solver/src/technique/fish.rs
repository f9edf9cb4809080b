//! Basic fish patterns: X-Wing and Swordfish.

use nanpure_core::{Board, Candidates, CellSet, Digit, Unit};
use tinyvec::ArrayVec;

use crate::{Elimination, Hint, Technique, technique::combinations};

/// Finds a fish of `size` base lines for some digit.
///
/// `size` 2 is an X-Wing: a digit held to exactly two cells in each of two
/// parallel lines, aligned on the same two cross-lines. `size` 3 is a
/// Swordfish, allowing two or three cells per base line over three
/// cross-lines. The digit is eliminated from the cross-lines outside the
/// pattern. Rows are tried as the base before columns.
pub(crate) fn find(board: &Board, candidates: &Candidates, size: usize) -> Option<Hint> {
    let technique = match size {
        2 => Technique::XWing,
        3 => Technique::Swordfish,
        _ => unreachable!("only X-Wing and Swordfish fish are rated"),
    };
    let filled = board.filled_cells();

    for digit in Digit::ALL {
        let places = candidates.digit_cells(digit) & !filled;
        for rows_as_base in [true, false] {
            if let Some(hint) =
                find_in_orientation(technique, digit, places, size, rows_as_base)
            {
                return Some(hint);
            }
        }
    }
    None
}

fn find_in_orientation(
    technique: Technique,
    digit: Digit,
    places: CellSet,
    size: usize,
    rows_as_base: bool,
) -> Option<Hint> {
    let base_units = if rows_as_base {
        Unit::ROWS
    } else {
        Unit::COLUMNS
    };
    let cross_index = |cell: nanpure_core::Cell| {
        if rows_as_base { cell.col() } else { cell.row() }
    };

    // Base lines where the digit has 2..=size candidate cells.
    let mut lines: ArrayVec<[(u8, u16); 9]> = ArrayVec::new();
    for (i, unit) in (0u8..).zip(base_units) {
        let in_line = places & unit.cells();
        if !(2..=size).contains(&in_line.len()) {
            continue;
        }
        let mask = in_line.fold(0u16, |mask, cell| mask | 1 << cross_index(cell));
        lines.push((i, mask));
    }
    if lines.len() < size {
        return None;
    }

    combinations(lines.len(), size, |idx| {
        let cross_mask = idx.iter().fold(0u16, |mask, &i| mask | lines[i].1);
        if cross_mask.count_ones() as usize != size {
            return None;
        }

        let mut base_cells = CellSet::new();
        let mut base = Vec::with_capacity(size);
        for &i in idx {
            let unit = base_units[lines[i].0 as usize];
            base.push(unit);
            base_cells |= unit.cells();
        }
        let mut cover = Vec::with_capacity(size);
        let mut cover_cells = CellSet::new();
        for c in 0..9u8 {
            if cross_mask & (1 << c) != 0 {
                let unit = if rows_as_base {
                    Unit::Column { c }
                } else {
                    Unit::Row { r: c }
                };
                cover.push(unit);
                cover_cells |= unit.cells();
            }
        }

        let corners = places & base_cells & cover_cells;
        // A pattern folded into one box constrains nothing new.
        if (0..9).any(|b| CellSet::BOXES[b].is_superset(corners)) {
            return None;
        }

        let elim_cells = places & cover_cells & !base_cells;
        if elim_cells.is_empty() {
            return None;
        }
        Some(Hint::Fish {
            technique,
            digit,
            corners,
            base,
            cover,
            elimination: Elimination::of_digit(elim_cells, digit),
        })
    })
}
