//! Naked pair/triple/quad detection.

use nanpure_core::{Board, Candidates, Cell, CellSet, DigitSet, Unit};
use tinyvec::ArrayVec;

use crate::{Elimination, Hint, Technique, technique::combinations};

/// Finds k cells of one unit whose combined candidates cover exactly k
/// digits, with at least one elimination elsewhere in the unit.
///
/// `k` selects the technique: 2 for pairs, 3 for triples, 4 for quads.
pub(crate) fn find(board: &Board, candidates: &Candidates, k: usize) -> Option<Hint> {
    let technique = match k {
        2 => Technique::NakedPairs,
        3 => Technique::NakedTriples,
        4 => Technique::NakedQuads,
        _ => unreachable!("naked sets are pairs, triples, or quads"),
    };
    let filled = board.filled_cells();

    for unit in Unit::ALL {
        let free = unit.cells() & !filled;
        let mut members: ArrayVec<[Cell; 9]> = ArrayVec::new();
        for cell in free {
            if (2..=k).contains(&candidates.candidates_at(cell).len()) {
                members.push(cell);
            }
        }
        if members.len() < k {
            continue;
        }

        let found = combinations(members.len(), k, |idx| {
            let mut cells = CellSet::new();
            let mut digits = DigitSet::new();
            for &i in idx {
                cells.insert(members[i]);
                digits |= candidates.candidates_at(members[i]);
            }
            if digits.len() != k {
                return None;
            }

            let elim_cells: CellSet = free
                .difference(cells)
                .filter(|cell| !(candidates.candidates_at(*cell) & digits).is_empty())
                .collect();
            if elim_cells.is_empty() {
                return None;
            }
            Some(Hint::NakedSet {
                technique,
                unit,
                cells,
                digits,
                elimination: Elimination {
                    cells: elim_cells,
                    digits,
                },
            })
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use nanpure_core::Digit;

    use super::*;
    use crate::testing::DetectorTester;

    #[test]
    fn test_finds_naked_pair_in_row() {
        DetectorTester::new()
            .keep_only(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(0, 3), [Digit::D1, Digit::D2])
            .find(|b, c| find(b, c, 2))
            .assert_technique(Technique::NakedPairs)
            .assert_eliminates(Cell::new(0, 4), Digit::D1)
            .assert_eliminates(Cell::new(0, 4), Digit::D2)
            .assert_eliminates(Cell::new(0, 8), Digit::D1)
            .assert_applies();
    }

    #[test]
    fn test_naked_pair_spares_its_own_cells() {
        let found = DetectorTester::new()
            .keep_only(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(0, 3), [Digit::D1, Digit::D2])
            .find(|b, c| find(b, c, 2));
        let Some(Hint::NakedSet { elimination, .. }) = found.hint() else {
            panic!("expected a naked set");
        };
        assert!(!elimination.cells.contains(Cell::new(0, 0)));
        assert!(!elimination.cells.contains(Cell::new(0, 3)));
    }

    #[test]
    fn test_finds_naked_triple_with_partial_cells() {
        // Triple cells need not each hold all three digits.
        DetectorTester::new()
            .keep_only(Cell::new(2, 0), [Digit::D4, Digit::D5])
            .keep_only(Cell::new(2, 4), [Digit::D5, Digit::D6])
            .keep_only(Cell::new(2, 7), [Digit::D4, Digit::D6])
            .find(|b, c| find(b, c, 3))
            .assert_technique(Technique::NakedTriples)
            .assert_eliminates(Cell::new(2, 1), Digit::D4)
            .assert_eliminates(Cell::new(2, 8), Digit::D6)
            .assert_applies();
    }

    #[test]
    fn test_finds_naked_quad_in_column() {
        DetectorTester::new()
            .keep_only(Cell::new(0, 5), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(2, 5), [Digit::D2, Digit::D3])
            .keep_only(Cell::new(4, 5), [Digit::D3, Digit::D4])
            .keep_only(Cell::new(8, 5), [Digit::D4, Digit::D1])
            .find(|b, c| find(b, c, 4))
            .assert_technique(Technique::NakedQuads)
            .assert_eliminates(Cell::new(1, 5), Digit::D1)
            .assert_eliminates(Cell::new(7, 5), Digit::D4)
            .assert_applies();
    }

    #[test]
    fn test_no_hint_without_eliminations() {
        // The pair digits appear nowhere else in the row, its boxes, or the
        // columns, so there is nothing to remove in the shared units.
        let mut tester = DetectorTester::new()
            .keep_only(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(0, 1), [Digit::D1, Digit::D2]);
        for cell in CellSet::ROWS[0] | CellSet::BOXES[0] {
            if cell != Cell::new(0, 0) && cell != Cell::new(0, 1) {
                tester = tester.remove(cell, Digit::D1).remove(cell, Digit::D2);
            }
        }
        tester.find(|b, c| find(b, c, 2)).assert_none();
    }

    #[test]
    fn test_none_on_fresh_state() {
        DetectorTester::new().find(|b, c| find(b, c, 2)).assert_none();
    }
}
