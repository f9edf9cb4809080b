//! Hidden pair/triple/quad detection.

use nanpure_core::{Board, Candidates, CellSet, Digit, DigitSet, Unit};
use tinyvec::ArrayVec;

use crate::{Elimination, Hint, Technique, technique::combinations};

/// Finds k digits collectively confined to k cells of one unit, with other
/// pencil marks to strip from those cells.
///
/// `k` selects the technique: 2 for pairs, 3 for triples, 4 for quads.
pub(crate) fn find(board: &Board, candidates: &Candidates, k: usize) -> Option<Hint> {
    let technique = match k {
        2 => Technique::HiddenPairs,
        3 => Technique::HiddenTriples,
        4 => Technique::HiddenQuads,
        _ => unreachable!("hidden sets are pairs, triples, or quads"),
    };
    let filled = board.filled_cells();

    for unit in Unit::ALL {
        let free = unit.cells() & !filled;
        if free.len() <= k {
            continue;
        }
        // Digits still to be placed in this unit, with 2..=k possible cells.
        let mut members: ArrayVec<[u8; 9]> = ArrayVec::new();
        for digit in Digit::ALL {
            let places = (candidates.digit_cells(digit) & free).len();
            if (2..=k).contains(&places) {
                members.push(digit.value());
            }
        }
        if members.len() < k {
            continue;
        }

        let found = combinations(members.len(), k, |idx| {
            let mut digits = DigitSet::new();
            let mut cells = CellSet::new();
            for &i in idx {
                let digit = Digit::from_value(members[i]);
                digits.insert(digit);
                cells |= candidates.digit_cells(digit) & free;
            }
            if cells.len() != k {
                return None;
            }

            let mut extras = DigitSet::new();
            let mut elim_cells = CellSet::new();
            for cell in cells {
                let other = candidates.candidates_at(cell).difference(digits);
                if !other.is_empty() {
                    extras |= other;
                    elim_cells.insert(cell);
                }
            }
            if elim_cells.is_empty() {
                return None;
            }
            Some(Hint::HiddenSet {
                technique,
                unit,
                cells,
                digits,
                elimination: Elimination {
                    cells: elim_cells,
                    digits: extras,
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
    use nanpure_core::Cell;

    use super::*;
    use crate::testing::DetectorTester;

    /// Confines `digit` within row `r` to the given columns.
    fn confine_in_row(mut tester: DetectorTester, r: u8, digit: Digit, cols: &[u8]) -> DetectorTester {
        for cell in CellSet::ROWS[r as usize] {
            if !cols.contains(&cell.col()) {
                tester = tester.remove(cell, digit);
            }
        }
        tester
    }

    #[test]
    fn test_finds_hidden_pair_in_row() {
        let mut tester = DetectorTester::new();
        tester = confine_in_row(tester, 0, Digit::D1, &[2, 6]);
        tester = confine_in_row(tester, 0, Digit::D2, &[2, 6]);

        tester
            .find(|b, c| find(b, c, 2))
            .assert_technique(Technique::HiddenPairs)
            // The two host cells lose every other pencil mark.
            .assert_eliminates(Cell::new(0, 2), Digit::D3)
            .assert_eliminates(Cell::new(0, 2), Digit::D9)
            .assert_eliminates(Cell::new(0, 6), Digit::D5)
            .assert_applies();
    }

    #[test]
    fn test_finds_hidden_triple() {
        let mut tester = DetectorTester::new();
        tester = confine_in_row(tester, 4, Digit::D4, &[0, 3]);
        tester = confine_in_row(tester, 4, Digit::D5, &[3, 8]);
        tester = confine_in_row(tester, 4, Digit::D6, &[0, 8]);

        tester
            .find(|b, c| find(b, c, 3))
            .assert_technique(Technique::HiddenTriples)
            .assert_eliminates(Cell::new(4, 0), Digit::D1)
            .assert_eliminates(Cell::new(4, 3), Digit::D2)
            .assert_eliminates(Cell::new(4, 8), Digit::D9)
            .assert_applies();
    }

    #[test]
    fn test_finds_hidden_quad() {
        let mut tester = DetectorTester::new();
        for digit in [Digit::D1, Digit::D2, Digit::D3, Digit::D4] {
            tester = confine_in_row(tester, 8, digit, &[0, 1, 2, 3]);
        }

        tester
            .find(|b, c| find(b, c, 4))
            .assert_technique(Technique::HiddenQuads)
            .assert_eliminates(Cell::new(8, 0), Digit::D5)
            .assert_eliminates(Cell::new(8, 3), Digit::D9)
            .assert_applies();
    }

    #[test]
    fn test_no_hint_when_cells_are_already_clean() {
        let mut tester = DetectorTester::new();
        tester = confine_in_row(tester, 0, Digit::D1, &[2, 6]);
        tester = confine_in_row(tester, 0, Digit::D2, &[2, 6]);
        tester = tester
            .keep_only(Cell::new(0, 2), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(0, 6), [Digit::D1, Digit::D2]);

        tester.find(|b, c| find(b, c, 2)).assert_none();
    }

    #[test]
    fn test_none_on_fresh_state() {
        DetectorTester::new().find(|b, c| find(b, c, 2)).assert_none();
    }
}
