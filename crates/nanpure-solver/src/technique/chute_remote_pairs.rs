//! Chute remote pair detection.

use nanpure_core::{Board, Candidates, CellSet, Chute};

use crate::{Elimination, Hint};

/// Finds a remote pair within one chute.
///
/// Two non-peer bi-value cells with the same candidate pair sit in two
/// different boxes of a chute. If the chute's third box carries one pair
/// digit (placed or penciled) but not the other, the missing digit must go
/// into one of the two remote cells, so it is eliminated from every cell
/// seeing both of them.
pub(crate) fn find(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let filled = board.filled_cells();
    let bivalue = candidates.classify_cells::<3>()[2] & !filled;

    for chute in Chute::ALL {
        let in_chute = bivalue & chute.cells();
        if in_chute.len() < 2 {
            continue;
        }
        for first in in_chute {
            for second in in_chute {
                if second <= first || first.box_index() == second.box_index() {
                    continue;
                }
                if first.sees(second) {
                    continue;
                }
                let pair = candidates.candidates_at(first);
                if candidates.candidates_at(second) != pair {
                    continue;
                }
                let Some((x, y)) = pair.pair() else {
                    continue;
                };

                let third_box = chute
                    .boxes()
                    .into_iter()
                    .find(|b| *b != first.box_index() && *b != second.box_index());
                let Some(third_box) = third_box else {
                    continue;
                };
                let third_cells = CellSet::BOXES[third_box as usize];
                let has_x = !(candidates.digit_cells(x) & third_cells).is_empty();
                let has_y = !(candidates.digit_cells(y) & third_cells).is_empty();
                let (present, absent) = match (has_x, has_y) {
                    (true, false) => (x, y),
                    (false, true) => (y, x),
                    _ => continue,
                };

                let elim_cells = first.peers()
                    & second.peers()
                    & candidates.digit_cells(absent)
                    & !filled;
                if elim_cells.is_empty() {
                    continue;
                }
                return Some(Hint::ChuteRemotePairs {
                    digits: (x, y),
                    remote_pair: (first, second),
                    chute,
                    third_box_cells: candidates.digit_cells(present) & third_cells,
                    present,
                    absent,
                    elimination: Elimination::of_digit(elim_cells, absent),
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use nanpure_core::{Cell, Digit};

    use super::*;
    use crate::{Technique, testing::DetectorTester};

    /// Remote pair {1,2} at (0,0) and (2,4): box 0 and box 1 of band 1,
    /// different rows and columns. D2 is wiped from box 2, so D2 is the
    /// absent digit there while D1 stays present.
    fn remote_pair_state() -> DetectorTester {
        let mut tester = DetectorTester::new()
            .keep_only(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(2, 4), [Digit::D1, Digit::D2]);
        for cell in CellSet::BOXES[2] {
            tester = tester.remove(cell, Digit::D2);
        }
        tester
    }

    #[test]
    fn test_absent_digit_is_eliminated() {
        // (0,4) sees (0,0) by row and (2,4) by column.
        // (2,0) sees (0,0) by column and (2,4) by row.
        remote_pair_state()
            .find(find)
            .assert_technique(Technique::ChuteRemotePairs)
            .assert_eliminates(Cell::new(0, 4), Digit::D2)
            .assert_eliminates(Cell::new(2, 0), Digit::D2)
            .assert_applies();
    }

    #[test]
    fn test_reports_pair_and_orientation() {
        let found = remote_pair_state().find(find);
        let Some(Hint::ChuteRemotePairs {
            digits,
            remote_pair,
            chute,
            present,
            absent,
            ..
        }) = found.hint()
        else {
            panic!("expected chute remote pairs");
        };
        assert_eq!(*digits, (Digit::D1, Digit::D2));
        assert_eq!(*remote_pair, (Cell::new(0, 0), Cell::new(2, 4)));
        assert_eq!(*chute, Chute::Band { r: 0 });
        assert_eq!(*present, Digit::D1);
        assert_eq!(*absent, Digit::D2);
    }

    #[test]
    fn test_no_hint_when_both_digits_in_third_box() {
        DetectorTester::new()
            .keep_only(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(2, 4), [Digit::D1, Digit::D2])
            .find(find)
            .assert_none();
    }

    #[test]
    fn test_peer_cells_do_not_form_a_remote_pair() {
        // Same row: the cells see each other.
        let mut tester = DetectorTester::new()
            .keep_only(Cell::new(0, 0), [Digit::D1, Digit::D2])
            .keep_only(Cell::new(0, 4), [Digit::D1, Digit::D2]);
        for cell in CellSet::BOXES[2] {
            tester = tester.remove(cell, Digit::D2);
        }
        tester.find(find).assert_none();
    }

    #[test]
    fn test_none_on_fresh_state() {
        DetectorTester::new().find(find).assert_none();
    }
}
