//! Y-Wing detection.

use nanpure_core::{Board, Candidates, DigitSet};

use crate::{Elimination, Hint};

/// Finds a Y-Wing: a bi-value pivot AB seeing a bi-value pincer AC and a
/// bi-value pincer BC, eliminating C from every cell seeing both pincers.
pub(crate) fn find(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let filled = board.filled_cells();
    let bivalue = candidates.classify_cells::<3>()[2] & !filled;

    for pivot in bivalue {
        let pivot_digits = candidates.candidates_at(pivot);
        let Some((a, b)) = pivot_digits.pair() else {
            continue;
        };
        let pivot_peers = pivot.peers() & bivalue;

        for pincer1 in pivot_peers & candidates.digit_cells(a) {
            let pincer1_digits = candidates.candidates_at(pincer1);
            let Some(c) = pincer1_digits.difference(pivot_digits).single() else {
                continue;
            };
            let pincer2_digits = DigitSet::from_iter([b, c]);
            for pincer2 in pivot_peers & candidates.digit_cells(c) {
                if pincer2 == pincer1 || candidates.candidates_at(pincer2) != pincer2_digits {
                    continue;
                }
                let elim_cells =
                    pincer1.peers() & pincer2.peers() & candidates.digit_cells(c) & !filled;
                if elim_cells.is_empty() {
                    continue;
                }
                return Some(Hint::YWing {
                    pivot,
                    pincer1,
                    pincer2,
                    a,
                    b,
                    c,
                    elimination: Elimination::of_digit(elim_cells, c),
                });
            }
        }
    }
    None
}
