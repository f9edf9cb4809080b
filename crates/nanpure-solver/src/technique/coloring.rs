//! Simple coloring over conjugate pairs.

use nanpure_core::{Board, Candidates, Cell, CellSet, Digit, Unit};
use tinyvec::ArrayVec;

use crate::{ColoringRule, Elimination, Hint};

/// Finds a simple-coloring deduction for some digit.
///
/// For each digit, units with exactly two candidate cells define conjugate
/// pairs; the pairs form a graph whose connected components are two-colored.
/// Rule 2 fires when one unit holds two same-colored cells (that color is
/// false everywhere); rule 4 fires when an outside candidate cell sees both
/// colors. Rule 2 is checked before rule 4 within each component;
/// components are visited in the order of their smallest cell.
pub(crate) fn find(board: &Board, candidates: &Candidates) -> Option<Hint> {
    let filled = board.filled_cells();

    for digit in Digit::ALL {
        let places = candidates.digit_cells(digit) & !filled;

        // Conjugate-pair edges, adjacency capped at one partner per unit.
        let mut edges: Vec<(Cell, Cell)> = Vec::new();
        let mut adjacency: [ArrayVec<[Cell; 3]>; 81] = [ArrayVec::new(); 81];
        for unit in Unit::ALL {
            let in_unit = places & unit.cells();
            if in_unit.len() != 2 {
                continue;
            }
            let mut pair = in_unit;
            let Some(first) = pair.next() else { continue };
            let Some(second) = pair.next() else { continue };
            edges.push((first, second));
            adjacency[first.index()].push(second);
            adjacency[second.index()].push(first);
        }
        if edges.is_empty() {
            continue;
        }

        let nodes: CellSet = edges.iter().flat_map(|&(a, b)| [a, b]).collect();
        let mut visited = CellSet::new();
        for start in nodes {
            if visited.contains(start) {
                continue;
            }
            let (color_a, color_b) = two_color(&adjacency, start);
            visited |= color_a | color_b;
            let component = color_a | color_b;
            let chain: Vec<(Cell, Cell)> = edges
                .iter()
                .copied()
                .filter(|(a, _)| component.contains(*a))
                .collect();

            // Rule 2: one unit, two cells of the same color.
            for unit in Unit::ALL {
                for (this, _other) in [(color_a, color_b), (color_b, color_a)] {
                    if (this & unit.cells()).len() < 2 {
                        continue;
                    }
                    return Some(Hint::SimpleColoring {
                        digit,
                        chain,
                        color_a,
                        color_b,
                        rule: ColoringRule::Rule2,
                        elimination: Elimination::of_digit(this, digit),
                        conflict_unit: Some(unit),
                        witness: None,
                    });
                }
            }

            // Rule 4: outside candidates seeing both colors.
            let outside = places.difference(component);
            let elim_cells: CellSet = outside
                .filter(|cell| {
                    let peers = cell.peers();
                    !(peers & color_a).is_empty() && !(peers & color_b).is_empty()
                })
                .collect();
            if !elim_cells.is_empty() {
                return Some(Hint::SimpleColoring {
                    digit,
                    chain,
                    color_a,
                    color_b,
                    rule: ColoringRule::Rule4,
                    elimination: Elimination::of_digit(elim_cells, digit),
                    conflict_unit: None,
                    witness: elim_cells.first(),
                });
            }
        }
    }
    None
}

/// Two-colors the component reachable from `start`.
fn two_color(adjacency: &[ArrayVec<[Cell; 3]>; 81], start: Cell) -> (CellSet, CellSet) {
    let mut color_a = CellSet::new();
    let mut color_b = CellSet::new();
    let mut stack = vec![(start, false)];
    while let Some((cell, colored_b)) = stack.pop() {
        let colors = if colored_b {
            &mut color_b
        } else {
            &mut color_a
        };
        if !colors.insert(cell) {
            continue;
        }
        for &next in &adjacency[cell.index()] {
            if !color_a.contains(next) && !color_b.contains(next) {
                stack.push((next, !colored_b));
            }
        }
    }
    (color_a, color_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Technique, testing::DetectorTester};

    /// Confines `digit` within `unit` to exactly the given cells.
    fn confine(
        mut tester: DetectorTester,
        unit: Unit,
        digit: Digit,
        keep: &[Cell],
    ) -> DetectorTester {
        for cell in unit.cells() {
            if !keep.contains(&cell) {
                tester = tester.remove(cell, digit);
            }
        }
        tester
    }

    /// Conjugate chain for D7: (0,0)-(0,8) in row 0, (0,8)-(4,8) in column
    /// 8, (4,8)-(4,0) in row 4. Colors: {(0,0), (4,8)} vs {(0,8), (4,0)}.
    fn rule_4_state() -> DetectorTester {
        let d = Digit::D7;
        let mut tester = DetectorTester::new();
        tester = confine(tester, Unit::Row { r: 0 }, d, &[Cell::new(0, 0), Cell::new(0, 8)]);
        tester = confine(
            tester,
            Unit::Column { c: 8 },
            d,
            &[Cell::new(0, 8), Cell::new(4, 8)],
        );
        confine(
            tester,
            Unit::Row { r: 4 },
            d,
            &[Cell::new(4, 0), Cell::new(4, 8)],
        )
    }

    #[test]
    fn test_rule_4_elimination() {
        // Column 0 cells see (0,0) from one color and (4,0) from the
        // other, so they lose the digit.
        rule_4_state()
            .find(find)
            .assert_technique(Technique::SimpleColoring)
            .assert_eliminates(Cell::new(8, 0), Digit::D7)
            .assert_eliminates(Cell::new(2, 0), Digit::D7)
            .assert_applies();
    }

    #[test]
    fn test_rule_4_reports_rule_and_witness() {
        let found = rule_4_state().find(find);
        let Some(Hint::SimpleColoring {
            rule,
            witness,
            color_a,
            color_b,
            ..
        }) = found.hint()
        else {
            panic!("expected simple coloring");
        };
        assert_eq!(*rule, ColoringRule::Rule4);
        assert!(witness.is_some());
        // The two colors partition the four chain cells.
        assert_eq!((*color_a | *color_b).len(), 4);
        assert!((*color_a & *color_b).is_empty());
    }

    #[test]
    fn test_rule_2_fires_on_odd_cycle() {
        // Five conjugate pairs closing an odd cycle for D2:
        // (0,0)-(0,4) row 0, (0,4)-(4,4) column 4, (4,4)-(3,5) box 4,
        // (3,5)-(3,0) row 3, (3,0)-(0,0) column 0. Any two-coloring puts
        // two same-colored cells into one of those units.
        let d = Digit::D2;
        let mut tester = DetectorTester::new();
        tester = confine(tester, Unit::Row { r: 0 }, d, &[Cell::new(0, 0), Cell::new(0, 4)]);
        tester = confine(
            tester,
            Unit::Column { c: 4 },
            d,
            &[Cell::new(0, 4), Cell::new(4, 4)],
        );
        tester = confine(tester, Unit::Box { b: 4 }, d, &[Cell::new(4, 4), Cell::new(3, 5)]);
        tester = confine(tester, Unit::Row { r: 3 }, d, &[Cell::new(3, 0), Cell::new(3, 5)]);
        tester = confine(
            tester,
            Unit::Column { c: 0 },
            d,
            &[Cell::new(0, 0), Cell::new(3, 0)],
        );

        let found = tester.find(find);
        let Some(Hint::SimpleColoring {
            rule,
            conflict_unit,
            ..
        }) = found.hint()
        else {
            panic!("expected simple coloring");
        };
        assert_eq!(*rule, ColoringRule::Rule2);
        assert!(conflict_unit.is_some());
        found.assert_applies();
    }

    #[test]
    fn test_none_on_fresh_state() {
        DetectorTester::new().find(find).assert_none();
    }
}
