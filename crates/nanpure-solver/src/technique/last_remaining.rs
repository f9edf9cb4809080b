//! Last-remaining-cell detection per unit kind.

use nanpure_core::{Board, DigitSet, Unit, UnitKind};

use crate::{Hint, Technique};

/// Finds a unit of the given kind with exactly one empty cell.
///
/// The placed digit is the one missing from the unit. Box, row, and column
/// variants are rated separately, so the battery calls this once per kind.
pub(crate) fn find(board: &Board, kind: UnitKind) -> Option<Hint> {
    let (technique, units) = match kind {
        UnitKind::Box => (Technique::LastRemainingInBox, Unit::BOXES),
        UnitKind::Row => (Technique::LastRemainingInRow, Unit::ROWS),
        UnitKind::Column => (Technique::LastRemainingInColumn, Unit::COLUMNS),
    };
    units.into_iter().find_map(|unit| {
        let empty = unit.cells().filter(|cell| board.get(*cell).is_none());
        let mut empty = empty.peekable();
        let cell = *empty.peek()?;
        if empty.count() != 1 {
            return None;
        }
        let seen: DigitSet = unit.cells().filter_map(|cell| board.get(cell)).collect();
        let digit = (!seen).single()?;
        Some(Hint::Single {
            technique,
            cell,
            digit,
            unit: Some(unit),
        })
    })
}

#[cfg(test)]
mod tests {
    use nanpure_core::{Cell, Digit};

    use super::*;
    use crate::testing::DetectorTester;

    fn fill_unit_except(tester: DetectorTester, unit: Unit, skip: Cell) -> DetectorTester {
        let mut tester = tester;
        for (i, cell) in (1..).zip(unit.cells().filter(|c| *c != skip)) {
            tester = tester.place(cell, Digit::from_value(i));
        }
        tester
    }

    #[test]
    fn test_finds_last_cell_of_box() {
        let gap = Cell::new(1, 1);
        fill_unit_except(DetectorTester::new(), Unit::Box { b: 0 }, gap)
            .find(|board, _| find(board, UnitKind::Box))
            .assert_technique(Technique::LastRemainingInBox)
            .assert_places(gap, Digit::D9)
            .assert_applies();
    }

    #[test]
    fn test_finds_last_cell_of_row() {
        let gap = Cell::new(4, 7);
        fill_unit_except(DetectorTester::new(), Unit::Row { r: 4 }, gap)
            .find(|board, _| find(board, UnitKind::Row))
            .assert_technique(Technique::LastRemainingInRow)
            .assert_places(gap, Digit::D9);
    }

    #[test]
    fn test_finds_last_cell_of_column() {
        let gap = Cell::new(0, 6);
        fill_unit_except(DetectorTester::new(), Unit::Column { c: 6 }, gap)
            .find(|board, _| find(board, UnitKind::Column))
            .assert_technique(Technique::LastRemainingInColumn)
            .assert_places(gap, Digit::D9);
    }

    #[test]
    fn test_none_with_two_gaps() {
        let tester = fill_unit_except(DetectorTester::new(), Unit::Row { r: 0 }, Cell::new(0, 0));
        // Reopen a second cell of the row.
        let tester = tester.clear(Cell::new(0, 5));
        tester
            .find(|board, _| find(board, UnitKind::Row))
            .assert_none();
    }

    #[test]
    fn test_none_on_empty_board() {
        DetectorTester::new()
            .find(|board, _| find(board, UnitKind::Box))
            .assert_none();
    }
}
