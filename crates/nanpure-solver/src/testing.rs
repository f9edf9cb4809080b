//! Test utilities for detector implementations.
//!
//! [`DetectorTester`] sculpts a board/candidate state with a fluent
//! builder, runs a detector on it, and asserts on the returned hint:
//!
//! ```ignore
//! DetectorTester::new()
//!     .keep_only(Cell::new(4, 4), [Digit::D5])
//!     .find(naked_single::find)
//!     .assert_places(Cell::new(4, 4), Digit::D5)
//!     .assert_applies();
//! ```
//!
//! All assertion methods panic with a descriptive message and report the
//! caller's location.

use nanpure_core::{Board, Candidates, Cell, Digit};

use crate::{Hint, Technique, hint};

/// A builder for hand-sculpted solver states.
#[derive(Debug, Clone)]
pub(crate) struct DetectorTester {
    board: Board,
    candidates: Candidates,
}

impl DetectorTester {
    /// Creates an empty board with every pencil mark available.
    pub(crate) fn new() -> Self {
        Self {
            board: Board::new(),
            candidates: Candidates::new(),
        }
    }

    /// Places a digit and rubs it out of the peers' pencil marks.
    pub(crate) fn place(mut self, cell: Cell, digit: Digit) -> Self {
        self.board.set(cell, Some(digit));
        self.candidates.place(cell, digit);
        self.candidates.remove_mask(cell.peers(), digit);
        self
    }

    /// Reopens a placed cell, restoring all nine pencil marks there.
    pub(crate) fn clear(mut self, cell: Cell) -> Self {
        self.board.set(cell, None);
        for digit in Digit::ALL {
            self.candidates.add(cell, digit);
        }
        self
    }

    /// Removes one pencil mark.
    pub(crate) fn remove(mut self, cell: Cell, digit: Digit) -> Self {
        self.candidates.remove(cell, digit);
        self
    }

    /// Restricts a cell's pencil marks to exactly the given digits.
    pub(crate) fn keep_only<I>(mut self, cell: Cell, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let keep: nanpure_core::DigitSet = digits.into_iter().collect();
        for digit in !keep {
            self.candidates.remove(cell, digit);
        }
        self
    }

    /// Runs a detector on the sculpted state.
    pub(crate) fn find<F>(self, detector: F) -> FoundHint
    where
        F: FnOnce(&Board, &Candidates) -> Option<Hint>,
    {
        let found = detector(&self.board, &self.candidates);
        FoundHint {
            hint: found,
            board: self.board,
            candidates: self.candidates,
        }
    }
}

/// The outcome of running a detector, with assertion helpers.
#[derive(Debug, Clone)]
pub(crate) struct FoundHint {
    hint: Option<Hint>,
    board: Board,
    candidates: Candidates,
}

impl FoundHint {
    /// Returns the found hint, if any.
    pub(crate) fn hint(&self) -> Option<&Hint> {
        self.hint.as_ref()
    }

    /// Asserts that the detector found nothing.
    #[track_caller]
    pub(crate) fn assert_none(self) {
        assert!(
            self.hint.is_none(),
            "expected no hint, but found: {:?}",
            self.hint
        );
    }

    /// Asserts the hint's technique.
    #[track_caller]
    pub(crate) fn assert_technique(self, technique: Technique) -> Self {
        let Some(found) = &self.hint else {
            panic!("expected a {technique} hint, but found none");
        };
        assert_eq!(
            found.technique(),
            technique,
            "expected a {technique} hint, but found: {found:?}"
        );
        self
    }

    /// Asserts that the hint places `digit` in `cell`.
    #[track_caller]
    pub(crate) fn assert_places(self, cell: Cell, digit: Digit) -> Self {
        match &self.hint {
            Some(Hint::Single {
                cell: hint_cell,
                digit: hint_digit,
                ..
            }) => {
                assert_eq!(
                    (*hint_cell, *hint_digit),
                    (cell, digit),
                    "expected placement of {digit} at {cell}, but found: {:?}",
                    self.hint
                );
            }
            other => panic!("expected placement of {digit} at {cell}, but found: {other:?}"),
        }
        self
    }

    /// Asserts that the hint eliminates `digit` from `cell`, and that the
    /// mark is actually still there to remove.
    #[track_caller]
    pub(crate) fn assert_eliminates(self, cell: Cell, digit: Digit) -> Self {
        let Some(found) = &self.hint else {
            panic!("expected a hint eliminating {digit} from {cell}, but found none");
        };
        let Some(elimination) = found.elimination() else {
            panic!("expected an eliminating hint, but found: {found:?}");
        };
        assert!(
            elimination.cells.contains(cell) && elimination.digits.contains(digit),
            "expected elimination of {digit} from {cell}, but hint eliminates {:?} from {:?}",
            elimination.digits,
            elimination.cells
        );
        assert!(
            self.candidates.candidates_at(cell).contains(digit),
            "elimination of {digit} from {cell} would be a no-op"
        );
        self
    }

    /// Asserts that applying the hint reports progress.
    #[track_caller]
    pub(crate) fn assert_applies(mut self) -> Self {
        let Some(found) = self.hint.clone() else {
            panic!("expected a hint to apply, but found none");
        };
        assert!(
            hint::apply(&found, &mut self.board, &mut self.candidates),
            "expected applying {found:?} to make progress"
        );
        self
    }
}
