//! Pencil-mark candidate model.

use crate::{Board, Cell, CellSet, Digit, DigitSet, Unit};

/// Pencil marks for the whole board, stored per digit.
///
/// For each digit the structure keeps the set of cells where that digit can
/// still be placed. A cell is *decided* when exactly one digit lists it; the
/// per-cell candidate set is the column view of the nine per-digit masks.
///
/// Placing a digit only narrows the placed cell itself; peer eliminations
/// are performed by the solver's propagation or by applying hints, the same
/// way a human would rub out pencil marks.
///
/// # Examples
///
/// ```
/// use nanpure_core::{Candidates, Cell, Digit};
///
/// let mut candidates = Candidates::new();
/// assert_eq!(candidates.candidates_at(Cell::new(0, 0)).len(), 9);
///
/// candidates.place(Cell::new(0, 0), Digit::D5);
/// assert_eq!(
///     candidates.candidates_at(Cell::new(0, 0)).single(),
///     Some(Digit::D5)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    /// `digit_cells[d]` holds the cells where digit `d` can still go.
    digit_cells: [CellSet; 9],
}

/// Error returned when the candidate state violates a sudoku invariant.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A cell has no remaining candidate digit.
    #[display("a cell has no remaining candidates")]
    EmptyCell,
    /// The same decided digit appears twice in one unit.
    #[display("a unit contains a duplicated decided digit")]
    DuplicateDigit,
    /// A digit has nowhere left to go in one unit.
    #[display("a unit has no place left for some digit")]
    NoPlaceInUnit,
}

impl Candidates {
    /// Creates candidates with every digit possible in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Candidates {
            digit_cells: [CellSet::FULL; 9],
        }
    }

    /// Derives pencil marks from a board.
    ///
    /// Every empty cell starts with all nine digits; each placed digit is
    /// then fixed in its own cell and removed from the candidates of all
    /// 20 peers.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut candidates = Self::new();
        for cell in Cell::ALL {
            if let Some(digit) = board.get(cell) {
                candidates.place(cell, digit);
                candidates.remove_mask(cell.peers(), digit);
            }
        }
        candidates
    }

    /// Fixes `digit` in `cell` by dropping every other candidate there.
    ///
    /// Peers are untouched. Returns `true` if anything changed.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> bool {
        let mut changed = false;
        for (d, cells) in Digit::ALL.into_iter().zip(&mut self.digit_cells) {
            if d == digit {
                changed |= cells.insert(cell);
            } else {
                changed |= cells.remove(cell);
            }
        }
        changed
    }

    /// Removes `digit` as a candidate of `cell`, returning `true` if it was
    /// present.
    #[inline]
    pub fn remove(&mut self, cell: Cell, digit: Digit) -> bool {
        self.digit_cells[digit.index()].remove(cell)
    }

    /// Restores `digit` as a candidate of `cell`, returning `true` if it was
    /// absent.
    #[inline]
    pub fn add(&mut self, cell: Cell, digit: Digit) -> bool {
        self.digit_cells[digit.index()].insert(cell)
    }

    /// Removes `digit` as a candidate of every cell in `mask`.
    ///
    /// Returns `true` if any candidate was removed.
    pub fn remove_mask(&mut self, mask: CellSet, digit: Digit) -> bool {
        let before = self.digit_cells[digit.index()];
        self.digit_cells[digit.index()] &= !mask;
        before != self.digit_cells[digit.index()]
    }

    /// Returns whether removing `digit` from the cells in `mask` would
    /// change anything.
    #[must_use]
    pub fn would_remove_mask(&self, mask: CellSet, digit: Digit) -> bool {
        !(self.digit_cells[digit.index()] & mask).is_empty()
    }

    /// Returns the cells where `digit` can still be placed.
    #[must_use]
    #[inline]
    pub fn digit_cells(&self, digit: Digit) -> CellSet {
        self.digit_cells[digit.index()]
    }

    /// Returns the candidate digits of `cell`.
    #[must_use]
    pub fn candidates_at(&self, cell: Cell) -> DigitSet {
        let mut digits = DigitSet::new();
        for (digit, cells) in Digit::ALL.into_iter().zip(&self.digit_cells) {
            if cells.contains(cell) {
                digits.insert(digit);
            }
        }
        digits
    }

    /// Returns all cells with exactly one candidate.
    #[must_use]
    pub fn decided_cells(&self) -> CellSet {
        let [_, decided] = self.classify_cells();
        decided
    }

    /// Classifies cells by candidate count.
    ///
    /// Returns `[cells_0, cells_1, ..., cells_{N-1}]` where `cells_i` holds
    /// the cells with exactly `i` candidates; cells with `N` or more
    /// candidates appear in no element.
    ///
    /// Runs one pass over the nine digit masks, maintaining the counts as a
    /// bitwise counter array instead of visiting the 81 cells individually.
    #[must_use]
    pub fn classify_cells<const N: usize>(&self) -> [CellSet; N] {
        let mut cells = [CellSet::EMPTY; N];
        // Before any digit is processed, every cell has zero candidates.
        cells[0] = CellSet::FULL;

        for (n, digit_cells) in (1..).zip(self.digit_cells.iter().copied()) {
            let end = usize::min(n + 1, N);
            // Walk counts downward so a cell promoted from i-1 to i is not
            // promoted again within the same digit.
            for i in (1..end).rev() {
                cells[i] &= !digit_cells;
                cells[i] |= cells[i - 1] & digit_cells;
            }
            cells[0] &= !digit_cells;
        }
        cells
    }

    /// Checks the candidate state against the sudoku invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if a cell has no candidates, a unit
    /// holds a duplicated decided digit, or a unit has no place left for
    /// some digit.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let [empty, decided] = self.classify_cells();
        if !empty.is_empty() {
            return Err(ConsistencyError::EmptyCell);
        }
        for digit in Digit::ALL {
            let digit_cells = self.digit_cells(digit);
            let decided_digit_cells = digit_cells & decided;
            for unit in Unit::ALL {
                let in_unit = digit_cells & unit.cells();
                if in_unit.is_empty() {
                    return Err(ConsistencyError::NoPlaceInUnit);
                }
                if (decided_digit_cells & unit.cells()).len() > 1 {
                    return Err(ConsistencyError::DuplicateDigit);
                }
            }
        }
        Ok(())
    }

    /// Returns whether the state is a complete, consistent solution.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError`] if the state is inconsistent.
    pub fn is_solved(&self) -> Result<bool, ConsistencyError> {
        self.check_consistency()?;
        Ok(self.decided_cells().len() == 81)
    }

    /// Extracts the decided cells into a board.
    ///
    /// Undecided cells are left empty.
    #[must_use]
    pub fn to_board(&self) -> Board {
        let mut board = Board::new();
        let decided = self.decided_cells();
        for digit in Digit::ALL {
            for cell in self.digit_cells(digit) & decided {
                board.set(cell, Some(digit));
            }
        }
        board
    }
}

impl Default for Candidates {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Board> for Candidates {
    fn from(board: &Board) -> Self {
        Self::from_board(board)
    }
}
