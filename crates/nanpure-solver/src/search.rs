//! Constraint-propagating backtracking search.
//!
//! The search keeps the candidate state consistent through two entangled
//! operations: [`assign`] fixes a digit in a cell by eliminating every other
//! candidate there, and [`eliminate`] removes one candidate and follows the
//! consequences (naked-single propagation to peers, hidden-single
//! assignment per unit). A contradiction makes both return `false`; that is
//! ordinary branch failure, not an error.
//!
//! On top of propagation, [`Search`] runs a depth-first search over cloned
//! candidate states. The candidate state is 144 bytes of bitmasks, so a
//! clone per assumption is cheap.

use nanpure_core::{Board, Candidates, Cell, CellSet, Digit, DigitSet};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::SolveError;

/// Strategy for choosing the next cell to branch on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellChoice {
    /// The unfilled cell with the fewest candidates (MRV). Ties break on
    /// the smaller cell index, so runs are reproducible.
    #[default]
    MinCandidates,
    /// The unfilled cell with the most candidates.
    MaxCandidates,
    /// A uniformly random unfilled cell.
    Random,
}

/// Strategy for ordering the digits tried in the chosen cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DigitOrder {
    /// Ascending digit order.
    #[default]
    Low,
    /// Descending digit order.
    High,
    /// A random permutation of the remaining digits.
    Random,
}

/// Search policy options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// How to choose the cell to branch on.
    pub cell_choice: CellChoice,
    /// How to order the digits tried in that cell.
    pub digit_order: DigitOrder,
}

/// Fixes `digit` in `cell` by eliminating every other candidate there.
///
/// Returns `false` on contradiction, leaving the candidate state partially
/// propagated; callers are expected to discard it.
pub fn assign(candidates: &mut Candidates, cell: Cell, digit: Digit) -> bool {
    if !candidates.digit_cells(digit).contains(cell) {
        return false;
    }
    for other in candidates.candidates_at(cell).difference(DigitSet::from_digit(digit)) {
        if !eliminate(candidates, cell, other) {
            return false;
        }
    }
    true
}

/// Removes `digit` as a candidate of `cell` and propagates the consequences.
///
/// If the cell shrinks to a single candidate, that digit is eliminated from
/// all peers; if a unit is left with a single place for `digit`, the digit
/// is assigned there. Returns `false` on contradiction.
pub fn eliminate(candidates: &mut Candidates, cell: Cell, digit: Digit) -> bool {
    if !candidates.remove(cell, digit) {
        return true;
    }

    let rest = candidates.candidates_at(cell);
    if rest.is_empty() {
        return false;
    }
    if let Some(last) = rest.single() {
        for peer in cell.peers() & candidates.digit_cells(last) {
            if !eliminate(candidates, peer, last) {
                return false;
            }
        }
    }

    for unit in cell.units() {
        let places = candidates.digit_cells(digit) & unit.cells();
        let Some(place) = places.first() else {
            return false;
        };
        if places.len() == 1 && !assign(candidates, place, digit) {
            return false;
        }
    }
    true
}

/// Builds a propagated candidate state from a board's clues.
///
/// Returns `None` when the clues contradict each other (including duplicate
/// clues within a unit).
#[must_use]
pub fn propagate_board(board: &Board) -> Option<Candidates> {
    let mut candidates = Candidates::new();
    for cell in Cell::ALL {
        if let Some(digit) = board.get(cell)
            && !assign(&mut candidates, cell, digit)
        {
            return None;
        }
    }
    Some(candidates)
}

/// A backtracking solver over propagated candidate states.
///
/// # Examples
///
/// ```
/// use nanpure_core::Board;
/// use nanpure_solver::Search;
///
/// let puzzle = Board::from_line(
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
/// );
/// let solution = Search::new().solve(&puzzle).expect("solvable");
/// assert!(solution.is_complete());
/// assert!(Search::is_unique(&puzzle).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Search {
    options: SearchOptions,
    rng: Pcg64,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// Creates a solver with default options and a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    /// Creates a solver with the given options and a random seed.
    #[must_use]
    pub fn with_options(options: SearchOptions) -> Self {
        Self::with_seed(options, rand::random())
    }

    /// Creates a solver with the given options and an explicit seed.
    ///
    /// Only the `Random` policies consume randomness; with deterministic
    /// policies the seed has no effect.
    #[must_use]
    pub fn with_seed(options: SearchOptions, seed: [u8; 32]) -> Self {
        Self {
            options,
            rng: Pcg64::from_seed(seed),
        }
    }

    /// Solves the board, returning the first solution found.
    ///
    /// `None` means the clues are contradictory or no assignment exists.
    pub fn solve(&mut self, board: &Board) -> Option<Board> {
        let candidates = propagate_board(board)?;
        self.search(candidates).map(|done| done.to_board())
    }

    /// Reports whether the board has exactly one solution.
    ///
    /// Runs the search twice with opposite digit orders; a second solution,
    /// if any exists, shows up quickly as a divergence between the runs.
    /// A well-formed board with no solution at all is decidedly not
    /// unique, so it reports `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Inconsistent`] when the clues already
    /// conflict; uniqueness is undecidable for such malformed input.
    pub fn is_unique(board: &Board) -> Result<bool, SolveError> {
        if !board.conflicts().is_empty() {
            return Err(nanpure_core::ConsistencyError::DuplicateDigit.into());
        }
        let solve_with = |digit_order| {
            let options = SearchOptions {
                cell_choice: CellChoice::MinCandidates,
                digit_order,
            };
            Search::with_seed(options, [0; 32]).solve(board)
        };
        match (solve_with(DigitOrder::Low), solve_with(DigitOrder::High)) {
            (Some(low), Some(high)) => Ok(low == high),
            _ => Ok(false),
        }
    }

    /// Produces a uniformly shuffled complete grid.
    ///
    /// Equivalent to solving the empty board with a random digit order.
    pub fn sample_full_grid(&mut self) -> Board {
        let mut search = Self {
            options: SearchOptions {
                cell_choice: CellChoice::MinCandidates,
                digit_order: DigitOrder::Random,
            },
            rng: Pcg64::from_seed(self.rng.random()),
        };
        let Some(board) = search.solve(&Board::new()) else {
            unreachable!("the empty board always has a solution");
        };
        board
    }

    fn search(&mut self, candidates: Candidates) -> Option<Candidates> {
        let Some(cell) = self.pick_cell(&candidates) else {
            return Some(candidates);
        };

        let mut digits: tinyvec::ArrayVec<[u8; 9]> = candidates
            .candidates_at(cell)
            .map(Digit::value)
            .collect();
        match self.options.digit_order {
            DigitOrder::Low => {}
            DigitOrder::High => digits.reverse(),
            DigitOrder::Random => digits.shuffle(&mut self.rng),
        }

        for value in digits {
            let digit = Digit::from_value(value);
            let mut next = candidates;
            if assign(&mut next, cell, digit)
                && let Some(done) = self.search(next)
            {
                return Some(done);
            }
        }
        None
    }

    /// Picks the cell to branch on, or `None` when every cell is decided.
    fn pick_cell(&mut self, candidates: &Candidates) -> Option<Cell> {
        let cells = candidates.classify_cells::<10>();
        let [starved, decided, branchable @ ..] = &cells;
        debug_assert!(starved.is_empty(), "propagation must fail starved states");
        if decided.len() == 81 {
            return None;
        }
        match self.options.cell_choice {
            CellChoice::MinCandidates => branchable.iter().find_map(|cells| cells.first()),
            CellChoice::MaxCandidates => branchable.iter().rev().find_map(|cells| cells.first()),
            CellChoice::Random => {
                let mut undecided = !*decided;
                let nth = self.rng.random_range(0..undecided.len());
                undecided.nth(nth)
            }
        }
    }
}

/// Solves a board with the default search policy.
///
/// Convenience wrapper over [`Search::solve`].
#[must_use]
pub fn solve(board: &Board) -> Option<Board> {
    Search::new().solve(board)
}
