use nanpure_core::ConsistencyError;

/// Errors surfaced by the solver.
///
/// Contradictions found while searching are ordinary branch failure and are
/// never reported through this type; only malformed input the caller must
/// act on becomes an error.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SolveError {
    /// The input violates a sudoku invariant, such as duplicate clues
    /// within one unit.
    #[display("inconsistent state: {_0}")]
    Inconsistent(ConsistencyError),
}
