//! Sudoku solving: backtracking search, human-style hints, and difficulty
//! scoring.
//!
//! # Overview
//!
//! This crate provides three coupled layers:
//!
//! - [`Search`]: a constraint-propagating backtracking solver. It answers
//!   the ground-truth questions: does a solution exist ([`Search::solve`]),
//!   is it unique ([`Search::is_unique`]), and what does a random complete
//!   grid look like ([`Search::sample_full_grid`]).
//! - The hint engine: a difficulty-ordered battery of technique detectors.
//!   [`get_hint`] returns the easiest applicable deduction as a [`Hint`];
//!   [`apply_hint`] performs it the way a human would;
//!   [`solve_with_hints`] drives the two to termination and records the
//!   trace.
//! - The scorer: [`evaluate_puzzle_difficulty`] turns a trace into a
//!   1-100 difficulty and a [`Grade`] band, which the generator crate uses
//!   to accept or reject candidate puzzles.
//!
//! # Architecture
//!
//! Backtracking and hint solving are deliberately separate. The search
//! layer treats contradictions as branch failure and is free to guess; the
//! hint layer never guesses and only applies named techniques, so its
//! trace reflects what a human solver would need. The two meet in the
//! mistake detectors, which need the search layer's unique solution as
//! ground truth, and in the scorer's unsolvable-by-logic rating for
//! puzzles the battery cannot finish.
//!
//! Within one [`get_hint`] call, detectors run in ascending difficulty
//! order and each detector scans units and cells in a fixed order, so hint
//! sequences and difficulty ratings are reproducible.
//!
//! # Examples
//!
//! ```
//! use nanpure_core::Board;
//! use nanpure_solver::{self as solver, DEFAULT_MAX_STEPS};
//!
//! let puzzle = Board::from_line(
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
//! );
//!
//! let rating = solver::evaluate_puzzle_difficulty(&puzzle, DEFAULT_MAX_STEPS);
//! if rating.solvable {
//!     println!("difficulty {} ({})", rating.difficulty, rating.grade);
//! } else {
//!     println!("not solvable by the implemented techniques");
//! }
//! ```

pub use self::{
    error::SolveError,
    hint::{ColoringRule, Elimination, Hint, apply as apply_hint},
    hint_solver::{DEFAULT_MAX_STEPS, HintSolve, HintStep, solve_with_hints},
    score::{
        Grade, PuzzleRating, UNSOLVABLE_BY_LOGIC, difficulty_to_category,
        evaluate_puzzle_difficulty, score_trace,
    },
    search::{
        CellChoice, DigitOrder, Search, SearchOptions, assign, eliminate, propagate_board, solve,
    },
    technique::{Technique, get_hint, technique_difficulty},
};

mod error;
mod hint;
mod hint_solver;
mod score;
mod search;
pub mod technique;

#[cfg(test)]
mod testing;
