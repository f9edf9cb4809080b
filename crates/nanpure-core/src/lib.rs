//! Core board model for the nanpure sudoku engine.
//!
//! # Overview
//!
//! This crate provides the board topology and candidate model shared by the
//! solver and generator crates:
//!
//! - [`Digit`], [`Cell`]: the 9 symbols and the 81 squares
//! - [`DigitSet`], [`CellSet`]: bitset representations of digit and cell sets
//! - [`Unit`], [`Chute`]: the 27 rows/columns/boxes and the 6 box bands
//! - [`Board`]: cell placements, the text grid format, conflict reporting
//! - [`Candidates`]: per-digit pencil-mark masks with consistency checking
//! - [`codec`]: the compact serialization for solved boards
//!
//! # Design
//!
//! All set-valued state is bitset-backed: a [`DigitSet`] is a 9-bit mask and
//! a [`CellSet`] an 81-bit mask, so candidate bookkeeping and the
//! set-combinatorial searches of the solving techniques stay branch-light
//! and allocation-free.
//!
//! The unit tables ([`CellSet::ROWS`], [`CellSet::COLUMNS`],
//! [`CellSet::BOXES`] and the [`Unit`] constants) are computed at compile
//! time and are the sole source of adjacency; nothing else re-derives
//! neighborhood relations.
//!
//! Placements and pencil marks are deliberately separate structures:
//! [`Board`] records what is written in the grid, while [`Candidates`]
//! tracks what could still be written. Components own their working copy of
//! each; the `const` topology tables are freely shared.

pub use self::{
    board::{Board, Conflict},
    candidates::{Candidates, ConsistencyError},
    cell::{Cell, CellIndexError},
    cell_set::CellSet,
    digit::{Digit, DigitValueError},
    digit_set::DigitSet,
    unit::{Chute, Unit, UnitKind},
};

mod board;
mod candidates;
mod cell;
mod cell_set;
pub mod codec;
mod digit;
mod digit_set;
mod unit;
