//! Board: the spatial index of unit positions.
//!
//! The board is the only shared mutable state in a game. It is owned by
//! the `Game` and changed only through placement and removal.

#[allow(clippy::module_inception)]
mod board;

pub use board::Board;
