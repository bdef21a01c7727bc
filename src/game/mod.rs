//! Game composition root.
//!
//! `Game` ties the board, the three teams and the turn marker together.
//! Bootstrap code populates a game only through `Game::place_unit`.

#[allow(clippy::module_inception)]
mod game;
mod layout;

pub use game::Game;
