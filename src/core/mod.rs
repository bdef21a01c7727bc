//! Core engine types: unit IDs, teams, positions, configuration, RNG, errors.
//!
//! These are plain values with no knowledge of abilities or the board.

pub mod entity;
pub mod team;
pub mod position;
pub mod config;
pub mod rng;
pub mod error;

pub use entity::UnitId;
pub use team::{Relation, Team, TeamColor};
pub use position::BoardPosition;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
pub use rng::GameRng;
pub use error::{EngineError, Result};
