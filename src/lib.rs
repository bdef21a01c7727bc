//! # rune-chess
//!
//! The unit, ability and targeting core of a chess-like champion battler.
//!
//! ## Design Principles
//!
//! 1. **Fail Fast**: Every illegal call (bad target, reserved identifier,
//!    occupied cell, Neutral opponent lookup) returns an `EngineError`.
//!    Nothing is coerced or silently skipped.
//!
//! 2. **Identity, Not Location**: Units are compared by `UnitId`. A
//!    self-targeted ability accepts its caster and nobody else.
//!
//! 3. **Configuration Over Globals**: Board size and RNG seed come from
//!    `GameConfig`, so tests can build isolated boards of any size.
//!
//! ## Architecture
//!
//! - **Board as Source of Truth**: Placement writes the board index and the
//!   unit's own position in one step.
//!
//! - **Persistent Data Structures**: O(1) board snapshots via `im-rs` for
//!   read-only consumers.
//!
//! - **Single Cast Path**: An ability's effect runs only through
//!   `Unit::cast_ability` / `Game::cast_ability`, after target validation.
//!
//! ## Modules
//!
//! - `core`: Unit IDs, teams, positions, configuration, RNG, errors
//! - `abilities`: Ability contract, targets, effect masks
//! - `units`: Units, champions, champion registry
//! - `board`: Spatial index of units
//! - `game`: Composition root

pub mod core;
pub mod abilities;
pub mod units;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    UnitId, TeamColor, Team, Relation, BoardPosition,
    GameConfig, GameRng, EngineError, Result,
};

pub use crate::abilities::{
    Ability, AbilityIdentifier, AbilityTarget, TargetType, AbilityEffectMask,
    BoundAbility, CastContext, CastReport, NoAbility, can_affect,
};

pub use crate::units::{Unit, UnitKind, UnitType, Champion, ChampionBuilder, ChampionRegistry};

pub use crate::board::Board;

pub use crate::game::Game;
