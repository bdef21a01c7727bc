//! Engine error type.
//!
//! Every variant is a contract violation by the caller: the engine never
//! retries, defaults, or partially applies an operation that fails.

use thiserror::Error;

use super::{BoardPosition, UnitId};
use crate::abilities::{AbilityIdentifier, AbilityTarget, TargetType};

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The target shape does not match what the ability accepts.
    #[error("ability {ability} expects a {expected} target, got {target}")]
    InvalidTarget {
        ability: AbilityIdentifier,
        expected: TargetType,
        target: AbilityTarget,
    },

    /// The target lies farther from the caster than the ability reaches.
    #[error("ability {ability} reaches {max_range} cells, target is {distance} away")]
    OutOfRange {
        ability: AbilityIdentifier,
        distance: u8,
        max_range: u8,
    },

    /// `AbilityIdentifier::None` was used where a slot is required.
    #[error("cannot look up an ability slot with identifier None")]
    InvalidAbilityIdentifier,

    /// Neutral has no opposing team.
    #[error("team Neutral has no opposing team")]
    UndefinedOpposingTeam,

    /// Another unit already stands on the cell.
    #[error("position {position} is already occupied by {occupant}")]
    PositionOccupied {
        position: BoardPosition,
        occupant: UnitId,
    },

    /// The cell lies outside the board.
    #[error("position {position} is outside a {board_size}x{board_size} board")]
    PositionOutOfBounds {
        position: BoardPosition,
        board_size: u8,
    },

    /// The unit is already on the board.
    #[error("{0} is already placed on the board")]
    UnitAlreadyPlaced(UnitId),

    /// No unit with this ID is on the board.
    #[error("{0} is not on the board")]
    UnitNotFound(UnitId),

    /// Only champions can cast abilities.
    #[error("{0} is not a champion")]
    NotAChampion(UnitId),

    /// A unit type tag that is neither Champion nor Minion.
    #[error("unknown unit type `{0}`")]
    UnknownUnitType(String),

    /// No champion registered under this name.
    #[error("no champion named `{0}` is registered")]
    UnknownChampion(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_target_message_names_shapes() {
        let err = EngineError::InvalidTarget {
            ability: AbilityIdentifier::E,
            expected: TargetType::Location,
            target: AbilityTarget::Unit(UnitId(7)),
        };
        assert_eq!(
            err.to_string(),
            "ability E expects a Location target, got Unit(7)"
        );
    }

    #[test]
    fn test_range_message() {
        let err = EngineError::OutOfRange {
            ability: AbilityIdentifier::Q,
            distance: 6,
            max_range: 4,
        };
        assert_eq!(err.to_string(), "ability Q reaches 4 cells, target is 6 away");
    }

    #[test]
    fn test_position_messages() {
        let occupied = EngineError::PositionOccupied {
            position: BoardPosition::new(2, 3),
            occupant: UnitId(9),
        };
        assert_eq!(occupied.to_string(), "position (2, 3) is already occupied by Unit(9)");

        let outside = EngineError::PositionOutOfBounds {
            position: BoardPosition::new(8, 0),
            board_size: 8,
        };
        assert_eq!(outside.to_string(), "position (8, 0) is outside a 8x8 board");
    }
}
