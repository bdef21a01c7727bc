//! Units: anything that can stand on the board.
//!
//! A `Unit` carries the shared state (identity, name, team, position) and a
//! `UnitKind` saying whether it is a champion with ability slots or a
//! plain minion. The champion flag and the type tag are both derived from
//! the kind, so they cannot disagree.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::champion::{Champion, ChampionBuilder};
use crate::abilities::{AbilityIdentifier, AbilityTarget, CastReport};
use crate::board::Board;
use crate::core::{BoardPosition, EngineError, Result, TeamColor, UnitId};

/// Unit type tag, as seen by renderers and effect masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Champion,
    Minion,
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitType::Champion => f.write_str("Champion"),
            UnitType::Minion => f.write_str("Minion"),
        }
    }
}

impl FromStr for UnitType {
    type Err = EngineError;

    /// Parse a type tag from external data.
    ///
    /// ```
    /// use rune_chess::units::UnitType;
    ///
    /// assert_eq!("minion".parse::<UnitType>(), Ok(UnitType::Minion));
    /// assert!("tower".parse::<UnitType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("champion") {
            Ok(UnitType::Champion)
        } else if s.eq_ignore_ascii_case("minion") {
            Ok(UnitType::Minion)
        } else {
            Err(EngineError::UnknownUnitType(s.to_string()))
        }
    }
}

impl TryFrom<u8> for UnitType {
    type Error = EngineError;

    /// Decode a numeric tag: 0 = Champion, 1 = Minion.
    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(UnitType::Champion),
            1 => Ok(UnitType::Minion),
            other => Err(EngineError::UnknownUnitType(other.to_string())),
        }
    }
}

/// What kind of unit this is.
#[derive(Clone, Debug)]
pub enum UnitKind {
    Champion(Champion),
    Minion,
}

/// A unit on (or waiting to be placed on) the board.
///
/// Units are built detached: Neutral, with no position. Placement assigns
/// both; see [`Game::place_unit`](crate::game::Game::place_unit).
#[derive(Clone, Debug)]
pub struct Unit {
    id: UnitId,
    name: String,
    team_color: TeamColor,
    position: Option<BoardPosition>,
    kind: UnitKind,
}

impl Unit {
    pub(crate) fn new(id: UnitId, name: impl Into<String>, kind: UnitKind) -> Self {
        Self {
            id,
            name: name.into(),
            team_color: TeamColor::Neutral,
            position: None,
            kind,
        }
    }

    /// Create a minion.
    #[must_use]
    pub fn minion() -> Self {
        Self::named_minion("Minion")
    }

    /// Create a minion with a display name.
    #[must_use]
    pub fn named_minion(name: impl Into<String>) -> Self {
        Self::new(UnitId::fresh(), name, UnitKind::Minion)
    }

    /// Start building a champion.
    ///
    /// ```
    /// use rune_chess::units::{Unit, UnitType};
    ///
    /// let champion = Unit::champion("Diana").build().unwrap();
    /// assert_eq!(champion.unit_type(), UnitType::Champion);
    /// assert!(champion.is_champion());
    /// ```
    #[must_use]
    pub fn champion(name: impl Into<String>) -> ChampionBuilder {
        ChampionBuilder::new(name)
    }

    #[must_use]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn team_color(&self) -> TeamColor {
        self.team_color
    }

    /// Current cell. `None` until placed.
    #[must_use]
    pub fn position(&self) -> Option<BoardPosition> {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    #[must_use]
    pub fn unit_type(&self) -> UnitType {
        match self.kind {
            UnitKind::Champion(_) => UnitType::Champion,
            UnitKind::Minion => UnitType::Minion,
        }
    }

    #[must_use]
    pub fn is_champion(&self) -> bool {
        matches!(self.kind, UnitKind::Champion(_))
    }

    /// The champion's ability slots, if this is a champion.
    #[must_use]
    pub fn as_champion(&self) -> Option<&Champion> {
        match &self.kind {
            UnitKind::Champion(champion) => Some(champion),
            UnitKind::Minion => None,
        }
    }

    pub(crate) fn set_team_color(&mut self, color: TeamColor) {
        self.team_color = color;
    }

    pub(crate) fn set_position(&mut self, position: Option<BoardPosition>) {
        self.position = position;
    }

    /// Cast one of this champion's abilities.
    ///
    /// This is the only path to an ability's effect. The caster is looked
    /// up on `board` by ID and the cast runs on that copy, so a detached or
    /// outdated clone casts with the team and position the board holds.
    ///
    /// Fails with `UnitNotFound` when this unit is not on the board,
    /// `NotAChampion` for minions, `InvalidAbilityIdentifier` for
    /// `AbilityIdentifier::None`, and `InvalidTarget` when the target shape
    /// does not match. Targets must also resolve on the board and lie within
    /// the ability's range. In every failure case the effect does not run.
    pub fn cast_ability(
        &self,
        which: AbilityIdentifier,
        target: AbilityTarget,
        board: &Board,
    ) -> Result<CastReport> {
        let caster = board.unit(self.id).ok_or(EngineError::UnitNotFound(self.id))?;
        match &caster.kind {
            UnitKind::Champion(champion) => champion.cast_ability(caster, which, target, board),
            UnitKind::Minion => {
                warn!(unit = %caster.id, ability = %which, "minion cannot cast abilities");
                Err(EngineError::NotAChampion(caster.id))
            }
        }
    }
}
