//! Team colors and the relationships between them.
//!
//! ## Neutral
//!
//! Red and Blue oppose each other. Neutral opposes nobody in particular:
//! [`TeamColor::opposing`] fails with
//! [`EngineError::UndefinedOpposingTeam`] rather than guessing.
//!
//! For targeting, [`TeamColor::relation_to`] is total: a unit is an ally
//! when it shares the caster's color and an enemy otherwise. Neutral units
//! are therefore enemies to Red and Blue casters, and allies only to other
//! Neutral units.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// The three team colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Red,
    Blue,
    /// Unaffiliated units. Units are Neutral until placed on a team.
    #[default]
    Neutral,
}

/// How one team color sees another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Ally,
    Enemy,
}

impl TeamColor {
    /// All colors, in declaration order.
    pub const ALL: [TeamColor; 3] = [TeamColor::Red, TeamColor::Blue, TeamColor::Neutral];

    /// Colors that can take turns.
    pub const PLAYABLE: [TeamColor; 2] = [TeamColor::Red, TeamColor::Blue];

    /// The opposing color.
    ///
    /// ```
    /// use rune_chess::core::TeamColor;
    ///
    /// assert_eq!(TeamColor::Red.opposing(), Ok(TeamColor::Blue));
    /// assert!(TeamColor::Neutral.opposing().is_err());
    /// ```
    pub fn opposing(self) -> Result<TeamColor> {
        match self {
            TeamColor::Red => Ok(TeamColor::Blue),
            TeamColor::Blue => Ok(TeamColor::Red),
            TeamColor::Neutral => Err(EngineError::UndefinedOpposingTeam),
        }
    }

    /// How a unit of `self` color regards a unit of `other` color.
    #[must_use]
    pub fn relation_to(self, other: TeamColor) -> Relation {
        if self == other {
            Relation::Ally
        } else {
            Relation::Enemy
        }
    }

    /// Check if this color can take turns.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, TeamColor::Neutral)
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TeamColor::Red => "Red",
            TeamColor::Blue => "Blue",
            TeamColor::Neutral => "Neutral",
        };
        f.write_str(name)
    }
}

/// A team, identified solely by its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    color: TeamColor,
}

impl Team {
    /// Create the team for a color.
    #[must_use]
    pub const fn new(color: TeamColor) -> Self {
        Self { color }
    }

    /// This team's color.
    #[must_use]
    pub const fn color(&self) -> TeamColor {
        self.color
    }

    /// The color of the opposing team.
    pub fn opposing_color(&self) -> Result<TeamColor> {
        self.color.opposing()
    }
}
