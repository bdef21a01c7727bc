//! Ability targets and the shapes abilities accept.
//!
//! - `AbilityTarget`: what a cast is aimed at
//! - `TargetType`: what an ability requires it to be aimed at

use serde::{Deserialize, Serialize};

use crate::core::{BoardPosition, UnitId};

/// What a cast is aimed at. Exactly one shape is populated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityTarget {
    /// Not aimed at anything (passives, self-centered effects).
    #[default]
    None,
    /// A specific unit.
    Unit(UnitId),
    /// A specific cell.
    Location(BoardPosition),
}

impl AbilityTarget {
    /// Check if no target is populated.
    #[must_use]
    pub const fn has_no_target(&self) -> bool {
        matches!(self, AbilityTarget::None)
    }

    /// The targeted unit, if any.
    #[must_use]
    pub const fn unit(&self) -> Option<UnitId> {
        match self {
            AbilityTarget::Unit(id) => Some(*id),
            _ => None,
        }
    }

    /// The targeted cell, if any.
    #[must_use]
    pub const fn location(&self) -> Option<BoardPosition> {
        match self {
            AbilityTarget::Location(pos) => Some(*pos),
            _ => None,
        }
    }
}

impl From<UnitId> for AbilityTarget {
    fn from(id: UnitId) -> Self {
        AbilityTarget::Unit(id)
    }
}

impl From<BoardPosition> for AbilityTarget {
    fn from(pos: BoardPosition) -> Self {
        AbilityTarget::Location(pos)
    }
}

impl std::fmt::Display for AbilityTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbilityTarget::None => f.write_str("None"),
            AbilityTarget::Unit(id) => write!(f, "{id}"),
            AbilityTarget::Location(pos) => write!(f, "Location{pos}"),
        }
    }
}

/// The target shape an ability requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// Passive or untargeted: the target must be empty.
    None,
    /// Self-cast: the target must be the caster itself.
    Self_,
    /// Any unit.
    Unit,
    /// Any cell.
    Location,
}

impl TargetType {
    /// Check whether `target` has the shape this type requires.
    ///
    /// `Self_` compares unit identity with `caster`; a different unit,
    /// even one on the caster's cell, is rejected.
    ///
    /// ```
    /// use rune_chess::abilities::{AbilityTarget, TargetType};
    /// use rune_chess::core::{BoardPosition, UnitId};
    ///
    /// let caster = UnitId(1);
    /// assert!(TargetType::Self_.accepts(&AbilityTarget::Unit(caster), caster));
    /// assert!(!TargetType::Self_.accepts(&AbilityTarget::Unit(UnitId(2)), caster));
    /// assert!(!TargetType::Location.accepts(&AbilityTarget::Unit(caster), caster));
    /// assert!(TargetType::Location.accepts(&BoardPosition::new(0, 0).into(), caster));
    /// ```
    #[must_use]
    pub fn accepts(self, target: &AbilityTarget, caster: UnitId) -> bool {
        match self {
            TargetType::None => target.has_no_target(),
            TargetType::Self_ => target.unit() == Some(caster),
            TargetType::Unit => target.unit().is_some(),
            TargetType::Location => target.location().is_some(),
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TargetType::None => "None",
            TargetType::Self_ => "Self",
            TargetType::Unit => "Unit",
            TargetType::Location => "Location",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_shapes(caster: UnitId) -> [AbilityTarget; 4] {
        [
            AbilityTarget::None,
            AbilityTarget::Unit(caster),
            AbilityTarget::Unit(UnitId(caster.0 + 1)),
            AbilityTarget::Location(BoardPosition::new(1, 1)),
        ]
    }

    #[test]
    fn test_target_accessors() {
        let unit = AbilityTarget::Unit(UnitId(3));
        assert!(!unit.has_no_target());
        assert_eq!(unit.unit(), Some(UnitId(3)));
        assert_eq!(unit.location(), None);

        let loc = AbilityTarget::Location(BoardPosition::new(2, 5));
        assert_eq!(loc.unit(), None);
        assert_eq!(loc.location(), Some(BoardPosition::new(2, 5)));

        assert!(AbilityTarget::None.has_no_target());
        assert_eq!(AbilityTarget::default(), AbilityTarget::None);
    }

    #[test]
    fn test_none_requires_empty_target() {
        let caster = UnitId(10);
        let accepted: Vec<_> = all_shapes(caster)
            .into_iter()
            .filter(|t| TargetType::None.accepts(t, caster))
            .collect();
        assert_eq!(accepted, vec![AbilityTarget::None]);
    }

    #[test]
    fn test_self_requires_caster() {
        let caster = UnitId(10);
        let accepted: Vec<_> = all_shapes(caster)
            .into_iter()
            .filter(|t| TargetType::Self_.accepts(t, caster))
            .collect();
        assert_eq!(accepted, vec![AbilityTarget::Unit(caster)]);
    }

    #[test]
    fn test_unit_accepts_any_unit() {
        let caster = UnitId(10);
        assert!(TargetType::Unit.accepts(&AbilityTarget::Unit(caster), caster));
        assert!(TargetType::Unit.accepts(&AbilityTarget::Unit(UnitId(99)), caster));
        assert!(!TargetType::Unit.accepts(&AbilityTarget::None, caster));
        assert!(!TargetType::Unit.accepts(&BoardPosition::new(0, 0).into(), caster));
    }

    #[test]
    fn test_location_requires_cell() {
        let caster = UnitId(10);
        assert!(TargetType::Location.accepts(&BoardPosition::new(0, 0).into(), caster));
        assert!(!TargetType::Location.accepts(&AbilityTarget::Unit(caster), caster));
        assert!(!TargetType::Location.accepts(&AbilityTarget::None, caster));
    }

    #[test]
    fn test_display() {
        assert_eq!(AbilityTarget::None.to_string(), "None");
        assert_eq!(AbilityTarget::Unit(UnitId(4)).to_string(), "Unit(4)");
        assert_eq!(
            AbilityTarget::Location(BoardPosition::new(1, 2)).to_string(),
            "Location(1, 2)"
        );
        assert_eq!(TargetType::Self_.to_string(), "Self");
    }

    #[test]
    fn test_serialization() {
        let target = AbilityTarget::Location(BoardPosition::new(3, 6));
        let json = serde_json::to_string(&target).unwrap();
        let deserialized: AbilityTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(target, deserialized);
    }
}
