//! Effect masks: which kinds of unit an ability's effect may reach.

use serde::{Deserialize, Serialize};

use crate::core::Relation;
use crate::units::UnitType;

/// Declarative filter over (ally/enemy × champion/minion).
///
/// Masks are `Copy` values: the builder methods return a new mask, so one
/// mask can be handed to many abilities without aliasing.
///
/// ```
/// use rune_chess::abilities::AbilityEffectMask;
/// use rune_chess::core::Relation;
/// use rune_chess::units::UnitType;
///
/// let mask = AbilityEffectMask::new()
///     .allow_enemy_minions()
///     .allow_enemy_champions();
///
/// assert!(mask.admits(Relation::Enemy, UnitType::Minion));
/// assert!(!mask.admits(Relation::Ally, UnitType::Champion));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityEffectMask {
    pub ally_minions: bool,
    pub enemy_minions: bool,
    pub ally_champions: bool,
    pub enemy_champions: bool,
    /// Recorded for ability metadata only. Targeting the caster is decided
    /// by `TargetType::Self_`; `admits` never reads this flag.
    pub self_target: bool,
}

impl AbilityEffectMask {
    /// A mask that affects nothing.
    pub const NONE: Self = Self {
        ally_minions: false,
        enemy_minions: false,
        ally_champions: false,
        enemy_champions: false,
        self_target: false,
    };

    /// Start from a mask that affects nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self::NONE
    }

    #[must_use]
    pub const fn allow_ally_minions(mut self) -> Self {
        self.ally_minions = true;
        self
    }

    #[must_use]
    pub const fn allow_enemy_minions(mut self) -> Self {
        self.enemy_minions = true;
        self
    }

    #[must_use]
    pub const fn allow_ally_champions(mut self) -> Self {
        self.ally_champions = true;
        self
    }

    #[must_use]
    pub const fn allow_enemy_champions(mut self) -> Self {
        self.enemy_champions = true;
        self
    }

    #[must_use]
    pub const fn allow_self(mut self) -> Self {
        self.self_target = true;
        self
    }

    /// Allow every ally/enemy champion/minion combination.
    ///
    /// Leaves `self_target` untouched.
    #[must_use]
    pub const fn allow_all(self) -> Self {
        self.allow_ally_minions()
            .allow_enemy_minions()
            .allow_ally_champions()
            .allow_enemy_champions()
    }

    /// Check whether a unit with this classification may be affected.
    #[must_use]
    pub const fn admits(&self, relation: Relation, unit_type: UnitType) -> bool {
        match (relation, unit_type) {
            (Relation::Ally, UnitType::Champion) => self.ally_champions,
            (Relation::Enemy, UnitType::Champion) => self.enemy_champions,
            (Relation::Ally, UnitType::Minion) => self.ally_minions,
            (Relation::Enemy, UnitType::Minion) => self.enemy_minions,
        }
    }

    /// Check if no combination is allowed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.ally_minions || self.enemy_minions || self.ally_champions || self.enemy_champions)
    }
}
