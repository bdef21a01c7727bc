//! The ability contract and the machinery around a cast.
//!
//! - `Ability`: what a concrete champion ability implements
//! - `BoundAbility`: an ability installed in a champion slot, bound to its caster
//! - `CastContext`: what an ability sees while its effect runs
//! - `CastReport`: which units the effect reached
//!
//! ## Casting
//!
//! Casts always go through [`Unit::cast_ability`] (or
//! [`Game::cast_ability`](crate::game::Game::cast_ability)), which checks the
//! target against the ability's [`TargetType`] before the effect runs.
//! `CastContext` cannot be built outside this crate, so `on_cast` has no
//! other way in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{AbilityEffectMask, AbilityTarget, TargetType};
use crate::board::Board;
use crate::core::{Result, TeamColor, UnitId};
use crate::units::Unit;

/// The four champion slots, plus `None` for the empty placeholder ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityIdentifier {
    Q,
    W,
    E,
    /// The ultimate.
    R,
    /// Reserved for [`NoAbility`]. Never a valid slot lookup.
    None,
}

impl AbilityIdentifier {
    /// The slot identifiers, in slot order.
    pub const SLOTS: [AbilityIdentifier; 4] = [
        AbilityIdentifier::Q,
        AbilityIdentifier::W,
        AbilityIdentifier::E,
        AbilityIdentifier::R,
    ];

    /// Check if this identifies the ultimate slot.
    #[must_use]
    pub const fn is_ultimate(self) -> bool {
        matches!(self, AbilityIdentifier::R)
    }
}

impl std::fmt::Display for AbilityIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AbilityIdentifier::Q => "Q",
            AbilityIdentifier::W => "W",
            AbilityIdentifier::E => "E",
            AbilityIdentifier::R => "R",
            AbilityIdentifier::None => "None",
        };
        f.write_str(name)
    }
}

/// A champion ability.
///
/// Implementations describe themselves (identifier, name, target shape,
/// range, effect mask) and provide the effect. They are stateless from the
/// engine's point of view: `on_cast` takes `&self`.
///
/// ## Example
///
/// ```
/// use rune_chess::abilities::{
///     Ability, AbilityEffectMask, AbilityIdentifier, CastContext, CastReport, TargetType,
/// };
/// use rune_chess::core::Result;
///
/// #[derive(Debug)]
/// struct Shockwave;
///
/// impl Ability for Shockwave {
///     fn identifier(&self) -> AbilityIdentifier { AbilityIdentifier::R }
///     fn name(&self) -> &str { "Shockwave" }
///     fn target_type(&self) -> TargetType { TargetType::None }
///     fn effect_mask(&self) -> AbilityEffectMask {
///         AbilityEffectMask::new().allow_enemy_champions().allow_enemy_minions()
///     }
///     fn on_cast(&self, ctx: &CastContext<'_>) -> Result<CastReport> {
///         Ok(ctx.report(ctx.recipients(&self.effect_mask())))
///     }
/// }
/// ```
pub trait Ability: Send + Sync + std::fmt::Debug {
    /// Which slot this ability belongs in.
    fn identifier(&self) -> AbilityIdentifier;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The target shape this ability requires.
    fn target_type(&self) -> TargetType;

    /// Maximum cast range in cells, if limited.
    fn max_range(&self) -> Option<u8> {
        None
    }

    /// Which units the effect may reach. Affects nothing by default.
    fn effect_mask(&self) -> AbilityEffectMask {
        AbilityEffectMask::NONE
    }

    /// Run the effect. Only called after the target has been validated.
    fn on_cast(&self, ctx: &CastContext<'_>) -> Result<CastReport>;
}

/// Placeholder filling empty champion slots. Does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAbility;

impl Ability for NoAbility {
    fn identifier(&self) -> AbilityIdentifier {
        AbilityIdentifier::None
    }

    fn name(&self) -> &str {
        "None"
    }

    fn target_type(&self) -> TargetType {
        TargetType::None
    }

    fn on_cast(&self, ctx: &CastContext<'_>) -> Result<CastReport> {
        Ok(ctx.report(SmallVec::new()))
    }
}

/// An ability installed in a champion slot.
///
/// The caster is fixed when the champion is built and never changes.
/// Cloning a `BoundAbility` (as part of cloning its unit for a board
/// snapshot) keeps the same caster.
#[derive(Clone, Debug)]
pub struct BoundAbility {
    caster: UnitId,
    ability: Arc<dyn Ability>,
}

impl BoundAbility {
    pub(crate) fn new(caster: UnitId, ability: Box<dyn Ability>) -> Self {
        Self {
            caster,
            ability: Arc::from(ability),
        }
    }

    pub(crate) fn empty(caster: UnitId) -> Self {
        Self::new(caster, Box::new(NoAbility))
    }

    /// The champion this ability is bound to.
    #[must_use]
    pub fn caster(&self) -> UnitId {
        self.caster
    }

    #[must_use]
    pub fn identifier(&self) -> AbilityIdentifier {
        self.ability.identifier()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.ability.name()
    }

    #[must_use]
    pub fn target_type(&self) -> TargetType {
        self.ability.target_type()
    }

    #[must_use]
    pub fn max_range(&self) -> Option<u8> {
        self.ability.max_range()
    }

    #[must_use]
    pub fn effect_mask(&self) -> AbilityEffectMask {
        self.ability.effect_mask()
    }

    /// Check if this is the ultimate.
    #[must_use]
    pub fn is_ultimate(&self) -> bool {
        self.identifier().is_ultimate()
    }

    /// Check if this is the empty placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifier() == AbilityIdentifier::None
    }

    /// Check whether `target` has the shape this ability requires.
    #[must_use]
    pub fn is_valid_with_target(&self, target: &AbilityTarget) -> bool {
        self.target_type().accepts(target, self.caster)
    }

    pub(crate) fn run(&self, ctx: &CastContext<'_>) -> Result<CastReport> {
        self.ability.on_cast(ctx)
    }
}

/// Check whether a unit falls inside `mask` as seen from `caster_color`.
///
/// The unit is classified as ally or enemy by
/// [`TeamColor::relation_to`], and as champion or minion by its type;
/// exactly one mask flag decides. `mask.self_target` is not consulted.
#[must_use]
pub fn can_affect(caster_color: TeamColor, unit: &Unit, mask: &AbilityEffectMask) -> bool {
    mask.admits(caster_color.relation_to(unit.team_color()), unit.unit_type())
}

/// What an ability sees while its effect runs.
pub struct CastContext<'a> {
    caster: &'a Unit,
    slot: AbilityIdentifier,
    target: AbilityTarget,
    board: &'a Board,
}

impl<'a> CastContext<'a> {
    pub(crate) fn new(
        caster: &'a Unit,
        slot: AbilityIdentifier,
        target: AbilityTarget,
        board: &'a Board,
    ) -> Self {
        Self {
            caster,
            slot,
            target,
            board,
        }
    }

    /// The casting champion.
    #[must_use]
    pub fn caster(&self) -> &'a Unit {
        self.caster
    }

    /// The slot being cast.
    #[must_use]
    pub fn slot(&self) -> AbilityIdentifier {
        self.slot
    }

    /// The validated target.
    #[must_use]
    pub fn target(&self) -> AbilityTarget {
        self.target
    }

    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The targeted unit, if the target is a unit that is on the board.
    #[must_use]
    pub fn target_unit(&self) -> Option<&'a Unit> {
        self.target.unit().and_then(|id| self.board.unit(id))
    }

    /// [`can_affect`] from this caster's point of view.
    #[must_use]
    pub fn can_affect(&self, unit: &Unit, mask: &AbilityEffectMask) -> bool {
        can_affect(self.caster.team_color(), unit, mask)
    }

    /// All board units `mask` admits, ordered by unit ID.
    #[must_use]
    pub fn recipients(&self, mask: &AbilityEffectMask) -> SmallVec<[UnitId; 8]> {
        let mut ids: SmallVec<[UnitId; 8]> = self
            .board
            .all_units()
            .into_iter()
            .filter(|unit| self.can_affect(unit, mask))
            .map(|unit| unit.id())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Build the report for this cast.
    #[must_use]
    pub fn report(&self, affected: SmallVec<[UnitId; 8]>) -> CastReport {
        CastReport {
            ability: self.slot,
            caster: self.caster.id(),
            target: self.target,
            affected,
        }
    }
}

/// Outcome of a successful cast.
///
/// The engine does not resolve damage or stats; the report records which
/// units the effect reached so the caller can apply its own rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastReport {
    /// The slot that was cast.
    pub ability: AbilityIdentifier,
    pub caster: UnitId,
    pub target: AbilityTarget,
    /// Units the effect reached.
    pub affected: SmallVec<[UnitId; 8]>,
}
