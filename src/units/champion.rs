//! Champions and their four ability slots.
//!
//! A champion has exactly one ability in each of Q, W, E and the ultimate
//! (R). Empty slots hold [`NoAbility`](crate::abilities::NoAbility). Every
//! slot is bound to the champion's own unit ID when the champion is built.

use tracing::{debug, warn};

use super::unit::{Unit, UnitKind};
use crate::abilities::{Ability, AbilityIdentifier, AbilityTarget, BoundAbility, CastContext, CastReport};
use crate::board::Board;
use crate::core::{EngineError, Result, UnitId};

/// A champion's ability slots.
#[derive(Clone, Debug)]
pub struct Champion {
    q: BoundAbility,
    w: BoundAbility,
    e: BoundAbility,
    ultimate: BoundAbility,
}

impl Champion {
    fn empty(caster: UnitId) -> Self {
        Self {
            q: BoundAbility::empty(caster),
            w: BoundAbility::empty(caster),
            e: BoundAbility::empty(caster),
            ultimate: BoundAbility::empty(caster),
        }
    }

    fn slot_mut(&mut self, which: AbilityIdentifier) -> Result<&mut BoundAbility> {
        match which {
            AbilityIdentifier::Q => Ok(&mut self.q),
            AbilityIdentifier::W => Ok(&mut self.w),
            AbilityIdentifier::E => Ok(&mut self.e),
            AbilityIdentifier::R => Ok(&mut self.ultimate),
            AbilityIdentifier::None => Err(EngineError::InvalidAbilityIdentifier),
        }
    }

    /// Look up the ability in a slot.
    ///
    /// `AbilityIdentifier::None` is not a slot and fails with
    /// `InvalidAbilityIdentifier`.
    pub fn ability(&self, which: AbilityIdentifier) -> Result<&BoundAbility> {
        match which {
            AbilityIdentifier::Q => Ok(&self.q),
            AbilityIdentifier::W => Ok(&self.w),
            AbilityIdentifier::E => Ok(&self.e),
            AbilityIdentifier::R => Ok(&self.ultimate),
            AbilityIdentifier::None => Err(EngineError::InvalidAbilityIdentifier),
        }
    }

    /// The ultimate slot.
    #[must_use]
    pub fn ultimate(&self) -> &BoundAbility {
        &self.ultimate
    }

    /// All four slots in Q, W, E, R order.
    #[must_use]
    pub fn abilities(&self) -> [&BoundAbility; 4] {
        [&self.q, &self.w, &self.e, &self.ultimate]
    }

    pub(crate) fn cast_ability(
        &self,
        caster: &Unit,
        which: AbilityIdentifier,
        target: AbilityTarget,
        board: &Board,
    ) -> Result<CastReport> {
        let ability = self.ability(which)?;
        debug_assert_eq!(ability.caster(), caster.id());

        if !ability.is_valid_with_target(&target) {
            warn!(
                caster = %caster.id(),
                ability = %which,
                expected = %ability.target_type(),
                target = %target,
                "rejected cast with illegal target"
            );
            return Err(EngineError::InvalidTarget {
                ability: which,
                expected: ability.target_type(),
                target,
            });
        }

        let cell = board.resolve_target(&target).map_err(|err| {
            warn!(
                caster = %caster.id(),
                ability = %which,
                target = %target,
                %err,
                "rejected cast at unresolved target"
            );
            err
        })?;

        let reach = (ability.max_range(), caster.position(), cell);
        if let (Some(max_range), Some(origin), Some(cell)) = reach {
            let distance = origin.distance(cell);
            if distance > max_range {
                warn!(
                    caster = %caster.id(),
                    ability = %which,
                    distance,
                    max_range,
                    "rejected cast out of range"
                );
                return Err(EngineError::OutOfRange {
                    ability: which,
                    distance,
                    max_range,
                });
            }
        }

        let ctx = CastContext::new(caster, which, target, board);
        let report = ability.run(&ctx)?;
        debug!(
            caster = %caster.id(),
            ability = %which,
            name = ability.name(),
            affected = report.affected.len(),
            "ability cast"
        );
        Ok(report)
    }
}

/// Builder for a champion unit.
///
/// Abilities go into the slot named by their own
/// [`identifier`](Ability::identifier). Installing an ability whose
/// identifier is `None` makes `build` fail with `InvalidAbilityIdentifier`.
///
/// ```
/// use rune_chess::abilities::NoAbility;
/// use rune_chess::core::EngineError;
/// use rune_chess::units::Unit;
///
/// let err = Unit::champion("Broken").with_ability(NoAbility).build().unwrap_err();
/// assert_eq!(err, EngineError::InvalidAbilityIdentifier);
/// ```
#[derive(Debug)]
pub struct ChampionBuilder {
    id: UnitId,
    name: String,
    champion: Champion,
    error: Option<EngineError>,
}

impl ChampionBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let id = UnitId::fresh();
        Self {
            id,
            name: name.into(),
            champion: Champion::empty(id),
            error: None,
        }
    }

    /// Install an ability in the slot it names. A later ability for the
    /// same slot replaces an earlier one.
    #[must_use]
    pub fn with_ability(mut self, ability: impl Ability + 'static) -> Self {
        if self.error.is_some() {
            return self;
        }
        let which = ability.identifier();
        match self.champion.slot_mut(which) {
            Ok(slot) => *slot = BoundAbility::new(self.id, Box::new(ability)),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Finish the champion.
    pub fn build(self) -> Result<Unit> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Unit::new(self.id, self.name, UnitKind::Champion(self.champion))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::{AbilityEffectMask, TargetType};
    use crate::core::{BoardPosition, TeamColor};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Dash {
        casts: Arc<AtomicUsize>,
    }

    impl Ability for Dash {
        fn identifier(&self) -> AbilityIdentifier {
            AbilityIdentifier::E
        }
        fn name(&self) -> &str {
            "Dash"
        }
        fn target_type(&self) -> TargetType {
            TargetType::Location
        }
        fn max_range(&self) -> Option<u8> {
            Some(3)
        }
        fn on_cast(&self, ctx: &CastContext<'_>) -> Result<CastReport> {
            self.casts.fetch_add(1, Ordering::SeqCst);
            Ok(ctx.report(Default::default()))
        }
    }

    #[derive(Debug)]
    struct Rally;

    impl Ability for Rally {
        fn identifier(&self) -> AbilityIdentifier {
            AbilityIdentifier::R
        }
        fn name(&self) -> &str {
            "Rally"
        }
        fn target_type(&self) -> TargetType {
            TargetType::Self_
        }
        fn effect_mask(&self) -> AbilityEffectMask {
            AbilityEffectMask::new().allow_ally_champions().allow_ally_minions()
        }
        fn on_cast(&self, ctx: &CastContext<'_>) -> Result<CastReport> {
            Ok(ctx.report(ctx.recipients(&self.effect_mask())))
        }
    }

    #[test]
    fn test_default_slots_are_empty() {
        let unit = Unit::champion("Plain").build().unwrap();
        let champion = unit.as_champion().unwrap();
        for slot in champion.abilities() {
            assert!(slot.is_empty());
            assert_eq!(slot.caster(), unit.id());
        }
    }

    #[test]
    fn test_lookup_by_identifier() {
        let casts = Arc::new(AtomicUsize::new(0));
        let unit = Unit::champion("Kit")
            .with_ability(Dash { casts })
            .with_ability(Rally)
            .build()
            .unwrap();
        let champion = unit.as_champion().unwrap();

        assert_eq!(champion.ability(AbilityIdentifier::E).unwrap().name(), "Dash");
        assert_eq!(champion.ability(AbilityIdentifier::R).unwrap().name(), "Rally");
        assert!(champion.ability(AbilityIdentifier::Q).unwrap().is_empty());
        assert!(champion.ultimate().is_ultimate());
        assert_eq!(champion.ability(AbilityIdentifier::E).unwrap().max_range(), Some(3));

        for id in AbilityIdentifier::SLOTS {
            assert_eq!(champion.ability(id).unwrap().caster(), unit.id());
        }
    }

    #[test]
    fn test_lookup_none_fails() {
        let unit = Unit::champion("Kit").build().unwrap();
        let champion = unit.as_champion().unwrap();
        assert_eq!(
            champion.ability(AbilityIdentifier::None).unwrap_err(),
            EngineError::InvalidAbilityIdentifier
        );
    }

    #[test]
    fn test_later_ability_replaces_slot() {
        let unit = Unit::champion("Kit")
            .with_ability(Dash { casts: Arc::new(AtomicUsize::new(0)) })
            .with_ability(Dash { casts: Arc::new(AtomicUsize::new(0)) })
            .build()
            .unwrap();
        let champion = unit.as_champion().unwrap();
        assert_eq!(champion.ability(AbilityIdentifier::E).unwrap().name(), "Dash");
    }

    #[test]
    fn test_rejected_cast_does_not_run_effect() {
        let casts = Arc::new(AtomicUsize::new(0));
        let kit = Unit::champion("Kit")
            .with_ability(Dash { casts: Arc::clone(&casts) })
            .build()
            .unwrap();
        let mut board = Board::new(8);
        let id = board.place_unit(kit, BoardPosition::new(0, 0)).unwrap();
        let unit = board.unit(id).unwrap();

        let err = unit
            .cast_ability(AbilityIdentifier::E, AbilityTarget::Unit(unit.id()), &board)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidTarget {
                ability: AbilityIdentifier::E,
                expected: TargetType::Location,
                target: AbilityTarget::Unit(unit.id()),
            }
        );
        assert_eq!(casts.load(Ordering::SeqCst), 0);

        unit.cast_ability(AbilityIdentifier::E, BoardPosition::new(2, 2).into(), &board)
            .unwrap();
        assert_eq!(casts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_range_is_enforced() {
        let casts = Arc::new(AtomicUsize::new(0));
        let kit = Unit::champion("Kit")
            .with_ability(Dash { casts: Arc::clone(&casts) })
            .build()
            .unwrap();
        let mut board = Board::new(8);
        let id = board.place_unit(kit, BoardPosition::new(1, 1)).unwrap();
        let unit = board.unit(id).unwrap();

        unit.cast_ability(AbilityIdentifier::E, BoardPosition::new(4, 0).into(), &board)
            .unwrap();
        assert_eq!(casts.load(Ordering::SeqCst), 1);

        let err = unit
            .cast_ability(AbilityIdentifier::E, BoardPosition::new(5, 3).into(), &board)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfRange {
                ability: AbilityIdentifier::E,
                distance: 4,
                max_range: 3,
            }
        );
        assert_eq!(casts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unresolved_targets_do_not_run_effect() {
        let casts = Arc::new(AtomicUsize::new(0));
        let kit = Unit::champion("Kit")
            .with_ability(Dash { casts: Arc::clone(&casts) })
            .build()
            .unwrap();
        let mut board = Board::new(4);
        let id = board.place_unit(kit, BoardPosition::new(3, 3)).unwrap();
        let unit = board.unit(id).unwrap();

        let err = unit
            .cast_ability(AbilityIdentifier::E, BoardPosition::new(4, 3).into(), &board)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::PositionOutOfBounds {
                position: BoardPosition::new(4, 3),
                board_size: 4,
            }
        );
        assert_eq!(casts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_self_cast_reaches_allies() {
        let mut board = Board::new(4);
        let mut caster = Unit::champion("Kit").with_ability(Rally).build().unwrap();
        caster.set_team_color(TeamColor::Blue);
        let caster_id = board.place_unit(caster, BoardPosition::new(0, 0)).unwrap();

        let mut ally = Unit::minion();
        ally.set_team_color(TeamColor::Blue);
        let ally_id = board.place_unit(ally, BoardPosition::new(1, 0)).unwrap();

        let mut enemy = Unit::minion();
        enemy.set_team_color(TeamColor::Red);
        board.place_unit(enemy, BoardPosition::new(2, 0)).unwrap();

        let caster = board.unit(caster_id).unwrap();
        let report = caster
            .cast_ability(AbilityIdentifier::R, AbilityTarget::Unit(caster_id), &board)
            .unwrap();

        let mut expected = vec![caster_id, ally_id];
        expected.sort();
        assert_eq!(report.affected.to_vec(), expected);

        let err = caster
            .cast_ability(AbilityIdentifier::R, AbilityTarget::Unit(ally_id), &board)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidTarget { .. }));
    }

    #[test]
    fn test_empty_slot_casts_with_no_target() {
        let mut board = Board::new(8);
        let id = board
            .place_unit(Unit::champion("Plain").build().unwrap(), BoardPosition::new(0, 0))
            .unwrap();
        let unit = board.unit(id).unwrap();
        let report = unit
            .cast_ability(AbilityIdentifier::Q, AbilityTarget::None, &board)
            .unwrap();
        assert_eq!(report.ability, AbilityIdentifier::Q);
        assert!(report.affected.is_empty());

        assert_eq!(
            unit.cast_ability(AbilityIdentifier::None, AbilityTarget::None, &board)
                .unwrap_err(),
            EngineError::InvalidAbilityIdentifier
        );
    }
}
