//! Abilities, targets and effect masks.
//!
//! - `Ability`: the contract concrete champion abilities implement
//! - `AbilityTarget` / `TargetType`: what a cast is aimed at, and what it must be
//! - `AbilityEffectMask`: which ally/enemy champion/minion classes an effect reaches
//!
//! ## Decision procedure
//!
//! A cast passes two independent checks:
//!
//! 1. **Target shape** (`TargetType::accepts`): decided before the effect
//!    runs; a mismatch is `EngineError::InvalidTarget`.
//! 2. **Effect reach** (`can_affect`): decided by the effect, per unit,
//!    from the caster's team color and the unit's type.

mod ability;
mod mask;
mod target;

pub use ability::{
    can_affect, Ability, AbilityIdentifier, BoundAbility, CastContext, CastReport, NoAbility,
};
pub use mask::AbilityEffectMask;
pub use target::{AbilityTarget, TargetType};
