//! Ability rules and registry.
//!
//! Each ability that affects damage is one [`AbilityHooks`] entry in
//! [`ABILITY_REGISTRY`]. The damage pipeline asks the hooks for multipliers
//! at each stage and never branches on ability identity itself.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::AbilityHooks;
pub use registry::ABILITY_REGISTRY;

use crate::data::GameData;
use crate::error::{CalcError, Result};

/// Rules for an ability that does nothing to damage.
static INERT: AbilityHooks = AbilityHooks::NONE;

/// An ability resolved for one calculation.
#[derive(Clone, Copy, Debug)]
pub struct ActiveAbility<'a> {
    pub id: &'a str,
    pub hooks: &'static AbilityHooks,
}

/// Resolve an ability id to its rules.
///
/// Abilities without an entry are inert, unless the game data declares a
/// damage effect for them: those fail with `UnsupportedMechanic` rather than
/// being silently ignored.
pub fn lookup<'a>(data: &GameData, id: Option<&'a str>) -> Result<Option<ActiveAbility<'a>>> {
    let Some(id) = id else {
        return Ok(None);
    };
    let ability = data.ability(id)?;

    let hooks = match ABILITY_REGISTRY.get(id) {
        Some(hooks) => hooks,
        None if ability.damage_effect => {
            return Err(CalcError::unsupported(format!(
                "ability '{}' affects damage but has no rule",
                ability.name
            )))
        }
        None => &INERT,
    };
    Ok(Some(ActiveAbility { id, hooks }))
}
