//! Final damage modifiers.
//!
//! Split into attacker modifiers (`on_attacker_final_mod`) and defender
//! modifiers (`on_defender_final_mod`). Attacker mods go into the final
//! chain first, then defender mods.

use crate::core_data::MoveFlags;
use crate::damage::{DamageContext, Modifier};
use crate::types::Type;

fn when(condition: bool, modifier: Modifier) -> Option<Modifier> {
    condition.then_some(modifier)
}

// =============================================================================
// Attacker Final Modifiers
// =============================================================================

/// Tinted Lens: 2x damage on "not very effective" hits
pub fn tinted_lens(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_resisted(), Modifier::DOUBLE)
}

/// Sniper: 1.5x damage on critical hits
pub fn sniper(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_crit, Modifier::ONE_POINT_FIVE)
}

/// Neuroforce: 1.25x on super-effective hits
pub fn neuroforce(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_super_effective(), Modifier::ONE_POINT_TWO_FIVE)
}

// =============================================================================
// Defender Final Modifiers
// =============================================================================

/// Multiscale / Shadow Shield: 0.5x damage at full HP
pub fn multiscale(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.defender.is_full_hp(), Modifier::HALF)
}

/// Filter / Solid Rock / Prism Armor: 0.75x on super-effective hits
pub fn filter(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_super_effective(), Modifier::FILTER)
}

/// Fluffy: 0.5x contact damage, 2x Fire damage (both cancel out)
pub fn fluffy(ctx: &DamageContext) -> Option<Modifier> {
    match (ctx.has_flag(MoveFlags::CONTACT), ctx.move_type == Type::Fire) {
        (true, false) => Some(Modifier::HALF),
        (false, true) => Some(Modifier::DOUBLE),
        _ => None,
    }
}

/// Ice Scales: 0.5x special damage
pub fn ice_scales(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_special(), Modifier::HALF)
}

/// Punk Rock (defending side): 0.5x sound damage
pub fn punk_rock(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SOUND), Modifier::HALF)
}

/// Dry Skin: 1.25x Fire damage
pub fn dry_skin(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Fire, Modifier::ONE_POINT_TWO_FIVE)
}
