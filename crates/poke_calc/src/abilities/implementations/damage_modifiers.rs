//! Base power modifying abilities.
//!
//! Called via `on_base_power` while building the base-power chain.

use crate::core_data::MoveFlags;
use crate::damage::{DamageContext, Modifier};
use crate::field::Weather;
use crate::state::Gender;
use crate::types::Type;

/// Supreme Overlord chain value by fainted allies (0..=5).
const SUPREME_OVERLORD: [u16; 6] = [4096, 4506, 4915, 5325, 5734, 6144];

fn when(condition: bool, modifier: Modifier) -> Option<Modifier> {
    condition.then_some(modifier)
}

/// Technician: 1.5x power for moves with BP <= 60
pub fn technician(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.base_power <= 60, Modifier::ONE_POINT_FIVE)
}

/// Iron Fist: 1.2x power for punch moves
pub fn iron_fist(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::PUNCH), Modifier::ONE_POINT_TWO)
}

/// Tough Claws: 1.3x power for contact moves
pub fn tough_claws(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::CONTACT), Modifier::ONE_POINT_THREE)
}

pub fn strong_jaw(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::BITE), Modifier::ONE_POINT_FIVE)
}

pub fn mega_launcher(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::PULSE), Modifier::ONE_POINT_FIVE)
}

pub fn sharpness(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SLICING), Modifier::ONE_POINT_FIVE)
}

/// Sheer Force: 1.3x for moves with a secondary effect
pub fn sheer_force(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SECONDARY), Modifier::ONE_POINT_THREE)
}

pub fn reckless(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::RECOIL), Modifier::ONE_POINT_TWO)
}

/// Punk Rock (attacking side): 1.3x sound moves
pub fn punk_rock(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::SOUND), Modifier::ONE_POINT_THREE)
}

/// Sand Force: 1.3x Rock/Ground/Steel in sand
pub fn sand_force(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.weather == Weather::Sand
            && matches!(ctx.move_type, Type::Rock | Type::Ground | Type::Steel),
        Modifier::ONE_POINT_THREE,
    )
}

/// Analytic: 1.3x when moving after the target
pub fn analytic(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.attacker.moves_last, Modifier::ONE_POINT_THREE)
}

/// Rivalry: 1.25x against the same gender, 0.75x against the opposite one
pub fn rivalry(ctx: &DamageContext) -> Option<Modifier> {
    match (ctx.attacker.gender(), ctx.defender.gender()) {
        (Gender::Genderless, _) | (_, Gender::Genderless) => None,
        (a, d) if a == d => Some(Modifier::ONE_POINT_TWO_FIVE),
        _ => Some(Modifier::THREE_QUARTERS),
    }
}

/// Supreme Overlord: +10% per fainted ally, up to five
pub fn supreme_overlord(ctx: &DamageContext) -> Option<Modifier> {
    let fainted = (ctx.attacker.fainted_allies as usize).min(SUPREME_OVERLORD.len() - 1);
    when(fainted > 0, Modifier::new(SUPREME_OVERLORD[fainted]))
}
