//! Attack/Defense stat modifying abilities.
//!
//! Called via `on_attack` / `on_foe_attack` / `on_defense` / `on_foe_defense`
//! after stat stages are applied.

use crate::damage::{DamageContext, Modifier};
use crate::field::{Terrain, Weather};
use crate::natures::BattleStat;
use crate::state::CombatantState;
use crate::types::Type;

fn when(condition: bool, modifier: Modifier) -> Option<Modifier> {
    condition.then_some(modifier)
}

// =============================================================================
// Attacker
// =============================================================================

/// Pure Power / Huge Power: 2x Attack
pub fn huge_power(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_physical(), Modifier::DOUBLE)
}

/// Hustle: 1.5x Attack for physical moves (accuracy penalty out of scope)
pub fn hustle(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_physical(), Modifier::ONE_POINT_FIVE)
}

/// Guts: 1.5x Attack when statused
pub fn guts(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.is_physical() && !ctx.attacker.status().is_none(),
        Modifier::ONE_POINT_FIVE,
    )
}

pub fn gorilla_tactics(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_physical(), Modifier::ONE_POINT_FIVE)
}

/// Solar Power: 1.5x SpA in sun
pub fn solar_power(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_special() && ctx.weather == Weather::Sun, Modifier::ONE_POINT_FIVE)
}

fn pinch(ctx: &DamageContext, boosted: Type) -> Option<Modifier> {
    when(
        ctx.move_type == boosted && ctx.attacker.hp_at_most(1, 3),
        Modifier::ONE_POINT_FIVE,
    )
}

pub fn blaze(ctx: &DamageContext) -> Option<Modifier> {
    pinch(ctx, Type::Fire)
}

pub fn overgrow(ctx: &DamageContext) -> Option<Modifier> {
    pinch(ctx, Type::Grass)
}

pub fn torrent(ctx: &DamageContext) -> Option<Modifier> {
    pinch(ctx, Type::Water)
}

pub fn swarm(ctx: &DamageContext) -> Option<Modifier> {
    pinch(ctx, Type::Bug)
}

pub fn flash_fire(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.attacker.flash_fire_active && ctx.move_type == Type::Fire,
        Modifier::ONE_POINT_FIVE,
    )
}

/// Defeatist: 0.5x Attack/SpA when HP <= 50%
pub fn defeatist(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.attacker.hp_at_most(1, 2), Modifier::HALF)
}

pub fn water_bubble(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Water, Modifier::DOUBLE)
}

/// Transistor: 1.3x Electric (Gen 9 value)
pub fn transistor(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Electric, Modifier::ONE_POINT_THREE)
}

pub fn dragons_maw(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Dragon, Modifier::ONE_POINT_FIVE)
}

pub fn steelworker(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Steel, Modifier::ONE_POINT_FIVE)
}

pub fn rocky_payload(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Rock, Modifier::ONE_POINT_FIVE)
}

/// Orichalcum Pulse: ~1.33x Attack in sun
pub fn orichalcum_pulse(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.is_physical() && ctx.weather == Weather::Sun,
        Modifier::ONE_POINT_THREE_THREE,
    )
}

/// Hadron Engine: ~1.33x SpA on Electric Terrain
pub fn hadron_engine(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.is_special() && ctx.terrain() == Terrain::Electric,
        Modifier::ONE_POINT_THREE_THREE,
    )
}

// =============================================================================
// Paradox Abilities
// =============================================================================

/// 1.3x when the holder's boosted stat is the one being calculated.
fn paradox_boost(holder: &CombatantState, active: bool, stat: BattleStat) -> Option<Modifier> {
    when(active && holder.paradox_stat() == stat, Modifier::ONE_POINT_THREE)
}

/// Protosynthesis: boost the highest stat in sun
pub fn protosynthesis_attack(ctx: &DamageContext) -> Option<Modifier> {
    paradox_boost(ctx.attacker, ctx.weather == Weather::Sun, ctx.offensive_stat())
}

pub fn protosynthesis_defense(ctx: &DamageContext) -> Option<Modifier> {
    paradox_boost(ctx.defender, ctx.weather == Weather::Sun, ctx.defensive_stat())
}

/// Quark Drive: boost the highest stat on Electric Terrain
pub fn quark_drive_attack(ctx: &DamageContext) -> Option<Modifier> {
    paradox_boost(ctx.attacker, ctx.terrain() == Terrain::Electric, ctx.offensive_stat())
}

pub fn quark_drive_defense(ctx: &DamageContext) -> Option<Modifier> {
    paradox_boost(ctx.defender, ctx.terrain() == Terrain::Electric, ctx.defensive_stat())
}

// =============================================================================
// Defender, applied to the attacker's stat
// =============================================================================

pub fn thick_fat(ctx: &DamageContext) -> Option<Modifier> {
    when(matches!(ctx.move_type, Type::Fire | Type::Ice), Modifier::HALF)
}

pub fn heatproof(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Fire, Modifier::HALF)
}

pub fn water_bubble_defense(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Fire, Modifier::HALF)
}

pub fn purifying_salt(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.move_type == Type::Ghost, Modifier::HALF)
}

/// Tablets of Ruin: 0.75x Attack of everyone else
pub fn tablets_of_ruin(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.is_physical() && !ctx.attacker.has_ability("tabletsofruin"),
        Modifier::THREE_QUARTERS,
    )
}

/// Vessel of Ruin: 0.75x SpA of everyone else
pub fn vessel_of_ruin(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.is_special() && !ctx.attacker.has_ability("vesselofruin"),
        Modifier::THREE_QUARTERS,
    )
}

// =============================================================================
// Defender
// =============================================================================

pub fn fur_coat(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.defensive_stat() == BattleStat::Def, Modifier::DOUBLE)
}

pub fn marvel_scale(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.defensive_stat() == BattleStat::Def && !ctx.defender.status().is_none(),
        Modifier::ONE_POINT_FIVE,
    )
}

pub fn grass_pelt(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.defensive_stat() == BattleStat::Def && ctx.terrain() == Terrain::Grassy,
        Modifier::ONE_POINT_FIVE,
    )
}

// =============================================================================
// Attacker, applied to the defender's stat
// =============================================================================

/// Sword of Ruin: 0.75x Defense of everyone else
pub fn sword_of_ruin(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.defensive_stat() == BattleStat::Def && !ctx.defender.has_ability("swordofruin"),
        Modifier::THREE_QUARTERS,
    )
}

/// Beads of Ruin: 0.75x Sp. Def of everyone else
pub fn beads_of_ruin(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.defensive_stat() == BattleStat::SpD && !ctx.defender.has_ability("beadsofruin"),
        Modifier::THREE_QUARTERS,
    )
}
