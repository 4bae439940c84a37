//! Item hook implementations.

use crate::core_data::MoveFlags;
use crate::damage::{DamageContext, Modifier};
use crate::natures::BattleStat;
use crate::types::Type;

/// Muscle Band / Wise Glasses (4505 / 4096)
const ONE_POINT_ONE: Modifier = Modifier::ONE_POINT_ONE;

/// Punching Glove rounds the other way (4506 / 4096).
const PUNCHING_GLOVE: Modifier = Modifier::new(4506);

fn when(condition: bool, modifier: Modifier) -> Option<Modifier> {
    condition.then_some(modifier)
}

// =============================================================================
// Base power
// =============================================================================

/// Type-boosting items (Charcoal, Mystic Water, plates, ...): 1.2x
pub fn type_boost(ctx: &DamageContext) -> Option<Modifier> {
    let item = ctx.attacker_item?;
    when(
        item.data.boost_type == Some(ctx.move_type),
        Modifier::ONE_POINT_TWO,
    )
}

pub fn muscle_band(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_physical(), ONE_POINT_ONE)
}

pub fn wise_glasses(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_special(), ONE_POINT_ONE)
}

pub fn punching_glove(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.has_flag(MoveFlags::PUNCH), PUNCHING_GLOVE)
}

// =============================================================================
// Attack
// =============================================================================

pub fn choice_band(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.offensive_stat() == BattleStat::Atk, Modifier::ONE_POINT_FIVE)
}

pub fn choice_specs(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.offensive_stat() == BattleStat::SpA, Modifier::ONE_POINT_FIVE)
}

/// Light Ball: 2x Atk and SpA for Pikachu.
pub fn light_ball(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.attacker.species() == "pikachu", Modifier::DOUBLE)
}

/// Thick Club: 2x Atk for Cubone or Marowak.
pub fn thick_club(ctx: &DamageContext) -> Option<Modifier> {
    let species = ctx.attacker.species();
    when(
        ctx.offensive_stat() == BattleStat::Atk
            && (species == "cubone" || species.starts_with("marowak")),
        Modifier::DOUBLE,
    )
}

// =============================================================================
// Defense
// =============================================================================

/// Assault Vest: 1.5x SpD.
pub fn assault_vest(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.defensive_stat() == BattleStat::SpD, Modifier::ONE_POINT_FIVE)
}

/// Eviolite: 1.5x Def and SpD if the holder can evolve.
pub fn eviolite(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.defender.nfe, Modifier::ONE_POINT_FIVE)
}

/// Metal Powder: 2x Def for Ditto.
pub fn metal_powder(ctx: &DamageContext) -> Option<Modifier> {
    when(
        ctx.defensive_stat() == BattleStat::Def && ctx.defender.species() == "ditto",
        Modifier::DOUBLE,
    )
}

// =============================================================================
// Final
// =============================================================================

pub fn life_orb(_ctx: &DamageContext) -> Option<Modifier> {
    Some(Modifier::LIFE_ORB)
}

pub fn expert_belt(ctx: &DamageContext) -> Option<Modifier> {
    when(ctx.is_super_effective(), Modifier::EXPERT_BELT)
}

/// Resist berries halve a super-effective hit of their type.
/// Chilan Berry (Normal) works on any Normal hit.
pub fn resist_berry(ctx: &DamageContext) -> Option<Modifier> {
    let berry = ctx.defender_item?.data.resist_type?;
    when(
        berry == ctx.move_type && (berry == Type::Normal || ctx.is_super_effective()),
        Modifier::HALF,
    )
}
