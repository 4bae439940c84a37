//! Type immunity abilities.
//!
//! Levitate is a flag on the hooks (it also affects grounding); everything
//! else is an `on_type_immunity` check against the effective move type.

use crate::damage::DamageContext;
use crate::types::{Type, NEUTRAL};

/// Volt Absorb / Lightning Rod / Motor Drive
pub fn electric(ctx: &DamageContext, _effectiveness: u8) -> bool {
    ctx.move_type == Type::Electric
}

/// Water Absorb / Storm Drain / Dry Skin
pub fn water(ctx: &DamageContext, _effectiveness: u8) -> bool {
    ctx.move_type == Type::Water
}

/// Flash Fire / Well-Baked Body
pub fn fire(ctx: &DamageContext, _effectiveness: u8) -> bool {
    ctx.move_type == Type::Fire
}

/// Sap Sipper
pub fn grass(ctx: &DamageContext, _effectiveness: u8) -> bool {
    ctx.move_type == Type::Grass
}

/// Earth Eater
pub fn ground(ctx: &DamageContext, _effectiveness: u8) -> bool {
    ctx.move_type == Type::Ground
}

/// Wonder Guard: only super-effective hits land
pub fn wonder_guard(_ctx: &DamageContext, effectiveness: u8) -> bool {
    effectiveness <= NEUTRAL
}

/// Scrappy / Mind's Eye: Normal and Fighting hit Ghost
pub fn scrappy(attacking: Type, defending: Type) -> bool {
    defending == Type::Ghost && matches!(attacking, Type::Normal | Type::Fighting)
}
