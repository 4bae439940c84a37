//! Damage pipelines: the ordered stages that turn base damage into 16 rolls.
//!
//! # Architecture
//!
//! The damage calculation has several phases:
//! 1. **Base Power** - Compute effective BP (Technician, terrain, weight-based, etc.)
//! 2. **Effective Stats** - Apply stages, then ability/item stat mods
//! 3. **Base Damage** - The main formula: `(2*L/5+2) * BP * Atk / Def / 50 + 2`
//! 4. **Stages** - Crit, STAB, effectiveness, burn, screens, weather, final mods
//! 5. **Random Roll** - 85..=100%
//!
//! Phases 4 and 5 are where calculators disagree on ordering, which is why
//! they sit behind the `DamagePipeline` trait. The ruleset picks one.

use crate::config::{FinalModifierOrder, StageRounding};
use crate::damage::formula::{
    apply_chain, apply_modifier, apply_modifier_floor, apply_random_roll, chain_mods, ROLL_COUNT,
};
use crate::damage::Modifier;
use crate::types::NEUTRAL;

/// Every stage multiplier for one calculation, resolved up front.
///
/// The pipeline only sees numbers; which rule produced them is recorded in
/// the breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct StageModifiers {
    /// Critical-hit multiplier, when the hit is a crit.
    pub crit: Option<Modifier>,
    pub stab: Modifier,
    /// Type effectiveness on the 4-based scale.
    pub effectiveness: u8,
    /// Burn halving applies.
    pub burn: bool,
    /// Reflect / Light Screen / Aurora Veil multiplier, when one applies.
    pub screen: Option<Modifier>,
    pub weather: Modifier,
    /// Ability, item and move final multipliers in application order.
    pub final_mods: Vec<Modifier>,
    pub final_order: FinalModifierOrder,
    /// Rounding of the screen, weather and final stages.
    pub rounding: StageRounding,
}

impl Default for StageModifiers {
    fn default() -> Self {
        Self {
            crit: None,
            stab: Modifier::ONE,
            effectiveness: NEUTRAL,
            burn: false,
            screen: None,
            weather: Modifier::ONE,
            final_mods: Vec::new(),
            final_order: FinalModifierOrder::Chained,
            rounding: StageRounding::Truncate,
        }
    }
}

impl StageModifiers {
    /// Combined 4096-scale value of the final stage.
    pub fn final_chain(&self) -> u32 {
        chain_mods(&self.final_mods)
    }
}

/// Defines the order of operations for computing final damage rolls.
///
/// The trait is object-safe (`&dyn DamagePipeline`) so the ruleset can pick a
/// pipeline at runtime.
pub trait DamagePipeline: Send + Sync {
    /// Compute all 16 damage values (rolls 85..=100%) from base damage.
    fn compute_rolls(&self, base_damage: u32, stages: &StageModifiers) -> [u16; ROLL_COUNT];
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Apply a 4096-scale value with the ruleset's rounding.
#[inline]
pub fn apply_scaled(damage: u32, scale: u32, rounding: StageRounding) -> u32 {
    match rounding {
        StageRounding::Truncate => apply_modifier_floor(damage, scale, 4096),
        StageRounding::Pokeround => apply_chain(damage, scale),
    }
}

#[inline]
pub fn apply_crit(damage: u32, crit: Option<Modifier>) -> u32 {
    match crit {
        Some(m) => apply_modifier_floor(damage, m.val() as u32, 4096),
        None => damage,
    }
}

/// STAB is a 4096-scale modifier rounded with pokeround.
#[inline]
pub fn apply_stab(damage: u32, stab: Modifier) -> u32 {
    apply_modifier(damage, stab)
}

/// Type effectiveness (always floor division).
#[inline]
pub fn apply_effectiveness(damage: u32, effectiveness: u8) -> u32 {
    apply_modifier_floor(damage, effectiveness as u32, NEUTRAL as u32)
}

#[inline]
pub fn apply_burn(damage: u32, burn: bool) -> u32 {
    if burn {
        damage / 2
    } else {
        damage
    }
}

#[inline]
pub fn apply_screen(damage: u32, stages: &StageModifiers) -> u32 {
    match stages.screen {
        Some(m) => apply_scaled(damage, m.val() as u32, stages.rounding),
        None => damage,
    }
}

#[inline]
pub fn apply_weather(damage: u32, stages: &StageModifiers) -> u32 {
    apply_scaled(damage, stages.weather.val() as u32, stages.rounding)
}

/// Final ability/item stage, chained or one modifier at a time.
pub fn apply_final_mods(damage: u32, stages: &StageModifiers) -> u32 {
    match stages.final_order {
        FinalModifierOrder::Chained => {
            apply_scaled(damage, stages.final_chain(), stages.rounding)
        }
        FinalModifierOrder::Sequential => stages
            .final_mods
            .iter()
            .fold(damage, |acc, &m| apply_scaled(acc, m.val() as u32, stages.rounding)),
    }
}

/// Clamp final damage to valid range (min 1, max u16::MAX).
#[inline]
pub fn clamp_damage(damage: u32) -> u16 {
    damage.clamp(1, u16::MAX as u32) as u16
}

// ============================================================================
// Deferred roll (default)
// ============================================================================

/// Base → Crit → STAB → Effectiveness → Burn → Screen → Weather → Final → Random
///
/// Every stage before the roll is invariant across the 16 rolls, so it is
/// computed once; the roll is the final truncation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeferredRollPipeline;

impl DamagePipeline for DeferredRollPipeline {
    fn compute_rolls(&self, base_damage: u32, stages: &StageModifiers) -> [u16; ROLL_COUNT] {
        let mut damage = apply_crit(base_damage, stages.crit);
        damage = apply_stab(damage, stages.stab);
        damage = apply_effectiveness(damage, stages.effectiveness);
        damage = apply_burn(damage, stages.burn);
        damage = apply_screen(damage, stages);
        damage = apply_weather(damage, stages);
        damage = apply_final_mods(damage, stages);

        std::array::from_fn(|i| clamp_damage(apply_random_roll(damage, i)))
    }
}

// ============================================================================
// Cartridge order
// ============================================================================

/// Weather → Crit → Random → STAB → Effectiveness → Burn → Screen → Final
///
/// The in-game order: the roll comes right after the pre-random stages and
/// everything else is truncated per roll.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartridgePipeline;

impl DamagePipeline for CartridgePipeline {
    fn compute_rolls(&self, base_damage: u32, stages: &StageModifiers) -> [u16; ROLL_COUNT] {
        let pre_random = apply_crit(apply_weather(base_damage, stages), stages.crit);

        std::array::from_fn(|i| {
            let mut damage = apply_random_roll(pre_random, i);
            damage = apply_stab(damage, stages.stab);
            damage = apply_effectiveness(damage, stages.effectiveness);
            damage = apply_burn(damage, stages.burn);
            damage = apply_screen(damage, stages);
            damage = apply_final_mods(damage, stages);
            clamp_damage(damage)
        })
    }
}
