//! Damage calculation pipeline.
//!
//! # Architecture
//!
//! The damage calculation follows the game's damage formula:
//! 1. **Base Damage**: `floor(floor(floor(2 * Level / 5 + 2) * Power * Atk / Def) / 50) + 2`
//! 2. **Modifier Chain**: 4096-scale multipliers applied in a fixed order,
//!    truncating at every stage the game truncates at
//! 3. **Random Roll**: 16 outcomes, 85% to 100%
//!
//! # Usage
//!
//! ```ignore
//! use poke_calc::damage::calculate_damage;
//!
//! let result = calculate_damage(&data, &config, &attacker, &defender, &mv, &field)?;
//!
//! // result.rolls contains all 16 damage values (85-100% rolls)
//! ```

pub mod compare;
mod context;
pub mod effectiveness;
pub mod formula;
pub mod ko;
mod modifier;
pub mod modifiers;
pub mod pipeline;
pub mod special_moves;

pub use context::DamageContext;
pub use formula::{apply_boost, chain_mods, get_base_damage, of32, pokeround, ROLL_COUNT};
pub use modifier::Modifier;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::CalcConfig;
use crate::core_data::MoveCategory;
use crate::data::GameData;
use crate::error::{CalcError, Result};
use crate::field::FieldConditions;
use crate::moves::MoveInput;
use crate::state::CombatantState;
use crate::types::{effectiveness_multiplier, Type, NEUTRAL};

// ============================================================================
// Distribution
// ============================================================================

/// The 16 damage values, one per random roll (85% first, 100% last).
///
/// Always non-decreasing in roll index. Deserialization rejects any other
/// ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u16; 16]", into = "[u16; 16]")]
pub struct DamageDistribution([u16; ROLL_COUNT]);

impl DamageDistribution {
    pub const ZERO: Self = Self([0; ROLL_COUNT]);

    pub(crate) fn new(rolls: [u16; ROLL_COUNT]) -> Self {
        Self(rolls)
    }

    pub fn rolls(&self) -> &[u16; ROLL_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u16> {
        self.0.iter()
    }

    /// 85% roll.
    pub fn min(&self) -> u16 {
        self.0[0]
    }

    /// 100% roll.
    pub fn max(&self) -> u16 {
        self.0[ROLL_COUNT - 1]
    }

    pub fn average(&self) -> f64 {
        self.0.iter().map(|&d| d as f64).sum::<f64>() / ROLL_COUNT as f64
    }

    /// Occurrences of each damage value.
    pub fn counts(&self) -> BTreeMap<u16, u8> {
        let mut counts = BTreeMap::new();
        for &damage in &self.0 {
            *counts.entry(damage).or_insert(0) += 1;
        }
        counts
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }
}

impl TryFrom<[u16; ROLL_COUNT]> for DamageDistribution {
    type Error = CalcError;

    fn try_from(rolls: [u16; ROLL_COUNT]) -> Result<Self> {
        if rolls.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(CalcError::stat_input(
                "rolls",
                format!("{rolls:?}"),
                "damage rolls must be non-decreasing",
            ));
        }
        Ok(Self(rolls))
    }
}

impl From<DamageDistribution> for [u16; ROLL_COUNT] {
    fn from(rolls: DamageDistribution) -> Self {
        rolls.0
    }
}

impl std::ops::Index<usize> for DamageDistribution {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.0[index]
    }
}

// ============================================================================
// Breakdown
// ============================================================================

/// What produced a multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSource {
    Ability,
    Item,
    Move,
    Field,
    Status,
    Ruleset,
}

/// Where in the calculation a multiplier applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BasePower,
    Attack,
    Defense,
    Effectiveness,
    Crit,
    Stab,
    Burn,
    Screen,
    Weather,
    Final,
}

/// One rule that fired. Immunities are recorded with a multiplier of 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedModifier {
    pub source: ModifierSource,
    pub id: String,
    pub stage: Stage,
    pub multiplier: f64,
}

impl AppliedModifier {
    pub fn new(source: ModifierSource, id: &str, stage: Stage, multiplier: f64) -> Self {
        Self {
            source,
            id: id.to_string(),
            stage,
            multiplier,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    /// Base power after the power chain.
    pub base_power: u32,
    pub attack: u32,
    pub defense: u32,
    /// Formula output before any stage.
    pub base_damage: u32,
    pub effectiveness: f64,
    /// Effectiveness on the 4-based scale.
    pub effectiveness_raw: u8,
    pub stab: f64,
    /// 1.0 unless the hit is critical.
    pub crit: f64,
    pub burn: bool,
    /// 1.0 unless a screen applies.
    pub screen: f64,
    pub weather: f64,
    /// Combined ability/item/move final multiplier.
    pub final_modifier: f64,
    pub applied: Vec<AppliedModifier>,
}

impl Default for DamageBreakdown {
    fn default() -> Self {
        Self {
            base_power: 0,
            attack: 0,
            defense: 0,
            base_damage: 0,
            effectiveness: 1.0,
            effectiveness_raw: NEUTRAL,
            stab: 1.0,
            crit: 1.0,
            burn: false,
            screen: 1.0,
            weather: 1.0,
            final_modifier: 1.0,
            applied: Vec::new(),
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Result of a damage calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    pub move_id: String,
    pub move_name: String,
    /// Type after Weather Ball, Tera Blast and -ate abilities.
    pub move_type: Type,
    pub category: MoveCategory,

    /// All 16 possible damage values (random roll 85-100)
    pub rolls: DamageDistribution,
    pub min: u16,
    pub max: u16,
    pub average: f64,

    /// Defender HP the KO figures are measured against.
    pub defender_hp: u16,
    pub defender_max_hp: u16,
    /// Percent of the defender's max HP.
    pub min_percent: f64,
    pub max_percent: f64,

    pub ko_probability: f64,
    /// `None` when no KO is guaranteed within the configured hit bound.
    pub guaranteed_ko_hits: Option<u8>,
    pub probable_ko: BTreeMap<u8, f64>,

    pub breakdown: DamageBreakdown,
}

/// Calculate damage for a move.
///
/// Order of work:
/// 1. Reject an invalid config and fainted combatants
/// 2. Resolve the context (rules, move type, category, variable power)
/// 3. Zero-damage shortcut for status and zero-power moves
/// 4. Type effectiveness (zero-damage shortcut on immunity), then STAB
/// 5. Base power chain, effective stats, base damage
/// 6. Stage multipliers and the ruleset's pipeline
/// 7. KO analysis against the defender's current HP
pub fn calculate_damage(
    data: &GameData,
    config: &CalcConfig,
    attacker: &CombatantState,
    defender: &CombatantState,
    mv: &MoveInput,
    field: &FieldConditions,
) -> Result<DamageResult> {
    debug!(
        attacker = attacker.species(),
        defender = defender.species(),
        mv = %mv.id,
        "calculating damage"
    );

    config.validate()?;
    if defender.current_hp() == 0 {
        return Err(CalcError::battle_state(format!(
            "defender {} has already fainted (0 HP)",
            defender.species()
        )));
    }
    if attacker.current_hp() == 0 {
        return Err(CalcError::battle_state(format!(
            "attacker {} has fainted (0 HP)",
            attacker.species()
        )));
    }

    let mut ctx = DamageContext::new(data, config.ruleset, attacker, defender, mv, field)?;
    let mut breakdown = DamageBreakdown::default();

    if ctx.category == MoveCategory::Status || ctx.base_power == 0 {
        debug!(mv = %mv.id, "move deals no damage");
        return Ok(finish(&ctx, config, DamageDistribution::ZERO, breakdown));
    }

    ctx.effectiveness = effectiveness::type_effectiveness(&ctx, &mut breakdown.applied);
    breakdown.effectiveness_raw = ctx.effectiveness;
    breakdown.effectiveness = effectiveness_multiplier(ctx.effectiveness);
    if ctx.effectiveness == 0 {
        debug!(mv = %mv.id, "target is immune");
        return Ok(finish(&ctx, config, DamageDistribution::ZERO, breakdown));
    }

    let stab = effectiveness::stab_modifier(&ctx)?;

    let base_power = modifiers::compute_base_power(&ctx, &mut breakdown.applied);
    let (attack, defense) = modifiers::compute_effective_stats(&ctx, &mut breakdown.applied);
    let base_damage = get_base_damage(attacker.level() as u32, base_power, attack, defense);
    trace!(base_power, attack, defense, base_damage, "base damage");

    let stages = modifiers::compute_stage_modifiers(&ctx, stab, &mut breakdown.applied);
    let rolls = config
        .ruleset
        .roll_order
        .pipeline()
        .compute_rolls(base_damage, &stages);
    trace!(?rolls, "rolls");

    breakdown.base_power = base_power;
    breakdown.attack = attack;
    breakdown.defense = defense;
    breakdown.base_damage = base_damage;
    breakdown.stab = stab.as_f64();
    breakdown.crit = stages.crit.map_or(1.0, Modifier::as_f64);
    breakdown.burn = stages.burn;
    breakdown.screen = stages.screen.map_or(1.0, Modifier::as_f64);
    breakdown.weather = stages.weather.as_f64();
    breakdown.final_modifier = stages.final_chain() as f64 / 4096.0;

    Ok(finish(&ctx, config, DamageDistribution::new(rolls), breakdown))
}

fn finish(
    ctx: &DamageContext,
    config: &CalcConfig,
    rolls: DamageDistribution,
    breakdown: DamageBreakdown,
) -> DamageResult {
    let defender_hp = ctx.defender.current_hp();
    let max_hp = ctx.defender.max_hp();
    let percent = |damage: u16| damage as f64 * 100.0 / max_hp as f64;
    let ko = ko::analyze(&rolls, defender_hp, config.ko_hit_bound);

    debug!(
        mv = %ctx.mv.id,
        min = rolls.min(),
        max = rolls.max(),
        guaranteed = ?ko.guaranteed_ko_hits,
        "damage calculated"
    );

    DamageResult {
        move_id: ctx.mv.id.clone(),
        move_name: ctx.mv.name.clone(),
        move_type: ctx.move_type,
        category: ctx.category,
        min: rolls.min(),
        max: rolls.max(),
        average: rolls.average(),
        defender_hp,
        defender_max_hp: max_hp,
        min_percent: percent(rolls.min()),
        max_percent: percent(rolls.max()),
        ko_probability: ko.ko_probability,
        guaranteed_ko_hits: ko.guaranteed_ko_hits,
        probable_ko: ko.probable_ko,
        rolls,
        breakdown,
    }
}
