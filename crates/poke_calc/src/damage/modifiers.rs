//! Damage modifier stages.
//!
//! Each function resolves one phase of the calculation from the context and
//! records every rule that fired. Ability and item identity never appears
//! here: rules are reached only through their hooks.

use tracing::{debug, trace};

use super::context::DamageContext;
use super::formula::{apply_boost, apply_chain, chain_mods};
use super::pipeline::StageModifiers;
use super::special_moves;
use super::{AppliedModifier, Modifier, ModifierSource, Stage};
use crate::abilities::hooks::OnModifier;
use crate::abilities::{AbilityHooks, ActiveAbility};
use crate::field::{Terrain, Weather};
use crate::items::{HeldItem, ItemHooks};
use crate::natures::BattleStat;
use crate::state::Status;
use crate::types::Type;

// ============================================================================
// Chain Builder
// ============================================================================

/// Multipliers collected for one 4096-scale chain, recorded as they fire.
struct Chain<'r> {
    stage: Stage,
    mods: Vec<Modifier>,
    applied: &'r mut Vec<AppliedModifier>,
}

impl<'r> Chain<'r> {
    fn new(stage: Stage, applied: &'r mut Vec<AppliedModifier>) -> Self {
        Self {
            stage,
            mods: Vec::new(),
            applied,
        }
    }

    fn push(&mut self, source: ModifierSource, id: &str, modifier: Option<Modifier>) {
        let Some(modifier) = modifier else {
            return;
        };
        debug!(stage = ?self.stage, rule = id, multiplier = modifier.as_f64(), "rule applied");
        self.applied
            .push(AppliedModifier::new(source, id, self.stage, modifier.as_f64()));
        self.mods.push(modifier);
    }

    fn ability(
        &mut self,
        ctx: &DamageContext,
        ability: Option<ActiveAbility<'_>>,
        hook: fn(&AbilityHooks) -> Option<OnModifier>,
    ) {
        if let Some(ability) = ability {
            if let Some(hook) = hook(ability.hooks) {
                self.push(ModifierSource::Ability, ability.id, hook(ctx));
            }
        }
    }

    fn item(
        &mut self,
        ctx: &DamageContext,
        item: Option<HeldItem<'_>>,
        hook: fn(&ItemHooks) -> Option<OnModifier>,
    ) {
        if let Some(item) = item {
            if let Some(hook) = hook(item.hooks) {
                self.push(ModifierSource::Item, item.id, hook(ctx));
            }
        }
    }

    fn apply(self, value: u32) -> u32 {
        apply_chain(value, chain_mods(&self.mods))
    }

    fn into_mods(self) -> Vec<Modifier> {
        self.mods
    }
}

// ============================================================================
// Phase 1: Base Power
// ============================================================================

/// Base power after the 4096 power chain.
///
/// Order: move rule, attacker ability, attacker item, terrain, caller
/// modifier. The result is at least 1.
pub fn compute_base_power(ctx: &DamageContext, applied: &mut Vec<AppliedModifier>) -> u32 {
    let mut chain = Chain::new(Stage::BasePower, applied);

    chain.push(
        ModifierSource::Move,
        &ctx.mv.id,
        special_moves::power_modifier(ctx),
    );
    chain.ability(ctx, ctx.attacker_ability, |h| h.on_base_power);
    chain.item(ctx, ctx.attacker_item, |h| h.on_base_power);
    chain.push(
        ModifierSource::Field,
        ctx.terrain().as_str(),
        terrain_modifier(ctx),
    );
    chain.push(ModifierSource::Move, &ctx.mv.id, ctx.mv.power_modifier);

    let base_power = chain.apply(ctx.base_power as u32).max(1);
    trace!(raw = ctx.base_power, base_power, "base power");
    base_power
}

fn terrain_modifier(ctx: &DamageContext) -> Option<Modifier> {
    let boosted = |t: Type| ctx.attacker_grounded && ctx.move_type == t;
    match ctx.terrain() {
        Terrain::Electric if boosted(Type::Electric) => Some(Modifier::ONE_POINT_THREE),
        Terrain::Grassy if boosted(Type::Grass) => Some(Modifier::ONE_POINT_THREE),
        Terrain::Psychic if boosted(Type::Psychic) => Some(Modifier::ONE_POINT_THREE),
        Terrain::Grassy
            if ctx.defender_grounded
                && matches!(ctx.mv.id.as_str(), "earthquake" | "bulldoze" | "magnitude") =>
        {
            Some(Modifier::HALF)
        }
        Terrain::Misty if ctx.defender_grounded && ctx.move_type == Type::Dragon => {
            Some(Modifier::HALF)
        }
        _ => None,
    }
}

// ============================================================================
// Phase 2: Effective Stats
// ============================================================================

/// Attack and defense used by the base-damage formula.
///
/// Stages first (crits drop the attacker's drops and the defender's boosts),
/// then ability and item chains. Both values are at least 1.
pub fn compute_effective_stats(
    ctx: &DamageContext,
    applied: &mut Vec<AppliedModifier>,
) -> (u32, u32) {
    let attack = compute_attack(ctx, applied);
    let defense = compute_defense(ctx, applied);
    (attack, defense)
}

fn compute_attack(ctx: &DamageContext, applied: &mut Vec<AppliedModifier>) -> u32 {
    // Foul Play uses the target's Attack and stages.
    let (owner, stat) = if ctx.mv.is("foulplay") {
        (ctx.defender, BattleStat::Atk)
    } else {
        (ctx.attacker, ctx.offensive_stat())
    };

    let raw = owner.stats().get(stat) as u32;
    let mut stage = owner.stages().get(stat);
    if ctx.defender_ability.is_some_and(|a| a.hooks.ignores_stages) || (ctx.is_crit && stage < 0)
    {
        stage = 0;
    }
    let boosted = apply_boost(raw, stage);

    let mut chain = Chain::new(Stage::Attack, applied);
    chain.ability(ctx, ctx.attacker_ability, |h| h.on_attack);
    chain.ability(ctx, ctx.defender_ability, |h| h.on_foe_attack);
    chain.item(ctx, ctx.attacker_item, |h| h.on_attack);

    let attack = chain.apply(boosted).max(1);
    trace!(?stat, raw, stage, attack, "attack");
    attack
}

fn compute_defense(ctx: &DamageContext, applied: &mut Vec<AppliedModifier>) -> u32 {
    let stat = ctx.defensive_stat();
    // Wonder Room swaps the stat values, not the stages.
    let raw_stat = match (ctx.field.wonder_room, stat) {
        (true, BattleStat::Def) => BattleStat::SpD,
        (true, BattleStat::SpD) => BattleStat::Def,
        _ => stat,
    };

    let raw = ctx.defender.stats().get(raw_stat) as u32;
    let mut stage = ctx.defender.stages().get(stat);
    if ctx.attacker_ability.is_some_and(|a| a.hooks.ignores_stages) || (ctx.is_crit && stage > 0)
    {
        stage = 0;
    }
    let boosted = apply_boost(raw, stage);

    let mut chain = Chain::new(Stage::Defense, applied);
    chain.ability(ctx, ctx.defender_ability, |h| h.on_defense);
    chain.ability(ctx, ctx.attacker_ability, |h| h.on_foe_defense);
    chain.item(ctx, ctx.defender_item, |h| h.on_defense);
    chain.push(
        ModifierSource::Field,
        ctx.weather.as_str(),
        weather_defense(ctx, stat),
    );

    let defense = chain.apply(boosted).max(1);
    trace!(?stat, raw, stage, defense, "defense");
    defense
}

/// Sand raises Rock types' Sp. Def, snow raises Ice types' Defense.
fn weather_defense(ctx: &DamageContext, stat: BattleStat) -> Option<Modifier> {
    let boosted = match (ctx.weather, stat) {
        (Weather::Sand, BattleStat::SpD) => ctx.defender.has_type(Type::Rock),
        (Weather::Snow, BattleStat::Def) => ctx.defender.has_type(Type::Ice),
        _ => false,
    };
    boosted.then_some(Modifier::ONE_POINT_FIVE)
}

// ============================================================================
// Phase 3: Damage Stages
// ============================================================================

/// Every multiplier after base damage, ready for the pipeline.
pub fn compute_stage_modifiers(
    ctx: &DamageContext,
    stab: Modifier,
    applied: &mut Vec<AppliedModifier>,
) -> StageModifiers {
    let mut record = |source, id: &str, stage, multiplier: f64| {
        debug!(?stage, rule = id, multiplier, "rule applied");
        applied.push(AppliedModifier::new(source, id, stage, multiplier));
    };

    let crit = ctx.is_crit.then(|| ctx.ruleset.crit.modifier());
    if let Some(crit) = crit {
        record(ModifierSource::Ruleset, "crit", Stage::Crit, crit.as_f64());
    }

    if stab != Modifier::ONE {
        record(ModifierSource::Ruleset, "stab", Stage::Stab, stab.as_f64());
    }

    let burn = ctx.attacker.status() == Status::Burn
        && ctx.is_physical()
        && !ctx.attacker_ability.is_some_and(|a| a.hooks.ignores_burn)
        && !special_moves::ignores_burn(ctx.mv);
    if burn {
        record(ModifierSource::Status, "burn", Stage::Burn, 0.5);
    }

    let screen = (!ctx.is_crit && ctx.field.has_screen(ctx.is_physical()))
        .then(|| ctx.ruleset.format.screen_modifier());
    if let Some(screen) = screen {
        record(ModifierSource::Field, screen_id(ctx), Stage::Screen, screen.as_f64());
    }

    let weather = weather_modifier(ctx);
    if let Some(weather) = weather {
        record(
            ModifierSource::Field,
            ctx.weather.as_str(),
            Stage::Weather,
            weather.as_f64(),
        );
    }

    let mut chain = Chain::new(Stage::Final, applied);
    chain.push(
        ModifierSource::Move,
        &ctx.mv.id,
        special_moves::final_modifier(ctx),
    );
    chain.ability(ctx, ctx.attacker_ability, |h| h.on_attacker_final_mod);
    chain.ability(ctx, ctx.defender_ability, |h| h.on_defender_final_mod);
    chain.item(ctx, ctx.attacker_item, |h| h.on_attacker_final_mod);
    chain.item(ctx, ctx.defender_item, |h| h.on_defender_final_mod);

    StageModifiers {
        crit,
        stab,
        effectiveness: ctx.effectiveness,
        burn,
        screen,
        weather: weather.unwrap_or(Modifier::ONE),
        final_mods: chain.into_mods(),
        final_order: ctx.ruleset.final_modifiers,
        rounding: ctx.ruleset.rounding,
    }
}

fn screen_id(ctx: &DamageContext) -> &'static str {
    match (ctx.is_physical(), ctx.field.reflect, ctx.field.light_screen) {
        (true, true, _) => "reflect",
        (false, _, true) => "lightscreen",
        _ => "auroraveil",
    }
}

/// Sun: Fire 1.5x, Water 0.5x. Rain: the reverse.
fn weather_modifier(ctx: &DamageContext) -> Option<Modifier> {
    match (ctx.weather, ctx.move_type) {
        (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => Some(Modifier::ONE_POINT_FIVE),
        (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => Some(Modifier::HALF),
        _ => None,
    }
}
