//! Type effectiveness and STAB for a single hit.
//!
//! The chart lookup is the starting point; move, ability, item and field
//! rules then override individual matchups or grant immunities.

use tracing::debug;

use crate::damage::{AppliedModifier, Modifier, ModifierSource, Stage};
use crate::error::{CalcError, Result};
use crate::types::{Type, NEUTRAL};

use super::DamageContext;

/// Largest effectiveness on the 4-based scale (4x).
const MAX_EFFECTIVENESS: u32 = 16;

/// Effectiveness of the move against the defender on the 4-based scale.
///
/// Always one of 0, 1, 2, 4, 8, 16.
pub fn type_effectiveness(ctx: &DamageContext, applied: &mut Vec<AppliedModifier>) -> u8 {
    let defending = ctx.defender.defensive_types();

    let mut attacking = vec![ctx.move_type];
    if ctx.mv.is("flyingpress") {
        attacking.push(Type::Flying);
    }

    let mut product: u32 = 1;
    let mut lookups: u32 = 0;
    for &attack_type in &attacking {
        for &defend_type in defending {
            product *= matchup(ctx, attack_type, defend_type) as u32;
            lookups += 1;
        }
    }

    let mut effectiveness = if product == 0 {
        0
    } else {
        let scale = (NEUTRAL as u32).pow(lookups.saturating_sub(1));
        (product / scale).clamp(1, MAX_EFFECTIVENESS) as u8
    };

    if effectiveness > 0 {
        if let Some((source, id)) = immunity(ctx, effectiveness) {
            debug!(rule = id, "immunity");
            applied.push(AppliedModifier::new(source, id, Stage::Effectiveness, 0.0));
            effectiveness = 0;
        }
    }
    effectiveness
}

/// One attacking type against one defending type, with overrides.
fn matchup(ctx: &DamageContext, attacking: Type, defending: Type) -> u8 {
    if ctx.mv.is("freezedry") && defending == Type::Water {
        return 8;
    }

    let raw = ctx.data.type_chart().lookup(attacking, defending);
    if raw != 0 {
        return raw;
    }

    let ring_target = ctx.defender_item.is_some_and(|i| i.hooks.ignores_type_immunity);
    let ignored_by_ability = ctx
        .attacker_ability
        .and_then(|a| a.hooks.on_ignore_immunity)
        .is_some_and(|ignore| ignore(attacking, defending));
    let grounded_flyer =
        attacking == Type::Ground && defending == Type::Flying && ctx.defender_grounded;

    if ring_target || ignored_by_ability || grounded_flyer {
        NEUTRAL
    } else {
        0
    }
}

/// Ability and item immunities that apply on top of the chart.
fn immunity<'a>(ctx: &DamageContext<'a>, effectiveness: u8) -> Option<(ModifierSource, &'a str)> {
    if ctx.move_type == Type::Ground && !ctx.defender_grounded {
        if let Some(ability) = ctx.defender_ability.filter(|a| a.hooks.levitates) {
            return Some((ModifierSource::Ability, ability.id));
        }
        if let Some(item) = ctx.defender_item.filter(|i| i.hooks.levitates) {
            return Some((ModifierSource::Item, item.id));
        }
    }

    let ability = ctx.defender_ability?;
    let immune = ability
        .hooks
        .on_type_immunity
        .is_some_and(|check| check(ctx, effectiveness));
    immune.then_some((ModifierSource::Ability, ability.id))
}

/// Same-type attack bonus: 1, 1.5 or 2.
///
/// Matching both the tera type and an original type gives 2.0; either one
/// alone gives 1.5. Adaptability raises 1.5 to 2.0.
pub fn stab_modifier(ctx: &DamageContext) -> Result<Modifier> {
    let attacker = ctx.attacker;
    if attacker.tera_type() == Some(Type::Stellar) {
        return Err(CalcError::unsupported(
            "same-type bonus for a Stellar-Terastallized attacker",
        ));
    }

    let original = attacker.types().contains(&ctx.move_type);
    let tera = attacker.tera_type() == Some(ctx.move_type);
    let stab = match (tera, original) {
        (true, true) => Modifier::DOUBLE,
        (true, false) | (false, true) => Modifier::ONE_POINT_FIVE,
        (false, false) => return Ok(Modifier::ONE),
    };

    let stab = match ctx.attacker_ability.and_then(|a| a.hooks.on_modify_stab) {
        Some(modify) => modify(stab),
        None => stab,
    };
    Ok(stab.min(Modifier::DOUBLE))
}
