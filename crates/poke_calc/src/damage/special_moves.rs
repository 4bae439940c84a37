//! Moves whose type, category or power depends on the battle.

use crate::core_data::MoveCategory;
use crate::damage::formula::apply_boost;
use crate::damage::Modifier;
use crate::field::Weather;
use crate::moves::MoveInput;
use crate::natures::BattleStat;
use crate::state::{CombatantState, Status};
use crate::types::Type;

use super::DamageContext;

/// Special moves that hit the target's Defense.
pub fn targets_physical_defense(mv: &MoveInput) -> bool {
    matches!(mv.id.as_str(), "psyshock" | "psystrike" | "secretsword")
}

/// Facade keeps its power when the user is burned.
pub fn ignores_burn(mv: &MoveInput) -> bool {
    mv.is("facade")
}

/// Type set by the move itself. These moves are never touched by -ate abilities.
pub fn move_type(mv: &MoveInput, attacker: &CombatantState, weather: Weather) -> Option<Type> {
    match mv.id.as_str() {
        "weatherball" => Some(match weather {
            Weather::Sun => Type::Fire,
            Weather::Rain => Type::Water,
            Weather::Sand => Type::Rock,
            Weather::Snow => Type::Ice,
            Weather::None => Type::Normal,
        }),
        "terablast" => attacker.tera_type().filter(|t| *t != Type::Stellar),
        _ => None,
    }
}

/// Tera Blast becomes physical when the user's Attack beats its Sp. Atk.
pub fn category(mv: &MoveInput, attacker: &CombatantState) -> MoveCategory {
    if mv.is("terablast") && attacker.tera_type().is_some() {
        let stats = attacker.stats();
        let stages = attacker.stages();
        let atk = apply_boost(stats.atk as u32, stages.get(BattleStat::Atk));
        let spa = apply_boost(stats.spa as u32, stages.get(BattleStat::SpA));
        if atk > spa {
            return MoveCategory::Physical;
        }
    }
    mv.category
}

/// Base power before the power chain.
///
/// Weight- and HP-based formulas only replace the power when the caller did
/// not override it. Conditional doublers apply to whatever power is set.
pub fn base_power(ctx: &DamageContext) -> u16 {
    let mv = ctx.mv;
    let attacker = ctx.attacker;
    let defender = ctx.defender;

    let mut power = mv.power;
    if !mv.power_overridden {
        power = match mv.id.as_str() {
            "lowkick" | "grassknot" => weight_power(ctx.weight_of(defender)),
            "heavyslam" | "heatcrash" => {
                weight_ratio_power(ctx.weight_of(attacker), ctx.weight_of(defender))
            }
            "eruption" | "waterspout" => {
                let scaled = 150 * attacker.current_hp() as u32 / attacker.max_hp() as u32;
                scaled.max(1) as u16
            }
            "flail" | "reversal" => {
                flail_power(48 * attacker.current_hp() as u32 / attacker.max_hp() as u32)
            }
            _ => power,
        };
    }

    let doubled = match mv.id.as_str() {
        "facade" => !attacker.status().is_none(),
        "hex" => !defender.status().is_none(),
        "venoshock" => defender.status() == Status::Poison,
        "brine" => defender.hp_at_most(1, 2),
        "weatherball" => ctx.weather != Weather::None,
        "acrobatics" => attacker.item().is_none(),
        _ => false,
    };
    if doubled {
        power.saturating_mul(2)
    } else {
        power
    }
}

/// Move-specific entries in the base-power chain.
pub fn power_modifier(ctx: &DamageContext) -> Option<Modifier> {
    match ctx.mv.id.as_str() {
        "knockoff" if ctx.defender.item().is_some() => Some(Modifier::ONE_POINT_FIVE),
        "solarbeam" | "solarblade"
            if matches!(ctx.weather, Weather::Rain | Weather::Sand | Weather::Snow) =>
        {
            Some(Modifier::HALF)
        }
        _ => None,
    }
}

/// Move-specific entries in the final chain.
pub fn final_modifier(ctx: &DamageContext) -> Option<Modifier> {
    match ctx.mv.id.as_str() {
        "collisioncourse" | "electrodrift" if ctx.is_super_effective() => {
            Some(Modifier::ONE_POINT_THREE_THREE)
        }
        _ => None,
    }
}

/// Low Kick / Grass Knot by target weight.
fn weight_power(weight_kg: f32) -> u16 {
    match weight_kg {
        w if w >= 200.0 => 120,
        w if w >= 100.0 => 100,
        w if w >= 50.0 => 80,
        w if w >= 25.0 => 60,
        w if w >= 10.0 => 40,
        _ => 20,
    }
}

/// Heavy Slam / Heat Crash by user-to-target weight ratio.
fn weight_ratio_power(user_kg: f32, target_kg: f32) -> u16 {
    let ratio = user_kg / target_kg.max(0.1);
    match ratio {
        r if r >= 5.0 => 120,
        r if r >= 4.0 => 100,
        r if r >= 3.0 => 80,
        r if r >= 2.0 => 60,
        _ => 40,
    }
}

/// Flail / Reversal by `floor(48 * hp / max_hp)`.
fn flail_power(p: u32) -> u16 {
    match p {
        0..=1 => 200,
        2..=4 => 150,
        5..=9 => 100,
        10..=16 => 80,
        17..=32 => 40,
        _ => 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_bands() {
        assert_eq!(weight_power(6.0), 20);
        assert_eq!(weight_power(10.0), 40);
        assert_eq!(weight_power(95.0), 80);
        assert_eq!(weight_power(210.0), 120);
        assert_eq!(weight_power(460.0), 120);
    }

    #[test]
    fn test_weight_ratio_bands() {
        assert_eq!(weight_ratio_power(400.0, 80.0), 120);
        assert_eq!(weight_ratio_power(400.0, 100.0), 100);
        assert_eq!(weight_ratio_power(300.0, 100.0), 80);
        assert_eq!(weight_ratio_power(200.0, 100.0), 60);
        assert_eq!(weight_ratio_power(100.0, 100.0), 40);
    }

    #[test]
    fn test_flail_bands() {
        assert_eq!(flail_power(0), 200);
        assert_eq!(flail_power(4), 150);
        assert_eq!(flail_power(16), 80);
        assert_eq!(flail_power(48), 20);
    }
}
