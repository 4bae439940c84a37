//! Field, ruleset and critical-hit rules.

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use common::*;
use poke_calc::{
    BattleFormat, BattleStat, CalcConfig, CalcError, Calculator, CombatantConfig, CritRule,
    DamageResult, FieldConditions, FinalModifierOrder, MoveInput, RollOrder, Ruleset, Stage,
    StageRounding, Terrain, Weather,
};

fn fired<'r>(result: &'r DamageResult, id: &str) -> Option<&'r poke_calc::AppliedModifier> {
    result.breakdown.applied.iter().find(|m| m.id == id)
}

fn ruleset(f: impl FnOnce(&mut Ruleset)) -> CalcConfig {
    let mut ruleset = Ruleset::default();
    f(&mut ruleset);
    CalcConfig::default().with_ruleset(ruleset)
}

// ============================================================================
// Screens
// ============================================================================

#[test]
fn test_reflect_halves_physical_hits() {
    let data = dex();
    let earthquake = MoveInput::from_data(&data, "earthquake").unwrap();

    let open = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran"),
        &earthquake,
        &FieldConditions::default(),
    );
    let reflect = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran"),
        &earthquake,
        &FieldConditions::default().with_reflect(),
    );
    let light_screen = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran"),
        &earthquake,
        &FieldConditions::default().with_light_screen(),
    );

    assert_eq!(reflect.breakdown.screen, 0.5);
    assert_eq!(fired(&reflect, "reflect").map(|m| m.stage), Some(Stage::Screen));
    assert!(reflect.max < open.max);
    assert_eq!(light_screen.rolls, open.rolls);
}

#[test]
fn test_doubles_screen_multiplier() {
    let data = dex();
    let result = calc_with(
        &data,
        ruleset(|r| r.format = BattleFormat::Doubles),
        CombatantConfig::new("heatran"),
        CombatantConfig::new("garchomp"),
        &MoveInput::from_data(&data, "flamethrower").unwrap(),
        &FieldConditions::default().with_aurora_veil(),
    );
    assert_eq!(result.breakdown.screen, 2732.0 / 4096.0);
    assert!(fired(&result, "auroraveil").is_some());
}

// ============================================================================
// Critical hits
// ============================================================================

#[test]
fn test_crit_ignores_screens_and_defense_boosts() {
    let data = dex();
    let field = FieldConditions::default().with_reflect();
    let defender = CombatantConfig::new("heatran").stage(BattleStat::Def, 2);
    let raw_def = build(&data, defender.clone()).stats().def as u32;

    let normal = calc(
        &data,
        CombatantConfig::new("garchomp"),
        defender.clone(),
        &MoveInput::from_data(&data, "earthquake").unwrap(),
        &field,
    );
    assert_eq!(normal.breakdown.defense, raw_def * 2);
    assert_eq!(normal.breakdown.crit, 1.0);

    let crit = calc(
        &data,
        CombatantConfig::new("garchomp"),
        defender,
        &MoveInput::from_data(&data, "earthquake").unwrap().crit(true),
        &field,
    );
    assert_eq!(crit.breakdown.defense, raw_def);
    assert_eq!(crit.breakdown.crit, 1.5);
    assert_eq!(crit.breakdown.screen, 1.0);
    assert!(crit.min > normal.max);
}

#[test]
fn test_crit_keeps_attack_boosts_and_drops_penalties() {
    let data = dex();
    let mv = MoveInput::from_data(&data, "earthquake").unwrap().crit(true);
    let raw_atk = build(&data, CombatantConfig::new("garchomp")).stats().atk as u32;

    let dropped = calc(
        &data,
        CombatantConfig::new("garchomp").stage(BattleStat::Atk, -2),
        CombatantConfig::new("heatran"),
        &mv,
        &FieldConditions::default(),
    );
    assert_eq!(dropped.breakdown.attack, raw_atk);

    let boosted = calc(
        &data,
        CombatantConfig::new("garchomp").stage(BattleStat::Atk, 2),
        CombatantConfig::new("heatran"),
        &mv,
        &FieldConditions::default(),
    );
    assert_eq!(boosted.breakdown.attack, raw_atk * 2);
}

#[test]
fn test_classic_crit_doubles() {
    let data = dex();
    let result = calc_with(
        &data,
        ruleset(|r| r.crit = CritRule::Classic),
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran"),
        &MoveInput::from_data(&data, "earthquake").unwrap().crit(true),
        &FieldConditions::default(),
    );
    assert_eq!(result.breakdown.crit, 2.0);
}

// ============================================================================
// Weather and terrain
// ============================================================================

#[test]
fn test_weather_scales_fire_and_water() {
    let data = dex();
    let flamethrower = MoveInput::from_data(&data, "flamethrower").unwrap();
    let surf = MoveInput::from_data(&data, "surf").unwrap();
    let sun = FieldConditions::default().with_weather(Weather::Sun);
    let rain = FieldConditions::default().with_weather(Weather::Rain);
    let attacker = || CombatantConfig::new("heatran");
    let defender = || CombatantConfig::new("garchomp");

    assert_eq!(calc(&data, attacker(), defender(), &flamethrower, &sun).breakdown.weather, 1.5);
    assert_eq!(calc(&data, attacker(), defender(), &flamethrower, &rain).breakdown.weather, 0.5);
    assert_eq!(calc(&data, attacker(), defender(), &surf, &sun).breakdown.weather, 0.5);
    assert_eq!(calc(&data, attacker(), defender(), &surf, &rain).breakdown.weather, 1.5);
}

#[test]
fn test_sand_boosts_rock_special_defense() {
    let data = dex();
    let surf = MoveInput::from_data(&data, "surf").unwrap();
    let raw_spd = build(&data, CombatantConfig::new("tyranitar")).stats().spd as u32;

    let sand = calc(
        &data,
        CombatantConfig::new("greninja"),
        CombatantConfig::new("tyranitar"),
        &surf,
        &FieldConditions::default().with_weather(Weather::Sand),
    );
    let sand_boost = fired(&sand, "sand").unwrap();
    assert_eq!(sand_boost.stage, Stage::Defense);
    assert_eq!(sand_boost.multiplier, 1.5);
    assert!(sand.breakdown.defense > raw_spd);
}

#[test]
fn test_electric_terrain_boosts_grounded_attacker() {
    let data = dex();
    let thunderbolt = MoveInput::from_data(&data, "thunderbolt").unwrap();
    let terrain = FieldConditions::default().with_terrain(Terrain::Electric);

    let grounded = calc(
        &data,
        CombatantConfig::new("magnezone"),
        CombatantConfig::new("snorlax"),
        &thunderbolt,
        &terrain,
    );
    // 90 * 5325 / 4096 = 117.004
    assert_eq!(grounded.breakdown.base_power, 117);

    let airborne = calc(
        &data,
        CombatantConfig::new("zapdos"),
        CombatantConfig::new("snorlax"),
        &thunderbolt,
        &terrain,
    );
    assert_eq!(airborne.breakdown.base_power, 90);
}

#[test]
fn test_grassy_terrain_weakens_earthquake() {
    let data = dex();
    let result = calc(
        &data,
        CombatantConfig::new("garchomp"),
        CombatantConfig::new("heatran"),
        &MoveInput::from_data(&data, "earthquake").unwrap(),
        &FieldConditions::default().with_terrain(Terrain::Grassy),
    );
    assert_eq!(result.breakdown.base_power, 50);
}

#[test]
fn test_wonder_room_swaps_defenses() {
    let data = dex();
    let field = FieldConditions {
        wonder_room: true,
        ..Default::default()
    };
    let result = calc(
        &data,
        fixed("garchomp", [200, 150, 100, 100, 100, 100]),
        fixed("snorlax", [300, 100, 80, 100, 160, 100]),
        &MoveInput::from_data(&data, "earthquake").unwrap(),
        &field,
    );
    assert_eq!(result.breakdown.defense, 160);
}

// ============================================================================
// Ruleset
// ============================================================================

#[test]
fn test_random_first_pipeline() {
    let data = dex();
    let mv = MoveInput::from_data(&data, "outrage").unwrap();
    let attacker = || CombatantConfig::new("garchomp");
    let defender = || CombatantConfig::new("dragonite").ability("innerfocus");

    let deferred = calc(&data, attacker(), defender(), &mv, &FieldConditions::default());
    let cartridge = calc_with(
        &data,
        ruleset(|r| r.roll_order = RollOrder::RandomFirst),
        attacker(),
        defender(),
        &mv,
        &FieldConditions::default(),
    );

    assert_monotone(&cartridge);
    // Without weather or a crit the 100% roll is the identity in both orders.
    assert_eq!(cartridge.max, deferred.max);
    for (c, d) in cartridge.rolls.iter().zip(deferred.rolls.iter()) {
        assert!(c.abs_diff(*d) <= 4, "{c} vs {d}");
    }
}

#[test]
fn test_final_stage_records_rule_order() {
    let data = dex();
    let attacker = || CombatantConfig::new("garchomp").item("lifeorb");
    let defender = || CombatantConfig::new("dragonite");
    let mv = MoveInput::from_data(&data, "stoneedge").unwrap();

    let chained = calc(&data, attacker(), defender(), &mv, &FieldConditions::default());
    let position = |id: &str| chained.breakdown.applied.iter().position(|m| m.id == id);
    assert!(position("multiscale").unwrap() < position("lifeorb").unwrap());
    // 5324 chained with 2048
    assert_eq!(chained.breakdown.final_modifier, 2662.0 / 4096.0);

    let sequential = calc_with(
        &data,
        ruleset(|r| r.final_modifiers = FinalModifierOrder::Sequential),
        attacker(),
        defender(),
        &mv,
        &FieldConditions::default(),
    );
    assert_monotone(&sequential);
    assert!(sequential.max.abs_diff(chained.max) <= 1);
}

#[test]
fn test_final_stage_rounding() {
    let data = dex();
    let attacker = || CombatantConfig::new("garchomp").item("lifeorb");
    let defender = || CombatantConfig::new("heatran");
    let mv = MoveInput::from_data(&data, "earthquake").unwrap();

    let truncated = calc(&data, attacker(), defender(), &mv, &FieldConditions::default());
    let rounded = calc_with(
        &data,
        ruleset(|r| r.rounding = StageRounding::Pokeround),
        attacker(),
        defender(),
        &mv,
        &FieldConditions::default(),
    );

    assert_eq!(fired(&truncated, "lifeorb").map(|m| m.stage), Some(Stage::Final));
    assert_eq!(truncated.breakdown.base_damage, rounded.breakdown.base_damage);
    let base = truncated.breakdown.base_damage;
    let effective = base * 6144 / 4096 * truncated.breakdown.effectiveness_raw as u32 / 4;
    assert_eq!(truncated.max as u32, effective * 5324 / 4096);
    assert!(rounded.max >= truncated.max);
    assert!(rounded.max - truncated.max <= 1);
}

#[test]
fn test_config_validation_and_serde() {
    let data = dex();
    assert_matches!(
        Calculator::with_config(&data, CalcConfig::default().with_ko_hit_bound(17)),
        Err(CalcError::InvalidConfig { field: "ko_hit_bound", .. })
    );

    let config: CalcConfig = serde_json::from_str(
        r#"{"ko_hit_bound": 3, "ruleset": {"crit": "classic", "roll_order": "random_first"}}"#,
    )
    .unwrap();
    assert_eq!(config.ko_hit_bound, 3);
    assert_eq!(config.ruleset.crit, CritRule::Classic);
    assert_eq!(config.ruleset.roll_order, RollOrder::RandomFirst);
    assert_eq!(config.ruleset.format, BattleFormat::Singles);
    assert!(Calculator::with_config(&data, config).is_ok());
}
