//! Shared test utilities for damage calculation tests.

#![allow(dead_code)]

use poke_calc::damage::ROLL_COUNT;
use poke_calc::{
    CalcConfig, Calculator, CombatantConfig, CombatantState, DamageResult, FieldConditions,
    GameData, MoveInput,
};

/// The sample dex shipped at the workspace root.
pub fn dex() -> GameData {
    GameData::from_path(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/dex.json"))
        .expect("data/dex.json should load")
}

pub fn build(data: &GameData, config: CombatantConfig) -> CombatantState {
    config
        .build(data)
        .unwrap_or_else(|e| panic!("failed to build {}: {e}", config.species))
}

/// A level 50 combatant with fixed stats and an ability that never fires.
pub fn fixed(species: &str, stats: [u16; 6]) -> CombatantConfig {
    CombatantConfig::new(species)
        .level(50)
        .ability("pressure")
        .stats(stats)
}

pub fn calc(
    data: &GameData,
    attacker: CombatantConfig,
    defender: CombatantConfig,
    mv: &MoveInput,
    field: &FieldConditions,
) -> DamageResult {
    calc_with(data, CalcConfig::default(), attacker, defender, mv, field)
}

pub fn calc_with(
    data: &GameData,
    config: CalcConfig,
    attacker: CombatantConfig,
    defender: CombatantConfig,
    mv: &MoveInput,
    field: &FieldConditions,
) -> DamageResult {
    let attacker = build(data, attacker);
    let defender = build(data, defender);
    Calculator::with_config(data, config)
        .expect("valid config")
        .calculate(&attacker, &defender, mv, field)
        .unwrap_or_else(|e| panic!("{} failed: {e}", mv.id))
}

/// `floor(base * r / 100)` for every roll `r` in 85..=100.
pub fn rolls_from_base(base: u32) -> [u16; ROLL_COUNT] {
    std::array::from_fn(|i| (base * (85 + i as u32) / 100) as u16)
}

pub fn assert_monotone(result: &DamageResult) {
    let rolls = result.rolls.rolls();
    assert!(
        rolls.windows(2).all(|w| w[0] <= w[1]),
        "{}: rolls not monotone: {rolls:?}",
        result.move_id
    );
    assert_eq!(result.min, rolls[0]);
    assert_eq!(result.max, rolls[ROLL_COUNT - 1]);
}
