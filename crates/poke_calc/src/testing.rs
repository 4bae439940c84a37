//! Shared fixtures for unit tests.

use crate::data::GameData;
use crate::entities::CombatantConfig;
use crate::state::CombatantState;

const DEX: &str = include_str!("../../../data/dex.json");

pub fn dex() -> GameData {
    GameData::from_json_str(DEX).unwrap()
}

pub fn combatant(data: &GameData, config: CombatantConfig) -> CombatantState {
    config.build(data).unwrap()
}
