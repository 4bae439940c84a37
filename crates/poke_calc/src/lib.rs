//! poke_calc - Damage resolution engine for Pokémon battles
//!
//! Reproduces the game's damage arithmetic, truncation quirks included:
//! a 16-roll damage distribution, KO analysis and move comparison for one
//! attacker, one defender and the field between them.
//!
//! ```ignore
//! use poke_calc::{CombatantConfig, FieldConditions, GameData, MoveInput};
//!
//! let data = GameData::from_path("data/dex.json")?;
//! let attacker = CombatantConfig::new("garchomp").nature("jolly").build(&data)?;
//! let defender = CombatantConfig::new("togekiss").build(&data)?;
//! let mv = MoveInput::from_data(&data, "earthquake")?;
//!
//! let result = poke_calc::calculate(&data, &attacker, &defender, &mv, &FieldConditions::default())?;
//! ```

/// Type definitions and type chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Species, move, ability and item records
pub mod core_data;

/// Read-only game-data table
pub mod data;

/// Ability damage rules
pub mod abilities;

/// Held-item damage rules
pub mod items;

/// Move input and per-call overrides
pub mod moves;

/// Combatant state
pub mod state;

/// Combatant blueprints and the stat resolver
pub mod entities;

pub mod field;

pub mod config;

pub mod error;

/// Damage pipeline, KO analysis and comparison
pub mod damage;

pub mod calculator;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use calculator::{Calculator, DamageAnalysis};
pub use config::{
    BattleFormat, CalcConfig, CritRule, FinalModifierOrder, RollOrder, Ruleset, StageRounding,
};
pub use core_data::{MoveCategory, MoveFlags, Stats};
pub use damage::{
    AppliedModifier, DamageBreakdown, DamageDistribution, DamageResult, Modifier, ModifierSource,
    Stage,
};
pub use data::{to_id, GameData, GameDataBuilder};
pub use entities::CombatantConfig;
pub use error::{CalcError, DataError, IdKind, Result};
pub use field::{FieldConditions, Terrain, Weather};
pub use moves::{MoveInput, MoveRequest};
pub use natures::{BattleStat, NatureId};
pub use state::{CombatantState, Gender, StatStages, Status};
pub use types::{Type, TypeChart};

/// [`Calculator::calculate`] with the default configuration.
pub fn calculate(
    data: &GameData,
    attacker: &CombatantState,
    defender: &CombatantState,
    mv: &MoveInput,
    field: &FieldConditions,
) -> Result<DamageResult> {
    Calculator::new(data).calculate(attacker, defender, mv, field)
}

/// [`Calculator::compare`] with the default configuration.
pub fn compare(
    data: &GameData,
    attacker: &CombatantState,
    defender: &CombatantState,
    moves: &[MoveInput],
    field: &FieldConditions,
) -> Result<Vec<DamageResult>> {
    Calculator::new(data).compare(attacker, defender, moves, field)
}

/// [`Calculator::analyze`] with the default configuration.
pub fn analyze(
    data: &GameData,
    attacker: &CombatantState,
    defender: &CombatantState,
    mv: &MoveInput,
    field: &FieldConditions,
) -> Result<DamageAnalysis> {
    Calculator::new(data).analyze(attacker, defender, mv, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        assert_eq!(Type::from_id("fire"), Some(Type::Fire));
        assert_eq!(Type::from_id("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_id("invalid"), None);
    }

    #[test]
    fn test_nature_modifiers() {
        // Adamant: +Atk, -SpA
        let adamant = NatureId::from_id("adamant").unwrap();
        assert_eq!(adamant.stat_modifier(BattleStat::Atk), 11);
        assert_eq!(adamant.stat_modifier(BattleStat::SpA), 9);
        assert_eq!(adamant.stat_modifier(BattleStat::Spe), 10);
        assert!(!adamant.is_neutral());

        // Hardy: neutral
        let hardy = NatureId::from_id("hardy").unwrap();
        assert!(hardy.is_neutral());
    }

    #[test]
    fn test_calculator_rejects_bad_config() {
        let data = testing::dex();
        assert!(Calculator::with_config(&data, CalcConfig::default().with_ko_hit_bound(0)).is_err());
        assert!(Calculator::with_config(&data, CalcConfig::default()).is_ok());
    }

    #[test]
    fn test_free_functions_match_calculator() {
        let data = testing::dex();
        let attacker = CombatantConfig::new("garchomp").build(&data).unwrap();
        let defender = CombatantConfig::new("heatran").build(&data).unwrap();
        let mv = MoveInput::from_data(&data, "earthquake").unwrap();
        let field = FieldConditions::default();

        let free = calculate(&data, &attacker, &defender, &mv, &field).unwrap();
        let method = Calculator::new(&data)
            .calculate(&attacker, &defender, &mv, &field)
            .unwrap();
        assert_eq!(free, method);
    }
}
