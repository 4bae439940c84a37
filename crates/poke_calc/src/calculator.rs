//! The calculator handle: game data plus a validated configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalcConfig;
use crate::damage::compare::compare_moves;
use crate::damage::{calculate_damage, ko, DamageResult};
use crate::data::GameData;
use crate::error::Result;
use crate::field::FieldConditions;
use crate::moves::MoveInput;
use crate::state::CombatantState;

/// Extended detail for one move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageAnalysis {
    pub result: DamageResult,
    /// Damage value to number of rolls producing it.
    pub distribution: BTreeMap<u16, u8>,
    pub min_percent: f64,
    pub max_percent: f64,
    pub average_percent: f64,
    /// KO chance within N hits for every N up to the hit bound.
    pub ko_table: BTreeMap<u8, f64>,
}

/// Entry points over one game-data table.
///
/// Holds only shared borrows, so a calculator can be used from many threads
/// at once.
#[derive(Clone, Copy, Debug)]
pub struct Calculator<'d> {
    data: &'d GameData,
    config: CalcConfig,
}

impl<'d> Calculator<'d> {
    pub fn new(data: &'d GameData) -> Self {
        Self {
            data,
            config: CalcConfig::default(),
        }
    }

    /// Fails with `InvalidConfig` when the configuration is out of range.
    pub fn with_config(data: &'d GameData, config: CalcConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { data, config })
    }

    pub fn data(&self) -> &'d GameData {
        self.data
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn calculate(
        &self,
        attacker: &CombatantState,
        defender: &CombatantState,
        mv: &MoveInput,
        field: &FieldConditions,
    ) -> Result<DamageResult> {
        calculate_damage(self.data, &self.config, attacker, defender, mv, field)
    }

    /// Every move against the same target, best first.
    pub fn compare(
        &self,
        attacker: &CombatantState,
        defender: &CombatantState,
        moves: &[MoveInput],
        field: &FieldConditions,
    ) -> Result<Vec<DamageResult>> {
        compare_moves(self.data, &self.config, attacker, defender, moves, field)
    }

    pub fn analyze(
        &self,
        attacker: &CombatantState,
        defender: &CombatantState,
        mv: &MoveInput,
        field: &FieldConditions,
    ) -> Result<DamageAnalysis> {
        let result = self.calculate(attacker, defender, mv, field)?;
        debug!(mv = %result.move_id, "analyzing distribution");

        let ko_table = ko::ko_table(&result.rolls, result.defender_hp, self.config.ko_hit_bound);
        let average_percent = result.average * 100.0 / result.defender_max_hp as f64;
        Ok(DamageAnalysis {
            distribution: result.rolls.counts(),
            min_percent: result.min_percent,
            max_percent: result.max_percent,
            average_percent,
            ko_table,
            result,
        })
    }
}
