//! Calculator configuration.
//!
//! Ruleset knobs cover the places where community calculators disagree on
//! arithmetic: crit multiplier, where the random roll sits in the pipeline,
//! whether ability/item multipliers are combined before truncation, and how
//! the screen, weather and final stages round.

use serde::{Deserialize, Serialize};

use crate::damage::pipeline::{CartridgePipeline, DamagePipeline, DeferredRollPipeline};
use crate::damage::Modifier;
use crate::error::{CalcError, Result};

/// Default guaranteed-KO search cap.
pub const DEFAULT_KO_HIT_BOUND: u8 = 4;

/// Largest accepted KO search cap. 16^16 roll combinations still fit in `u128`.
pub const MAX_KO_HIT_BOUND: u8 = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritRule {
    /// 1.5x (Gen 6 onward).
    #[default]
    Modern,
    /// 2.0x.
    Classic,
}

impl CritRule {
    pub const fn modifier(self) -> Modifier {
        match self {
            CritRule::Modern => Modifier::ONE_POINT_FIVE,
            CritRule::Classic => Modifier::DOUBLE,
        }
    }
}

/// Where the random roll is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollOrder {
    /// Every stage is applied to the base value once; the roll is the final truncation.
    #[default]
    RandomLast,
    /// Weather and crit before the roll, everything else per roll.
    RandomFirst,
}

impl RollOrder {
    pub fn pipeline(self) -> &'static dyn DamagePipeline {
        match self {
            RollOrder::RandomLast => &DeferredRollPipeline,
            RollOrder::RandomFirst => &CartridgePipeline,
        }
    }
}

/// How ability and item multipliers on the final stage are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalModifierOrder {
    /// Chain all multipliers at 4096 scale and truncate once.
    #[default]
    Chained,
    /// Attacker ability, defender ability, attacker item, defender item; truncate after each.
    Sequential,
}

/// Rounding of the screen, weather and final ability/item stages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageRounding {
    /// Floor after the stage.
    #[default]
    Truncate,
    /// Halves round down, anything above rounds up (cartridge behaviour).
    Pokeround,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleFormat {
    #[default]
    Singles,
    Doubles,
}

impl BattleFormat {
    pub const fn screen_modifier(self) -> Modifier {
        match self {
            BattleFormat::Singles => Modifier::HALF,
            BattleFormat::Doubles => Modifier::SCREENS_DOUBLES,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub crit: CritRule,
    pub roll_order: RollOrder,
    pub final_modifiers: FinalModifierOrder,
    pub rounding: StageRounding,
    pub format: BattleFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Hits searched for a guaranteed KO before reporting none.
    pub ko_hit_bound: u8,
    pub ruleset: Ruleset,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            ko_hit_bound: DEFAULT_KO_HIT_BOUND,
            ruleset: Ruleset::default(),
        }
    }
}

impl CalcConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_KO_HIT_BOUND).contains(&self.ko_hit_bound) {
            return Err(CalcError::InvalidConfig {
                field: "ko_hit_bound",
                reason: format!(
                    "{} is outside 1..={}",
                    self.ko_hit_bound, MAX_KO_HIT_BOUND
                ),
            });
        }
        Ok(())
    }

    pub fn with_ko_hit_bound(mut self, bound: u8) -> Self {
        self.ko_hit_bound = bound;
        self
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }
}
