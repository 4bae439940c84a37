//! Elemental types and the type chart.
//!
//! Effectiveness is kept on a 4-based integer scale so the whole pipeline
//! stays in integer arithmetic:
//!
//! | raw | multiplier |
//! |-----|------------|
//! | 0   | 0x         |
//! | 1   | 0.25x      |
//! | 2   | 0.5x       |
//! | 4   | 1x         |
//! | 8   | 2x         |
//! | 16  | 4x         |

use std::collections::BTreeMap;

use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, IdKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
    /// Tera-only type. Never appears in the chart.
    Stellar = 18,
}

static TYPE_LOOKUP: phf::Map<&'static str, Type> = phf_map! {
    "normal" => Type::Normal,
    "fighting" => Type::Fighting,
    "flying" => Type::Flying,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "rock" => Type::Rock,
    "bug" => Type::Bug,
    "ghost" => Type::Ghost,
    "steel" => Type::Steel,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "grass" => Type::Grass,
    "electric" => Type::Electric,
    "psychic" => Type::Psychic,
    "ice" => Type::Ice,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "fairy" => Type::Fairy,
    "stellar" => Type::Stellar,
};

impl Type {
    /// Number of types in the chart (Stellar excluded).
    pub const COUNT: usize = 18;

    /// Look up a type by canonical id (`"fire"`, `"Fire"`).
    pub fn from_id(id: &str) -> Option<Self> {
        TYPE_LOOKUP.get(crate::data::to_id(id).as_str()).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fighting => "Fighting",
            Type::Flying => "Flying",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Rock => "Rock",
            Type::Bug => "Bug",
            Type::Ghost => "Ghost",
            Type::Steel => "Steel",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Grass => "Grass",
            Type::Electric => "Electric",
            Type::Psychic => "Psychic",
            Type::Ice => "Ice",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Fairy => "Fairy",
            Type::Stellar => "Stellar",
        }
    }

    #[inline]
    const fn chart_index(self) -> Option<usize> {
        match self {
            Type::Stellar => None,
            t => Some(t as usize),
        }
    }
}

/// Neutral effectiveness on the 4-based scale.
pub const NEUTRAL: u8 = 4;

const IM: u8 = 0;
const NV: u8 = 2;
const NE: u8 = 4;
const SE: u8 = 8;

/// Standard chart, `[attacking][defending]`, columns in `Type` order.
#[rustfmt::skip]
const STANDARD_CHART: [[u8; Type::COUNT]; Type::COUNT] = [
    // NOR FIG FLY POI GRO ROC BUG GHO STE FIR WAT GRA ELE PSY ICE DRA DAR FAI
    [NE, NE, NE, NE, NE, NV, NE, IM, NV, NE, NE, NE, NE, NE, NE, NE, NE, NE], // Normal
    [SE, NE, NV, NV, NE, SE, NV, IM, SE, NE, NE, NE, NE, NV, SE, NE, SE, NV], // Fighting
    [NE, SE, NE, NE, NE, NV, SE, NE, NV, NE, NE, SE, NV, NE, NE, NE, NE, NE], // Flying
    [NE, NE, NE, NV, NV, NV, NE, NV, IM, NE, NE, SE, NE, NE, NE, NE, NE, SE], // Poison
    [NE, NE, IM, SE, NE, SE, NV, NE, SE, SE, NE, NV, SE, NE, NE, NE, NE, NE], // Ground
    [NE, NV, SE, NE, NV, NE, SE, NE, NV, SE, NE, NE, NE, NE, SE, NE, NE, NE], // Rock
    [NE, NV, NV, NV, NE, NE, NE, NV, NV, NV, NE, SE, NE, SE, NE, NE, SE, NV], // Bug
    [IM, NE, NE, NE, NE, NE, NE, SE, NE, NE, NE, NE, NE, SE, NE, NE, NV, NE], // Ghost
    [NE, NE, NE, NE, NE, SE, NE, NE, NV, NV, NV, NE, NV, NE, SE, NE, NE, SE], // Steel
    [NE, NE, NE, NE, NE, NV, SE, NE, SE, NV, NV, SE, NE, NE, SE, NV, NE, NE], // Fire
    [NE, NE, NE, NE, SE, SE, NE, NE, NE, SE, NV, NV, NE, NE, NE, NV, NE, NE], // Water
    [NE, NE, NV, NV, SE, SE, NV, NE, NV, NV, SE, NV, NE, NE, NE, NV, NE, NE], // Grass
    [NE, NE, SE, NE, IM, NE, NE, NE, NE, NE, SE, NV, NV, NE, NE, NV, NE, NE], // Electric
    [NE, SE, NE, SE, NE, NE, NE, NE, NV, NE, NE, NE, NE, NV, NE, NE, IM, NE], // Psychic
    [NE, NE, SE, NE, SE, NE, NE, NE, NV, NV, NV, SE, NE, NE, NV, SE, NE, NE], // Ice
    [NE, NE, NE, NE, NE, NE, NE, NE, NV, NE, NE, NE, NE, NE, NE, SE, NE, IM], // Dragon
    [NE, NV, NE, NE, NE, NE, NE, SE, NE, NE, NE, NE, NE, SE, NE, NE, NV, NV], // Dark
    [NE, SE, NE, NV, NE, NE, NE, NE, NV, NV, NE, NE, NE, NE, NE, SE, SE, NE], // Fairy
];

/// Single-type matchup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeChart {
    cells: [[u8; Type::COUNT]; Type::COUNT],
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

impl TypeChart {
    pub const fn standard() -> Self {
        Self {
            cells: STANDARD_CHART,
        }
    }

    /// Apply per-matchup overrides (`attacking -> defending -> multiplier`) on
    /// top of the standard chart. Multipliers must be 0, 0.5, 1 or 2.
    pub fn with_overrides(
        overrides: &BTreeMap<Type, BTreeMap<Type, f64>>,
    ) -> Result<Self, DataError> {
        let mut chart = Self::standard();
        for (&attacking, row) in overrides {
            for (&defending, &multiplier) in row {
                let (Some(a), Some(d)) = (attacking.chart_index(), defending.chart_index()) else {
                    return Err(DataError::Invalid {
                        kind: IdKind::Type,
                        id: Type::Stellar.name().to_lowercase(),
                        reason: "stellar has no chart entry".to_string(),
                    });
                };
                chart.cells[a][d] = match multiplier {
                    m if m == 0.0 => IM,
                    m if m == 0.5 => NV,
                    m if m == 1.0 => NE,
                    m if m == 2.0 => SE,
                    m => {
                        return Err(DataError::Invalid {
                            kind: IdKind::Type,
                            id: format!("{}->{}", attacking.name(), defending.name()),
                            reason: format!("multiplier {m} is not one of 0, 0.5, 1, 2"),
                        })
                    }
                };
            }
        }
        Ok(chart)
    }

    /// Single-type lookup on the 4-based scale.
    ///
    /// Stellar on either side is neutral.
    #[inline]
    pub fn lookup(&self, attacking: Type, defending: Type) -> u8 {
        match (attacking.chart_index(), defending.chart_index()) {
            (Some(a), Some(d)) => self.cells[a][d],
            _ => NEUTRAL,
        }
    }

    /// Combined effectiveness against one or two defending types.
    /// Returns 0, 1, 2, 4, 8 or 16.
    pub fn effectiveness(&self, attacking: Type, defending: &[Type]) -> u8 {
        defending
            .iter()
            .fold(NEUTRAL, |acc, &t| acc * self.lookup(attacking, t) / NEUTRAL)
    }
}

/// Convert a 4-based effectiveness to its multiplier.
#[inline]
pub fn effectiveness_multiplier(raw: u8) -> f64 {
    raw as f64 / NEUTRAL as f64
}
