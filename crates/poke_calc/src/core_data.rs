use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::natures::BattleStat;
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MoveFlags: u16 {
        const CONTACT = 1 << 0;
        const PUNCH = 1 << 1;
        const BITE = 1 << 2;
        const PULSE = 1 << 3;
        const SLICING = 1 << 4;
        const SOUND = 1 << 5;
        const WIND = 1 << 6;
        /// Has a secondary effect (Sheer Force).
        const SECONDARY = 1 << 7;
        const RECOIL = 1 << 8;
        const SPREAD = 1 << 9;
    }
}

/// Six-stat block: HP, Atk, Def, SpA, SpD, Spe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl Stats {
    pub const fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    pub const fn splat(value: u16) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub const fn get(&self, stat: BattleStat) -> u16 {
        match stat {
            BattleStat::Atk => self.atk,
            BattleStat::Def => self.def,
            BattleStat::SpA => self.spa,
            BattleStat::SpD => self.spd,
            BattleStat::Spe => self.spe,
        }
    }

    /// Values in `[hp, atk, def, spa, spd, spe]` order.
    pub const fn to_array(self) -> [u16; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }

    pub fn total(&self) -> u32 {
        self.to_array().iter().map(|&v| v as u32).sum()
    }
}

impl From<[u16; 6]> for Stats {
    fn from(v: [u16; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

/// Field names in `Stats` order, used for error context.
pub const STAT_NAMES: [&str; 6] = ["hp", "atk", "def", "spa", "spd", "spe"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: Stats,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub weight_kg: f32,
    /// Not fully evolved (Eviolite).
    #[serde(default)]
    pub nfe: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: u16,
    #[serde(default)]
    pub accuracy: Option<u8>,
    #[serde(default)]
    pub flags: MoveFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityData {
    pub name: String,
    /// The ability changes damage and must have a registered rule.
    #[serde(default)]
    pub damage_effect: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub name: String,
    #[serde(default)]
    pub damage_effect: bool,
    /// Type-boosting item (1.2x power for this type).
    #[serde(default)]
    pub boost_type: Option<Type>,
    /// Resist berry (halves a super-effective hit of this type).
    #[serde(default)]
    pub resist_type: Option<Type>,
}
