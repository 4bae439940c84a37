//! Natures and the stats they touch.

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Stat index for nature-affected stats (HP excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BattleStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
}

impl BattleStat {
    pub const ALL: [BattleStat; 5] = [
        BattleStat::Atk,
        BattleStat::Def,
        BattleStat::SpA,
        BattleStat::SpD,
        BattleStat::Spe,
    ];
}

/// Natures laid out on a 5x5 grid: `id = plus * 5 + minus`.
/// The diagonal holds the five neutral natures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy = 0,
    Lonely = 1,
    Adamant = 2,
    Naughty = 3,
    Brave = 4,
    Bold = 5,
    Docile = 6,
    Impish = 7,
    Lax = 8,
    Relaxed = 9,
    Modest = 10,
    Mild = 11,
    Bashful = 12,
    Rash = 13,
    Quiet = 14,
    Calm = 15,
    Gentle = 16,
    Careful = 17,
    Quirky = 18,
    Sassy = 19,
    Timid = 20,
    Hasty = 21,
    Jolly = 22,
    Naive = 23,
    Serious = 24,
}

static NATURE_LOOKUP: phf::Map<&'static str, NatureId> = phf_map! {
    "hardy" => NatureId::Hardy,
    "lonely" => NatureId::Lonely,
    "adamant" => NatureId::Adamant,
    "naughty" => NatureId::Naughty,
    "brave" => NatureId::Brave,
    "bold" => NatureId::Bold,
    "docile" => NatureId::Docile,
    "impish" => NatureId::Impish,
    "lax" => NatureId::Lax,
    "relaxed" => NatureId::Relaxed,
    "modest" => NatureId::Modest,
    "mild" => NatureId::Mild,
    "bashful" => NatureId::Bashful,
    "rash" => NatureId::Rash,
    "quiet" => NatureId::Quiet,
    "calm" => NatureId::Calm,
    "gentle" => NatureId::Gentle,
    "careful" => NatureId::Careful,
    "quirky" => NatureId::Quirky,
    "sassy" => NatureId::Sassy,
    "timid" => NatureId::Timid,
    "hasty" => NatureId::Hasty,
    "jolly" => NatureId::Jolly,
    "naive" => NatureId::Naive,
    "serious" => NatureId::Serious,
};

impl NatureId {
    /// Parse nature from a canonical id (case-insensitive).
    pub fn from_id(id: &str) -> Option<Self> {
        NATURE_LOOKUP.get(crate::data::to_id(id).as_str()).copied()
    }

    /// Stat multiplier in tenths: 9 (-10%), 10 (neutral), 11 (+10%).
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;
        let stat_idx = stat as u8;

        if plus == minus {
            10
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }
}
