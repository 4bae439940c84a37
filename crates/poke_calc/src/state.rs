//! Combatant state for a single calculation.
//!
//! A [`CombatantState`] can only be produced by
//! [`CombatantConfig::build`](crate::entities::CombatantConfig::build), which
//! validates every invariant up front. After that it is read-only.

use serde::{Deserialize, Serialize};

use crate::core_data::Stats;
use crate::natures::{BattleStat, NatureId};
use crate::types::Type;

/// Major status condition. At most one applies at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    None,
    Burn,
    Paralysis,
    Poison,
    Freeze,
    Sleep,
}

impl Status {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Status::None)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Genderless,
}

/// Combat stages, each in -6..=6.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
}

impl StatStages {
    pub const fn get(&self, stat: BattleStat) -> i8 {
        match stat {
            BattleStat::Atk => self.atk,
            BattleStat::Def => self.def,
            BattleStat::SpA => self.spa,
            BattleStat::SpD => self.spd,
            BattleStat::Spe => self.spe,
        }
    }

    pub fn with(mut self, stat: BattleStat, stage: i8) -> Self {
        match stat {
            BattleStat::Atk => self.atk = stage,
            BattleStat::Def => self.def = stage,
            BattleStat::SpA => self.spa = stage,
            BattleStat::SpD => self.spd = stage,
            BattleStat::Spe => self.spe = stage,
        }
        self
    }
}

/// A validated combatant.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatantState {
    pub(crate) species: String,
    pub(crate) level: u8,
    pub(crate) base_stats: Stats,
    pub(crate) evs: Stats,
    pub(crate) ivs: Stats,
    pub(crate) nature: NatureId,
    pub(crate) stats: Stats,
    pub(crate) current_hp: u16,
    pub(crate) ability: Option<String>,
    pub(crate) item: Option<String>,
    /// Second slot repeats the first for single-typed combatants.
    pub(crate) types: [Type; 2],
    pub(crate) tera_type: Option<Type>,
    pub(crate) status: Status,
    pub(crate) stages: StatStages,
    pub(crate) gender: Gender,
    pub(crate) fainted_allies: u8,
    pub(crate) moves_last: bool,
    pub(crate) flash_fire_active: bool,
    pub(crate) paradox_stat: Option<BattleStat>,
    pub(crate) weight_kg: f32,
    pub(crate) nfe: bool,
}

impl CombatantState {
    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn base_stats(&self) -> Stats {
        self.base_stats
    }

    pub fn evs(&self) -> Stats {
        self.evs
    }

    pub fn ivs(&self) -> Stats {
        self.ivs
    }

    pub fn nature(&self) -> NatureId {
        self.nature
    }

    /// Real (pre-stage) stats.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn ability(&self) -> Option<&str> {
        self.ability.as_deref()
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn stages(&self) -> StatStages {
        self.stages
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn tera_type(&self) -> Option<Type> {
        self.tera_type
    }

    /// Original (pre-Terastal) types.
    pub fn types(&self) -> &[Type] {
        if self.types[0] == self.types[1] {
            &self.types[..1]
        } else {
            &self.types
        }
    }

    /// Types used for matchups: the tera type when Terastallized
    /// (Stellar keeps the original types).
    pub fn defensive_types(&self) -> &[Type] {
        match &self.tera_type {
            Some(Type::Stellar) | None => self.types(),
            Some(tera) => std::slice::from_ref(tera),
        }
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.defensive_types().contains(&t)
    }

    pub fn is_full_hp(&self) -> bool {
        self.current_hp == self.stats.hp
    }

    /// `current / max <= num / den`, in integers.
    pub fn hp_at_most(&self, num: u32, den: u32) -> bool {
        self.current_hp as u32 * den <= self.stats.hp as u32 * num
    }

    pub fn has_ability(&self, id: &str) -> bool {
        self.ability.as_deref() == Some(id)
    }

    pub fn has_item(&self, id: &str) -> bool {
        self.item.as_deref() == Some(id)
    }

    /// Stat boosted by Protosynthesis / Quark Drive: the explicit choice, or
    /// the highest real stat (ties resolved Atk > Def > SpA > SpD > Spe).
    pub fn paradox_stat(&self) -> BattleStat {
        if let Some(stat) = self.paradox_stat {
            return stat;
        }
        let mut best = BattleStat::Atk;
        for stat in BattleStat::ALL {
            if self.stats.get(stat) > self.stats.get(best) {
                best = stat;
            }
        }
        best
    }
}
