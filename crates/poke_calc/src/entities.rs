//! Combatant blueprints and the stat resolver.
//!
//! `CombatantConfig` is a builder (and a serde record) describing a combatant
//! as the caller knows it. [`CombatantConfig::build`] resolves it against the
//! game data, validates every invariant and produces a [`CombatantState`].

use serde::{Deserialize, Serialize};

use crate::core_data::{Stats, STAT_NAMES};
use crate::data::{to_id, GameData};
use crate::error::{CalcError, IdKind, Result};
use crate::natures::{BattleStat, NatureId};
use crate::state::{CombatantState, Gender, StatStages, Status};
use crate::types::Type;

/// Default IVs (perfect)
pub const DEFAULT_IVS: Stats = Stats::splat(31);

/// Default EVs (none)
pub const DEFAULT_EVS: Stats = Stats::splat(0);

/// Default level
pub const DEFAULT_LEVEL: u8 = 50;

pub const MAX_EV: u16 = 252;
pub const MAX_EV_TOTAL: u32 = 508;
pub const MAX_IV: u16 = 31;
pub const MAX_STAGE: i8 = 6;
pub const MAX_FAINTED_ALLIES: u8 = 5;

/// Status conditions an ability rules out.
const STATUS_BLOCKING_ABILITIES: &[(&str, &[Status])] = &[
    ("waterveil", &[Status::Burn]),
    ("waterbubble", &[Status::Burn]),
    ("thermalexchange", &[Status::Burn]),
    ("limber", &[Status::Paralysis]),
    ("insomnia", &[Status::Sleep]),
    ("vitalspirit", &[Status::Sleep]),
    ("sweetveil", &[Status::Sleep]),
    ("immunity", &[Status::Poison]),
    ("pastelveil", &[Status::Poison]),
    ("magmaarmor", &[Status::Freeze]),
];

/// Abilities that rule out every major status.
const STATUS_FREE_ABILITIES: &[&str] = &["comatose", "purifyingsalt"];

/// Blueprint for a combatant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatantConfig {
    pub species: String,

    /// Level (1-100)
    pub level: u8,

    /// Effort values (0-252 each, at most 508 total)
    pub evs: Stats,

    /// Individual values (0-31)
    pub ivs: Stats,

    pub nature: String,

    /// Defaults to the species' first listed ability.
    pub ability: Option<String>,

    pub item: Option<String>,

    /// Override types (custom forms, type-changing effects).
    pub types: Option<Vec<String>>,

    /// Terastallized to this type.
    pub tera_type: Option<String>,

    pub status: Status,

    pub stages: StatStages,

    /// Defaults to max HP.
    pub current_hp: Option<u16>,

    /// Real stats supplied directly, skipping the stat formula.
    pub stats: Option<Stats>,

    pub gender: Gender,

    /// Fainted party members (Supreme Overlord).
    pub fainted_allies: u8,

    /// Moves after the target this turn (Analytic).
    pub moves_last: bool,

    /// Flash Fire has been triggered.
    pub flash_fire_active: bool,

    /// Protosynthesis / Quark Drive stat; defaults to the highest stat.
    pub paradox_stat: Option<BattleStat>,
}

impl Default for CombatantConfig {
    fn default() -> Self {
        Self {
            species: String::new(),
            level: DEFAULT_LEVEL,
            evs: DEFAULT_EVS,
            ivs: DEFAULT_IVS,
            nature: "hardy".to_string(),
            ability: None,
            item: None,
            types: None,
            tera_type: None,
            status: Status::None,
            stages: StatStages::default(),
            current_hp: None,
            stats: None,
            gender: Gender::Genderless,
            fainted_allies: 0,
            moves_last: false,
            flash_fire_active: false,
            paradox_stat: None,
        }
    }
}

impl CombatantConfig {
    pub fn new(species: &str) -> Self {
        Self {
            species: species.to_string(),
            ..Default::default()
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn evs(mut self, evs: impl Into<Stats>) -> Self {
        self.evs = evs.into();
        self
    }

    pub fn ivs(mut self, ivs: impl Into<Stats>) -> Self {
        self.ivs = ivs.into();
        self
    }

    pub fn nature(mut self, nature: &str) -> Self {
        self.nature = nature.to_string();
        self
    }

    pub fn ability(mut self, ability: &str) -> Self {
        self.ability = Some(ability.to_string());
        self
    }

    pub fn item(mut self, item: &str) -> Self {
        self.item = Some(item.to_string());
        self
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = Some(types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn tera(mut self, tera_type: &str) -> Self {
        self.tera_type = Some(tera_type.to_string());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn stage(mut self, stat: BattleStat, stage: i8) -> Self {
        self.stages = self.stages.with(stat, stage);
        self
    }

    pub fn current_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn stats(mut self, stats: impl Into<Stats>) -> Self {
        self.stats = Some(stats.into());
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn fainted_allies(mut self, count: u8) -> Self {
        self.fainted_allies = count;
        self
    }

    pub fn moves_last(mut self, moves_last: bool) -> Self {
        self.moves_last = moves_last;
        self
    }

    pub fn flash_fire_active(mut self, active: bool) -> Self {
        self.flash_fire_active = active;
        self
    }

    pub fn paradox_stat(mut self, stat: BattleStat) -> Self {
        self.paradox_stat = Some(stat);
        self
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve identifiers, validate and compute real stats.
    pub fn build(&self, data: &GameData) -> Result<CombatantState> {
        let species = data.species(&self.species)?;

        validate_level(self.level)?;
        validate_evs(&self.evs)?;
        validate_ivs(&self.ivs)?;

        let nature = NatureId::from_id(&self.nature)
            .ok_or_else(|| CalcError::unknown(IdKind::Nature, &self.nature))?;

        let ability = match self.ability.as_deref().or(species.abilities.first().map(String::as_str)) {
            Some(id) => {
                data.ability(id)?;
                Some(to_id(id))
            }
            None => None,
        };

        let item = match &self.item {
            Some(id) => {
                data.item(id)?;
                Some(to_id(id))
            }
            None => None,
        };

        let types = match &self.types {
            Some(names) => parse_types(names)?,
            None => species.types.clone(),
        };
        let types = match types.as_slice() {
            [single] => [*single, *single],
            [first, second] if first != second => [*first, *second],
            _ => {
                return Err(CalcError::battle_state(format!(
                    "{} must have one or two distinct types",
                    self.species
                )))
            }
        };

        let tera_type = self
            .tera_type
            .as_deref()
            .map(|t| Type::from_id(t).ok_or_else(|| CalcError::unknown(IdKind::Type, t)))
            .transpose()?;

        let stats = match self.stats {
            Some(stats) => {
                if stats.hp == 0 {
                    return Err(CalcError::stat_input("stats.hp", 0, "max HP must be positive"));
                }
                stats
            }
            None => calculate_stats(&species.base_stats, &self.ivs, &self.evs, self.level, nature),
        };

        let current_hp = self.current_hp.unwrap_or(stats.hp);
        if current_hp > stats.hp {
            return Err(CalcError::battle_state(format!(
                "{}: current HP {} exceeds max HP {}",
                self.species, current_hp, stats.hp
            )));
        }

        validate_stages(&self.stages)?;

        if self.fainted_allies > MAX_FAINTED_ALLIES {
            return Err(CalcError::battle_state(format!(
                "{} fainted allies (at most {})",
                self.fainted_allies, MAX_FAINTED_ALLIES
            )));
        }

        validate_status(self.status, ability.as_deref())?;

        Ok(CombatantState {
            species: to_id(&self.species),
            level: self.level,
            base_stats: species.base_stats,
            evs: self.evs,
            ivs: self.ivs,
            nature,
            stats,
            current_hp,
            ability,
            item,
            types,
            tera_type,
            status: self.status,
            stages: self.stages,
            gender: self.gender,
            fainted_allies: self.fainted_allies,
            moves_last: self.moves_last,
            flash_fire_active: self.flash_fire_active,
            paradox_stat: self.paradox_stat,
            weight_kg: species.weight_kg,
            nfe: species.nfe,
        })
    }
}

fn parse_types(names: &[String]) -> Result<Vec<Type>> {
    names
        .iter()
        .map(|n| Type::from_id(n).ok_or_else(|| CalcError::unknown(IdKind::Type, n)))
        .collect()
}

fn validate_level(level: u8) -> Result<()> {
    if !(1..=100).contains(&level) {
        return Err(CalcError::stat_input("level", level, "must be within 1..=100"));
    }
    Ok(())
}

fn validate_evs(evs: &Stats) -> Result<()> {
    for (name, value) in STAT_NAMES.iter().zip(evs.to_array()) {
        if value > MAX_EV {
            return Err(CalcError::stat_input(
                format!("evs.{name}"),
                value,
                format!("must be at most {MAX_EV}"),
            ));
        }
    }
    let total = evs.total();
    if total > MAX_EV_TOTAL {
        return Err(CalcError::stat_input(
            "evs",
            total,
            format!("total must be at most {MAX_EV_TOTAL}"),
        ));
    }
    Ok(())
}

fn validate_ivs(ivs: &Stats) -> Result<()> {
    for (name, value) in STAT_NAMES.iter().zip(ivs.to_array()) {
        if value > MAX_IV {
            return Err(CalcError::stat_input(
                format!("ivs.{name}"),
                value,
                format!("must be within 0..={MAX_IV}"),
            ));
        }
    }
    Ok(())
}

fn validate_stages(stages: &StatStages) -> Result<()> {
    for stat in BattleStat::ALL {
        let stage = stages.get(stat);
        if !(-MAX_STAGE..=MAX_STAGE).contains(&stage) {
            return Err(CalcError::battle_state(format!(
                "{stat:?} stage {stage} is outside -6..=6"
            )));
        }
    }
    Ok(())
}

fn validate_status(status: Status, ability: Option<&str>) -> Result<()> {
    let (Some(ability), false) = (ability, status.is_none()) else {
        return Ok(());
    };
    let blocked = STATUS_FREE_ABILITIES.contains(&ability)
        || STATUS_BLOCKING_ABILITIES
            .iter()
            .any(|(id, statuses)| *id == ability && statuses.contains(&status));
    if blocked {
        return Err(CalcError::battle_state(format!(
            "status {status:?} cannot coexist with ability '{ability}'"
        )));
    }
    Ok(())
}

// ============================================================================
// Stat formulas
// ============================================================================

/// Real stats from base stats, IVs, EVs, level and nature.
pub fn calculate_stats(base: &Stats, ivs: &Stats, evs: &Stats, level: u8, nature: NatureId) -> Stats {
    let level = level as u32;
    let stat = |stat: BattleStat, base: u16, iv: u16, ev: u16| {
        calculate_stat(base as u32, iv as u32, ev as u32, level, nature.stat_modifier(stat))
    };

    Stats {
        hp: calculate_hp(base.hp as u32, ivs.hp as u32, evs.hp as u32, level),
        atk: stat(BattleStat::Atk, base.atk, ivs.atk, evs.atk),
        def: stat(BattleStat::Def, base.def, ivs.def, evs.def),
        spa: stat(BattleStat::SpA, base.spa, ivs.spa, evs.spa),
        spd: stat(BattleStat::SpD, base.spd, ivs.spd, evs.spd),
        spe: stat(BattleStat::Spe, base.spe, ivs.spe, evs.spe),
    }
}

/// HP formula: `floor((2 * Base + IV + floor(EV/4)) * Level / 100) + Level + 10`
///
/// Saturates at `u16::MAX` for inputs outside the game's ranges.
pub fn calculate_hp(base: u32, iv: u32, ev: u32, level: u32) -> u16 {
    let scaled = stat_core(base, iv, ev, level);
    saturate(scaled + level as u64 + 10)
}

/// Other stats: `floor((floor((2 * Base + IV + floor(EV/4)) * Level / 100) + 5) * Nature)`
///
/// `nature_tenths` is 9, 10 or 11; dividing by ten after the multiply is the
/// same floor as multiplying by 0.9 / 1.1.
pub fn calculate_stat(base: u32, iv: u32, ev: u32, level: u32, nature_tenths: u8) -> u16 {
    let raw = stat_core(base, iv, ev, level) + 5;
    saturate(raw * nature_tenths as u64 / 10)
}

/// `floor((2 * Base + IV + floor(EV/4)) * Level / 100)`
fn stat_core(base: u32, iv: u32, ev: u32, level: u32) -> u64 {
    (2 * base as u64 + iv as u64 + ev as u64 / 4) * level as u64 / 100
}

fn saturate(value: u64) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
