//! Damage calculation context.
//!
//! The `DamageContext` holds everything a rule may inspect for a single
//! calculation: both combatants, the move, the field and the resolved
//! ability/item rules. It is built once and read by every stage.

use crate::abilities::{self, ActiveAbility};
use crate::config::Ruleset;
use crate::core_data::{MoveCategory, MoveFlags};
use crate::data::GameData;
use crate::error::Result;
use crate::field::{FieldConditions, Terrain, Weather};
use crate::items::{self, HeldItem};
use crate::moves::MoveInput;
use crate::natures::BattleStat;
use crate::state::CombatantState;
use crate::types::{Type, NEUTRAL};

use super::special_moves;

/// Read-only view of one calculation.
#[derive(Clone, Copy, Debug)]
pub struct DamageContext<'a> {
    pub data: &'a GameData,
    pub ruleset: Ruleset,

    // ========================================================================
    // Participants
    // ========================================================================
    pub attacker: &'a CombatantState,
    pub defender: &'a CombatantState,
    pub field: &'a FieldConditions,

    // ========================================================================
    // Move Information
    // ========================================================================
    pub mv: &'a MoveInput,

    /// Move type after Weather Ball / Tera Blast / -ate abilities.
    pub move_type: Type,

    /// An ability changed the move's type (-ate abilities, Normalize).
    pub type_changed: bool,

    /// Effective category (Tera Blast can turn physical).
    pub category: MoveCategory,

    /// Base power after variable-power formulas, before the power chain.
    pub base_power: u16,

    pub is_crit: bool,

    // ========================================================================
    // Field
    // ========================================================================
    /// Weather after Cloud Nine / Air Lock.
    pub weather: Weather,
    pub attacker_grounded: bool,
    pub defender_grounded: bool,

    /// Type effectiveness (4 = 1x, 8 = 2x, etc.)
    pub effectiveness: u8,

    // ========================================================================
    // Rules
    // ========================================================================
    pub attacker_ability: Option<ActiveAbility<'a>>,
    /// `None` when suppressed by Mold Breaker and friends.
    pub defender_ability: Option<ActiveAbility<'a>>,
    /// `None` when nothing is held or Magic Room is up.
    pub attacker_item: Option<HeldItem<'a>>,
    pub defender_item: Option<HeldItem<'a>>,
}

impl<'a> DamageContext<'a> {
    /// Resolve rules, type, category and base power for one calculation.
    ///
    /// Fails with `UnsupportedMechanic` when an ability or item declares a
    /// damage effect that has no registered rule.
    pub fn new(
        data: &'a GameData,
        ruleset: Ruleset,
        attacker: &'a CombatantState,
        defender: &'a CombatantState,
        mv: &'a MoveInput,
        field: &'a FieldConditions,
    ) -> Result<Self> {
        let attacker_ability = abilities::lookup(data, attacker.ability())?;
        let defender_raw = abilities::lookup(data, defender.ability())?;

        let weather = if [attacker_ability, defender_raw]
            .iter()
            .flatten()
            .any(|a| a.hooks.suppresses_weather)
        {
            Weather::None
        } else {
            field.weather
        };

        let defender_ability = match attacker_ability {
            Some(a) if a.hooks.ignores_target_ability => {
                defender_raw.filter(|d| d.hooks.unbreakable)
            }
            _ => defender_raw,
        };

        let (attacker_item, defender_item) = if field.magic_room {
            (None, None)
        } else {
            (
                items::lookup(data, attacker.item())?,
                items::lookup(data, defender.item())?,
            )
        };

        let category = special_moves::category(mv, attacker);
        let (move_type, type_changed) = match special_moves::move_type(mv, attacker, weather) {
            Some(t) => (t, false),
            None => match attacker_ability
                .and_then(|a| a.hooks.on_modify_type)
                .and_then(|modify| modify(mv.move_type))
            {
                Some(t) => (t, true),
                None => (mv.move_type, false),
            },
        };

        let is_crit = mv.is_crit && !defender_ability.is_some_and(|a| a.hooks.prevents_crit);

        let mut ctx = Self {
            data,
            ruleset,
            attacker,
            defender,
            field,
            mv,
            move_type,
            type_changed,
            category,
            base_power: mv.power,
            is_crit,
            weather,
            attacker_grounded: is_grounded(attacker, attacker_ability, attacker_item, field),
            defender_grounded: is_grounded(defender, defender_ability, defender_item, field),
            effectiveness: NEUTRAL,
            attacker_ability,
            defender_ability,
            attacker_item,
            defender_item,
        };
        ctx.base_power = special_moves::base_power(&ctx);
        Ok(ctx)
    }

    #[inline]
    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        self.category == MoveCategory::Special
    }

    #[inline]
    pub fn has_flag(&self, flag: MoveFlags) -> bool {
        self.mv.flags.contains(flag)
    }

    #[inline]
    pub fn is_super_effective(&self) -> bool {
        self.effectiveness > NEUTRAL
    }

    #[inline]
    pub fn is_resisted(&self) -> bool {
        self.effectiveness > 0 && self.effectiveness < NEUTRAL
    }

    pub fn terrain(&self) -> Terrain {
        self.field.terrain
    }

    /// Stat the attack is calculated from.
    pub fn offensive_stat(&self) -> BattleStat {
        if self.mv.is("bodypress") {
            BattleStat::Def
        } else if self.is_physical() {
            BattleStat::Atk
        } else {
            BattleStat::SpA
        }
    }

    /// Stat the hit is resisted with (before Wonder Room).
    pub fn defensive_stat(&self) -> BattleStat {
        if self.is_physical() || special_moves::targets_physical_defense(self.mv) {
            BattleStat::Def
        } else {
            BattleStat::SpD
        }
    }

    pub fn attacker_has_ability(&self, id: &str) -> bool {
        self.attacker_ability.is_some_and(|a| a.id == id)
    }

    pub fn defender_has_ability(&self, id: &str) -> bool {
        self.defender_ability.is_some_and(|a| a.id == id)
    }

    /// Weight in kg after Heavy Metal / Light Metal.
    pub fn weight_of(&self, state: &CombatantState) -> f32 {
        let ability = if std::ptr::eq(state, self.attacker) {
            self.attacker_ability
        } else {
            self.defender_ability
        };
        match ability.and_then(|a| a.hooks.on_modify_weight) {
            Some(modify) => modify(state.weight_kg),
            None => state.weight_kg,
        }
    }
}

/// Gravity and Iron Ball ground everything; otherwise Flying types, Levitate
/// and Air Balloon float.
fn is_grounded(
    state: &CombatantState,
    ability: Option<ActiveAbility<'_>>,
    item: Option<HeldItem<'_>>,
    field: &FieldConditions,
) -> bool {
    if field.gravity || item.is_some_and(|i| i.hooks.grounds_holder) {
        return true;
    }
    !(state.has_type(Type::Flying)
        || ability.is_some_and(|a| a.hooks.levitates)
        || item.is_some_and(|i| i.hooks.levitates))
}
