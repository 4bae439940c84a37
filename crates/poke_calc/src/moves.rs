//! Move inputs.
//!
//! A [`MoveInput`] is the move as used in one calculation: the game-data
//! entry plus any per-call overrides. [`MoveRequest`] is its serde form.

use serde::{Deserialize, Serialize};

use crate::core_data::{MoveCategory, MoveFlags};
use crate::damage::Modifier;
use crate::data::{to_id, GameData};
use crate::error::{CalcError, IdKind, Result};
use crate::types::Type;

/// One move, ready to calculate. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveInput {
    pub id: String,
    pub name: String,
    pub power: u16,
    pub move_type: Type,
    pub category: MoveCategory,
    pub accuracy: Option<u8>,
    pub flags: MoveFlags,
    pub is_crit: bool,
    /// Extra base-power multiplier supplied by the caller.
    pub power_modifier: Option<Modifier>,
    /// Power was set by the caller; variable-power formulas are skipped.
    pub power_overridden: bool,
}

impl MoveInput {
    /// Look a move up in the game data.
    pub fn from_data(data: &GameData, id: &str) -> Result<Self> {
        let mv = data.move_data(id)?;
        Ok(Self {
            id: to_id(id),
            name: mv.name.clone(),
            power: mv.power,
            move_type: mv.move_type,
            category: mv.category,
            accuracy: mv.accuracy,
            flags: mv.flags,
            is_crit: false,
            power_modifier: None,
            power_overridden: false,
        })
    }

    /// A move that is not in the game data.
    pub fn custom(name: &str, move_type: Type, category: MoveCategory, power: u16) -> Self {
        Self {
            id: to_id(name),
            name: name.to_string(),
            power,
            move_type,
            category,
            accuracy: None,
            flags: MoveFlags::empty(),
            is_crit: false,
            power_modifier: None,
            power_overridden: true,
        }
    }

    pub fn with_power(mut self, power: u16) -> Self {
        self.power = power;
        self.power_overridden = true;
        self
    }

    pub fn with_type(mut self, move_type: Type) -> Self {
        self.move_type = move_type;
        self
    }

    pub fn with_category(mut self, category: MoveCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_accuracy(mut self, accuracy: Option<u8>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_power_modifier(mut self, modifier: Modifier) -> Self {
        self.power_modifier = Some(modifier);
        self
    }

    pub fn crit(mut self, is_crit: bool) -> Self {
        self.is_crit = is_crit;
        self
    }

    pub fn is(&self, id: &str) -> bool {
        self.id == id
    }

    pub fn is_physical(&self) -> bool {
        self.category == MoveCategory::Physical
    }
}

/// A move reference with optional overrides, as it appears in requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveRequest {
    pub id: String,
    pub power: Option<u16>,
    pub accuracy: Option<u8>,
    #[serde(rename = "type")]
    pub move_type: Option<String>,
    pub category: Option<MoveCategory>,
    pub crit: bool,
    /// Decimal base-power multiplier, e.g. `1.5`.
    pub power_modifier: Option<f64>,
}

impl MoveRequest {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn resolve(&self, data: &GameData) -> Result<MoveInput> {
        let mut mv = MoveInput::from_data(data, &self.id)?;
        if let Some(power) = self.power {
            mv = mv.with_power(power);
        }
        if self.accuracy.is_some() {
            mv = mv.with_accuracy(self.accuracy);
        }
        if let Some(name) = &self.move_type {
            let t = Type::from_id(name).ok_or_else(|| CalcError::unknown(IdKind::Type, name))?;
            mv = mv.with_type(t);
        }
        if let Some(category) = self.category {
            mv = mv.with_category(category);
        }
        if let Some(value) = self.power_modifier {
            let modifier = Modifier::from_f64(value).ok_or_else(|| {
                CalcError::stat_input("power_modifier", value, "must be a positive multiplier below 16")
            })?;
            mv = mv.with_power_modifier(modifier);
        }
        Ok(mv.crit(self.crit))
    }
}
