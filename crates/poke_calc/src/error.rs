//! Error types surfaced by the calculator.
//!
//! Every failure is detected at the boundary of the component that owns the
//! invariant and carries the offending field and value. Nothing is retried:
//! the engine is deterministic, so the same inputs always fail the same way.

use std::fmt;

/// Which table an identifier was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdKind {
    Species,
    Move,
    Ability,
    Item,
    Type,
    Nature,
}

impl IdKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            IdKind::Species => "species",
            IdKind::Move => "move",
            IdKind::Ability => "ability",
            IdKind::Item => "item",
            IdKind::Type => "type",
            IdKind::Nature => "nature",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by damage calculation entry points.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// Effort values, individual values or level outside their legal ranges.
    #[error("invalid stat input: {field} = {value} ({reason})")]
    InvalidStatInput {
        field: String,
        value: String,
        reason: String,
    },

    /// An identifier that is not present in the game data.
    #[error("unknown {kind} '{id}'")]
    UnknownIdentifier { kind: IdKind, id: String },

    /// A combatant or field state that cannot occur in battle.
    #[error("invalid battle state: {reason}")]
    InvalidBattleState { reason: String },

    /// A rule combination the engine does not model.
    #[error("unsupported mechanic: {mechanic}")]
    UnsupportedMechanic { mechanic: String },

    /// A calculator configuration value outside its allowed range.
    #[error("invalid config: {field} ({reason})")]
    InvalidConfig { field: &'static str, reason: String },

    #[error(transparent)]
    Data(#[from] DataError),
}

impl CalcError {
    pub(crate) fn stat_input(
        field: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidStatInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(kind: IdKind, id: impl Into<String>) -> Self {
        CalcError::UnknownIdentifier {
            kind,
            id: id.into(),
        }
    }

    pub(crate) fn battle_state(reason: impl Into<String>) -> Self {
        CalcError::InvalidBattleState {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(mechanic: impl Into<String>) -> Self {
        CalcError::UnsupportedMechanic {
            mechanic: mechanic.into(),
        }
    }
}

/// Errors raised while loading or validating a game-data table.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read game data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse game data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {kind} entry '{id}': {reason}")]
    Invalid {
        kind: IdKind,
        id: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;
