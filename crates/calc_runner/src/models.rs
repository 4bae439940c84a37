use serde::Deserialize;

use poke_calc::{CombatantConfig, FieldConditions, MoveRequest};

/// A move given either as a bare id or as an object with overrides.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum MoveSpec {
    Id(String),
    Detailed(MoveRequest),
}

impl MoveSpec {
    pub fn to_request(&self) -> MoveRequest {
        match self {
            MoveSpec::Id(id) => MoveRequest::new(id),
            MoveSpec::Detailed(request) => request.clone(),
        }
    }
}

/// Request file contents shared by every subcommand.
///
/// `calc` and `analyze` read `move`; `compare` reads `moves`.
#[derive(Deserialize, Debug)]
pub struct CalcRequest {
    pub attacker: CombatantConfig,
    pub defender: CombatantConfig,
    #[serde(rename = "move")]
    pub mv: Option<MoveSpec>,
    #[serde(default)]
    pub moves: Vec<MoveSpec>,
    #[serde(default)]
    pub field: FieldConditions,
}
