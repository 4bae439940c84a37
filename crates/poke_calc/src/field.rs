//! Weather, terrain and side conditions.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sand,
    Snow,
}

impl Weather {
    pub const fn as_str(self) -> &'static str {
        match self {
            Weather::None => "none",
            Weather::Sun => "sun",
            Weather::Rain => "rain",
            Weather::Sand => "sand",
            Weather::Snow => "snow",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Psychic,
    Misty,
}

impl Terrain {
    pub const fn as_str(self) -> &'static str {
        match self {
            Terrain::None => "none",
            Terrain::Electric => "electricterrain",
            Terrain::Grassy => "grassyterrain",
            Terrain::Psychic => "psychicterrain",
            Terrain::Misty => "mistyterrain",
        }
    }
}

/// Field state for a single calculation.
///
/// Screens and tailwind describe the defender's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConditions {
    pub weather: Weather,
    pub terrain: Terrain,
    pub trick_room: bool,
    /// Swaps Def and SpD for damage purposes.
    pub wonder_room: bool,
    /// Suppresses held items.
    pub magic_room: bool,
    /// Grounds every combatant.
    pub gravity: bool,
    pub reflect: bool,
    pub light_screen: bool,
    pub aurora_veil: bool,
    pub tailwind: bool,
}

impl FieldConditions {
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = terrain;
        self
    }

    pub fn with_reflect(mut self) -> Self {
        self.reflect = true;
        self
    }

    pub fn with_light_screen(mut self) -> Self {
        self.light_screen = true;
        self
    }

    pub fn with_aurora_veil(mut self) -> Self {
        self.aurora_veil = true;
        self
    }

    pub fn has_screen(&self, physical: bool) -> bool {
        self.aurora_veil || if physical { self.reflect } else { self.light_screen }
    }
}
