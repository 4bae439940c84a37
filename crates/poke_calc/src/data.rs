//! Read-only game-data table.
//!
//! `GameData` is built once (from JSON or with [`GameDataBuilder`]) and then
//! only borrowed. Lookups are keyed by canonical identifiers and surface
//! [`CalcError::UnknownIdentifier`] instead of defaulting.
//!
//! # JSON layout
//!
//! ```json
//! {
//!   "species":   { "garchomp": { "name": "Garchomp", "types": ["dragon", "ground"],
//!                                "base_stats": { "hp": 108, "atk": 130, ... } } },
//!   "moves":     { "earthquake": { "name": "Earthquake", "type": "ground",
//!                                  "category": "physical", "power": 100 } },
//!   "abilities": { "roughskin": { "name": "Rough Skin" } },
//!   "items":     { "charcoal": { "name": "Charcoal", "boost_type": "fire" } },
//!   "type_chart": { "ghost": { "steel": 1.0 } }
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::core_data::{AbilityData, ItemData, MoveData, SpeciesData};
use crate::error::{CalcError, DataError, IdKind, Result};
use crate::types::{Type, TypeChart};

/// Highest base stat a species may declare.
pub const MAX_BASE_STAT: u16 = 255;

/// Canonicalize an identifier: lowercase ASCII alphanumerics only.
///
/// `"Choice Band"`, `"choice-band"` and `"choiceband"` all map to `"choiceband"`.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DexFile {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    abilities: HashMap<String, AbilityData>,
    items: HashMap<String, ItemData>,
    type_chart: BTreeMap<Type, BTreeMap<Type, f64>>,
}

/// Immutable species/move/ability/item/type tables.
#[derive(Debug, Default)]
pub struct GameData {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    abilities: HashMap<String, AbilityData>,
    items: HashMap<String, ItemData>,
    chart: TypeChart,
}

impl GameData {
    pub fn builder() -> GameDataBuilder {
        GameDataBuilder::default()
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, DataError> {
        let file: DexFile = serde_json::from_str(json)?;
        Self::from_dex(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> std::result::Result<Self, DataError> {
        let file: DexFile = serde_json::from_reader(reader)?;
        Self::from_dex(file)
    }

    pub fn from_path(path: impl AsRef<Path>) -> std::result::Result<Self, DataError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_dex(file: DexFile) -> std::result::Result<Self, DataError> {
        let mut builder = GameDataBuilder::default();
        for (id, species) in file.species {
            builder = builder.species(&id, species);
        }
        for (id, data) in file.moves {
            builder = builder.move_data(&id, data);
        }
        for (id, data) in file.abilities {
            builder = builder.ability(&id, data);
        }
        for (id, data) in file.items {
            builder = builder.item(&id, data);
        }
        builder.type_chart = TypeChart::with_overrides(&file.type_chart)?;
        builder.build()
    }

    pub fn species(&self, id: &str) -> Result<&SpeciesData> {
        self.species
            .get(&to_id(id))
            .ok_or_else(|| CalcError::unknown(IdKind::Species, id))
    }

    pub fn move_data(&self, id: &str) -> Result<&MoveData> {
        self.moves
            .get(&to_id(id))
            .ok_or_else(|| CalcError::unknown(IdKind::Move, id))
    }

    pub fn ability(&self, id: &str) -> Result<&AbilityData> {
        self.abilities
            .get(&to_id(id))
            .ok_or_else(|| CalcError::unknown(IdKind::Ability, id))
    }

    pub fn item(&self, id: &str) -> Result<&ItemData> {
        self.items
            .get(&to_id(id))
            .ok_or_else(|| CalcError::unknown(IdKind::Item, id))
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }
}

/// Incremental construction of a [`GameData`] table.
///
/// Keys are canonicalized on insert. Validation runs once in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct GameDataBuilder {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    abilities: HashMap<String, AbilityData>,
    items: HashMap<String, ItemData>,
    type_chart: TypeChart,
}

impl GameDataBuilder {
    pub fn species(mut self, id: &str, data: SpeciesData) -> Self {
        self.species.insert(to_id(id), data);
        self
    }

    pub fn move_data(mut self, id: &str, data: MoveData) -> Self {
        self.moves.insert(to_id(id), data);
        self
    }

    pub fn ability(mut self, id: &str, data: AbilityData) -> Self {
        self.abilities.insert(to_id(id), data);
        self
    }

    pub fn item(mut self, id: &str, data: ItemData) -> Self {
        self.items.insert(to_id(id), data);
        self
    }

    pub fn type_chart(mut self, chart: TypeChart) -> Self {
        self.type_chart = chart;
        self
    }

    pub fn build(self) -> std::result::Result<GameData, DataError> {
        for (id, species) in &self.species {
            validate_species(id, species)?;
            for ability in &species.abilities {
                if !self.abilities.contains_key(&to_id(ability)) {
                    return Err(DataError::Invalid {
                        kind: IdKind::Species,
                        id: id.clone(),
                        reason: format!("lists unknown ability '{ability}'"),
                    });
                }
            }
        }

        Ok(GameData {
            species: self.species,
            moves: self.moves,
            abilities: self.abilities,
            items: self.items,
            chart: self.type_chart,
        })
    }
}

fn validate_species(id: &str, species: &SpeciesData) -> std::result::Result<(), DataError> {
    let invalid = |reason: &str| DataError::Invalid {
        kind: IdKind::Species,
        id: id.to_string(),
        reason: reason.to_string(),
    };

    match species.types.as_slice() {
        [_] => {}
        [a, b] if a != b => {}
        [_, _] => return Err(invalid("duplicate type")),
        _ => return Err(invalid("must have one or two types")),
    }
    if species.types.contains(&Type::Stellar) {
        return Err(invalid("stellar is not a species type"));
    }
    let base_stats = species.base_stats.to_array();
    if base_stats.contains(&0) {
        return Err(invalid("base stats must be positive"));
    }
    if base_stats.iter().any(|&stat| stat > MAX_BASE_STAT) {
        return Err(invalid("base stats must be at most 255"));
    }
    Ok(())
}
