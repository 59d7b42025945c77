//! Catalog configuration.
//!
//! The zoo inventory is plain JSON:
//!
//! ```json
//! {
//!   "species": [
//!     { "id": "LEAO", "unit_size": 3, "biomes": ["savana"], "predator": true }
//!   ],
//!   "enclosures": [
//!     { "id": 5, "biomes": "savana", "capacity": 9,
//!       "occupants": [{ "species": "LEAO", "count": 1 }] }
//!   ]
//! }
//! ```
//!
//! Biomes accept either a list or a label such as `"savana e rio"`.
//! [`ZooConfig::default`] is the standard zoo.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::biome::{Biome, BiomeSet};
use crate::catalog::ZooCatalog;
use crate::enclosure::{Enclosure, EnclosureCatalog, EnclosureId, Occupant};
use crate::error::{CatalogError, ConfigError};
use crate::species::{Species, SpeciesCatalog, SpeciesId, MONKEY};

/// A species entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesConfig {
    /// Species id; case-insensitive.
    pub id: String,
    /// Space units per individual.
    pub unit_size: u32,
    /// Tolerated biomes.
    pub biomes: BiomeSet,
    /// Whether the species is a predator.
    #[serde(default)]
    pub predator: bool,
}

impl From<&Species> for SpeciesConfig {
    fn from(species: &Species) -> Self {
        Self {
            id: species.id().to_string(),
            unit_size: species.unit_size(),
            biomes: species.biomes().clone(),
            predator: species.is_predator(),
        }
    }
}

/// A group of residents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OccupantConfig {
    /// Species id.
    pub species: String,
    /// Number of individuals.
    pub count: u32,
}

/// An enclosure entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnclosureConfig {
    /// Positive enclosure number.
    pub id: u32,
    /// Satisfied biomes.
    pub biomes: BiomeSet,
    /// Total space units.
    pub capacity: u32,
    /// Current residents.
    #[serde(default)]
    pub occupants: Vec<OccupantConfig>,
}

/// The whole inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZooConfig {
    /// Species catalog entries.
    pub species: Vec<SpeciesConfig>,
    /// Enclosures in catalog order.
    pub enclosures: Vec<EnclosureConfig>,
}

impl Default for ZooConfig {
    fn default() -> Self {
        let enclosure = |id: u32, biomes: &[Biome], capacity: u32, occupants: &[(&str, u32)]| {
            EnclosureConfig {
                id,
                biomes: biomes.iter().cloned().collect(),
                capacity,
                occupants: occupants
                    .iter()
                    .map(|&(species, count)| OccupantConfig {
                        species: species.to_string(),
                        count,
                    })
                    .collect(),
            }
        };

        Self {
            species: SpeciesCatalog::standard()
                .iter()
                .map(|s| SpeciesConfig::from(&**s))
                .collect(),
            enclosures: vec![
                enclosure(1, &[Biome::savana()], 10, &[(MONKEY, 3)]),
                enclosure(2, &[Biome::floresta()], 5, &[]),
                enclosure(3, &[Biome::savana(), Biome::rio()], 7, &[("GAZELA", 1)]),
                enclosure(4, &[Biome::rio()], 8, &[]),
                enclosure(5, &[Biome::savana()], 9, &[("LEAO", 1)]),
            ],
        }
    }
}

impl ZooConfig {
    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            species = config.species.len(),
            enclosures = config.enclosures.len(),
            "loaded zoo config"
        );
        Ok(config)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the species catalog.
    pub fn species_catalog(&self) -> Result<SpeciesCatalog, CatalogError> {
        let species = self
            .species
            .iter()
            .map(|s| {
                Species::new(
                    SpeciesId::new(&s.id)?,
                    s.unit_size,
                    s.biomes.clone(),
                    s.predator,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        SpeciesCatalog::new(species)
    }

    /// Builds the enclosure catalog, resolving residents against `species`.
    pub fn enclosure_catalog(&self, species: &SpeciesCatalog) -> Result<EnclosureCatalog, CatalogError> {
        let enclosures = self
            .enclosures
            .iter()
            .map(|e| {
                let id = EnclosureId::new(e.id)?;
                let occupants = e
                    .occupants
                    .iter()
                    .map(|o| Occupant::resolve(id, species, &o.species, o.count))
                    .collect::<Result<Vec<_>, _>>()?;
                Enclosure::new(id, e.biomes.clone(), e.capacity, occupants)
            })
            .collect::<Result<Vec<_>, _>>()?;
        EnclosureCatalog::new(enclosures)
    }

    /// Validates the configuration and builds a [`ZooCatalog`].
    pub fn build(&self) -> Result<ZooCatalog, CatalogError> {
        let species = self.species_catalog()?;
        let enclosures = self.enclosure_catalog(&species)?;
        ZooCatalog::new(species, enclosures)
    }
}
