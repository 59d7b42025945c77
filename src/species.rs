//! Species and the species catalog.
//!
//! The species catalog is a pure lookup table built once from configuration.
//! Entries are shared behind `Arc` so enclosures can hold resolved references
//! to their occupants' species.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::biome::{Biome, BiomeSet};
use crate::error::CatalogError;

/// Id of the species subject to the companionship rule.
pub const MONKEY: &str = "MACACO";

/// Id of the species subject to the river/savanna habitat rule.
pub const HIPPO: &str = "HIPOPOTAMO";

/// Case-normalized species identifier (ASCII uppercase).
///
/// # Examples
///
/// ```
/// use recintos::SpeciesId;
///
/// let id = SpeciesId::new("leao").unwrap();
/// assert_eq!(id.as_str(), "LEAO");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpeciesId(String);

impl SpeciesId {
    /// Creates a species id, trimming and uppercasing the token.
    pub fn new(token: &str) -> Result<Self, CatalogError> {
        let normalized = Self::normalize(token);
        if normalized.is_empty() {
            return Err(CatalogError::EmptySpeciesId);
        }
        Ok(Self(normalized))
    }

    /// Normalizes a raw token the same way ids are stored.
    #[must_use]
    pub fn normalize(token: &str) -> String {
        token.trim().to_ascii_uppercase()
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SpeciesId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SpeciesId {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SpeciesId> for String {
    fn from(id: SpeciesId) -> Self {
        id.0
    }
}

/// An animal species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Species {
    id: SpeciesId,
    unit_size: u32,
    biomes: BiomeSet,
    predator: bool,
}

impl Species {
    /// Creates a species, validating unit size and biomes.
    pub fn new(
        id: SpeciesId,
        unit_size: u32,
        biomes: BiomeSet,
        predator: bool,
    ) -> Result<Self, CatalogError> {
        if unit_size == 0 {
            return Err(CatalogError::ZeroUnitSize { species: id });
        }
        if biomes.is_empty() {
            return Err(CatalogError::SpeciesWithoutBiomes { species: id });
        }
        Ok(Self {
            id,
            unit_size,
            biomes,
            predator,
        })
    }

    /// Species id.
    #[must_use]
    pub const fn id(&self) -> &SpeciesId {
        &self.id
    }

    /// Space units consumed per individual.
    #[must_use]
    pub const fn unit_size(&self) -> u32 {
        self.unit_size
    }

    /// Biomes this species tolerates.
    #[must_use]
    pub const fn biomes(&self) -> &BiomeSet {
        &self.biomes
    }

    /// Whether this species is a predator.
    #[must_use]
    pub const fn is_predator(&self) -> bool {
        self.predator
    }

    /// Returns true if this species has the given id.
    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        self.id.as_str() == id
    }
}

/// Immutable lookup table of species.
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    by_id: BTreeMap<SpeciesId, Arc<Species>>,
}

impl SpeciesCatalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(species: impl IntoIterator<Item = Species>) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for s in species {
            if by_id.contains_key(s.id()) {
                return Err(CatalogError::DuplicateSpecies {
                    species: s.id().clone(),
                });
            }
            by_id.insert(s.id().clone(), Arc::new(s));
        }
        Ok(Self { by_id })
    }

    /// The standard zoo species.
    #[must_use]
    pub fn standard() -> Self {
        let entry = |id: &str, unit_size: u32, biomes: &[Biome], predator: bool| {
            let species = Species {
                id: SpeciesId(id.to_string()),
                unit_size,
                biomes: biomes.iter().cloned().collect(),
                predator,
            };
            (species.id.clone(), Arc::new(species))
        };

        let by_id = [
            entry("LEAO", 3, &[Biome::savana()], true),
            entry("LEOPARDO", 2, &[Biome::savana()], true),
            entry("CROCODILO", 3, &[Biome::rio()], true),
            entry(MONKEY, 1, &[Biome::savana(), Biome::floresta()], false),
            entry("GAZELA", 2, &[Biome::savana()], false),
            entry(HIPPO, 4, &[Biome::savana(), Biome::rio()], false),
        ]
        .into_iter()
        .collect();

        Self { by_id }
    }

    /// Looks up a species by id. The token is case-normalized first.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<&Arc<Species>> {
        self.by_id.get(SpeciesId::normalize(id).as_str())
    }

    /// Number of species.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the catalog has no species.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterates species in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Species>> {
        self.by_id.values()
    }
}
