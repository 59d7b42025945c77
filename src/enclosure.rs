//! Enclosures and the enclosure catalog.
//!
//! Enclosures are validated on construction: positive capacity, at least
//! one biome, resolved and non-repeated occupants, and a current occupancy
//! that fits the capacity. Evaluation relies on these and never re-checks.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::biome::BiomeSet;
use crate::error::CatalogError;
use crate::space;
use crate::species::{Species, SpeciesCatalog};

/// Positive enclosure number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct EnclosureId(u32);

impl EnclosureId {
    /// Creates an id; zero is rejected.
    pub fn new(id: u32) -> Result<Self, CatalogError> {
        if id == 0 {
            return Err(CatalogError::ZeroEnclosureId);
        }
        Ok(Self(id))
    }

    /// Returns the raw number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EnclosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for EnclosureId {
    type Error = CatalogError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnclosureId> for u32 {
    fn from(id: EnclosureId) -> Self {
        id.0
    }
}

/// A group of animals of one species living in an enclosure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    species: Arc<Species>,
    count: u32,
}

impl Occupant {
    /// Resolves `species` against the catalog and builds an occupant of
    /// enclosure `enclosure`.
    pub fn resolve(
        enclosure: EnclosureId,
        catalog: &SpeciesCatalog,
        species: &str,
        count: u32,
    ) -> Result<Self, CatalogError> {
        let Some(resolved) = catalog.lookup(species) else {
            return Err(CatalogError::UnknownOccupantSpecies {
                id: enclosure,
                species: species.to_string(),
            });
        };
        if count == 0 {
            return Err(CatalogError::ZeroOccupantCount {
                id: enclosure,
                species: resolved.id().clone(),
            });
        }
        Ok(Self {
            species: Arc::clone(resolved),
            count,
        })
    }

    /// Species of this group.
    #[must_use]
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// Number of individuals.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// An enclosure with its current occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    id: EnclosureId,
    biomes: BiomeSet,
    capacity: u32,
    occupants: Vec<Occupant>,
}

impl Enclosure {
    /// Creates an enclosure and checks it is well-formed.
    pub fn new(
        id: EnclosureId,
        biomes: BiomeSet,
        capacity: u32,
        occupants: Vec<Occupant>,
    ) -> Result<Self, CatalogError> {
        if capacity == 0 {
            return Err(CatalogError::ZeroCapacity { id });
        }
        if biomes.is_empty() {
            return Err(CatalogError::EnclosureWithoutBiomes { id });
        }

        let mut seen = HashSet::new();
        for occupant in &occupants {
            if !seen.insert(occupant.species().id()) {
                return Err(CatalogError::RepeatedOccupant {
                    id,
                    species: occupant.species().id().clone(),
                });
            }
        }

        let enclosure = Self {
            id,
            biomes,
            capacity,
            occupants,
        };

        let occupied = space::current_occupancy(&enclosure);
        if occupied > u64::from(capacity) {
            return Err(CatalogError::OverCapacity {
                id,
                occupied,
                capacity,
            });
        }

        Ok(enclosure)
    }

    /// Enclosure number.
    #[must_use]
    pub const fn id(&self) -> EnclosureId {
        self.id
    }

    /// Biomes this enclosure satisfies.
    #[must_use]
    pub const fn biomes(&self) -> &BiomeSet {
        &self.biomes
    }

    /// Total space units.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Current occupants in insertion order.
    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Returns true if nobody lives here yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

/// Ordered, immutable list of enclosures.
#[derive(Debug, Clone, Default)]
pub struct EnclosureCatalog {
    enclosures: Vec<Enclosure>,
}

impl EnclosureCatalog {
    /// Builds a catalog, rejecting duplicate enclosure ids. Order is kept.
    pub fn new(enclosures: impl IntoIterator<Item = Enclosure>) -> Result<Self, CatalogError> {
        let enclosures: Vec<Enclosure> = enclosures.into_iter().collect();
        let mut seen = HashSet::new();
        for enclosure in &enclosures {
            if !seen.insert(enclosure.id()) {
                return Err(CatalogError::DuplicateEnclosure { id: enclosure.id() });
            }
        }
        Ok(Self { enclosures })
    }

    /// Looks up an enclosure by id.
    #[must_use]
    pub fn get(&self, id: EnclosureId) -> Option<&Enclosure> {
        self.enclosures.iter().find(|e| e.id() == id)
    }

    /// Iterates enclosures in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Enclosure> {
        self.enclosures.iter()
    }

    /// Number of enclosures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enclosures.len()
    }

    /// Returns true if there are no enclosures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enclosures.is_empty()
    }
}

impl<'a> IntoIterator for &'a EnclosureCatalog {
    type Item = &'a Enclosure;
    type IntoIter = std::slice::Iter<'a, Enclosure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
