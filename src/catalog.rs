//! The validated zoo catalog.
//!
//! Pairs a species catalog with an enclosure catalog whose residents were
//! resolved against it. Both are read-only after construction, so a shared
//! `&ZooCatalog` can be evaluated from any number of threads.

use std::path::Path;

use crate::config::ZooConfig;
use crate::enclosure::EnclosureCatalog;
use crate::error::{CatalogError, ConfigError, QueryError, ZooResult};
use crate::quantity::QuantityInput;
use crate::query::{self, Evaluation, Query, ViableEnclosure};
use crate::species::SpeciesCatalog;

/// Species and enclosures, checked for consistency.
#[derive(Debug, Clone)]
pub struct ZooCatalog {
    species: SpeciesCatalog,
    enclosures: EnclosureCatalog,
}

impl ZooCatalog {
    /// Pairs the two catalogs, checking that every resident species is the
    /// one registered in `species`.
    pub fn new(species: SpeciesCatalog, enclosures: EnclosureCatalog) -> Result<Self, CatalogError> {
        for enclosure in &enclosures {
            for occupant in enclosure.occupants() {
                let resident = occupant.species();
                let registered = species.lookup(resident.id().as_str());
                if !registered.is_some_and(|s| **s == *resident) {
                    return Err(CatalogError::UnknownOccupantSpecies {
                        id: enclosure.id(),
                        species: resident.id().to_string(),
                    });
                }
            }
        }
        Ok(Self {
            species,
            enclosures,
        })
    }

    /// The standard zoo: five enclosures and six species.
    ///
    /// # Panics
    ///
    /// Never in practice; the built-in configuration is covered by tests.
    #[must_use]
    pub fn standard() -> Self {
        ZooConfig::default()
            .build()
            .expect("standard zoo configuration is well-formed")
    }

    /// Builds a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(ZooConfig::from_json_str(json)?.build()?)
    }

    /// Builds a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(ZooConfig::from_path(path)?.build()?)
    }

    /// Loads the inventory at `path`, or the standard zoo when there is none.
    pub fn open(path: Option<&Path>) -> ZooResult<Self> {
        match path {
            Some(path) => Ok(Self::from_path(path)?),
            None => Ok(Self::standard()),
        }
    }

    /// Loads the inventory as [`open`](Self::open) does and evaluates `query`.
    pub fn evaluate_inventory(path: Option<&Path>, query: &Query) -> ZooResult<Vec<ViableEnclosure>> {
        Ok(Self::open(path)?.evaluate_query(query)?)
    }

    /// The species catalog.
    #[must_use]
    pub const fn species(&self) -> &SpeciesCatalog {
        &self.species
    }

    /// The enclosure catalog.
    #[must_use]
    pub const fn enclosures(&self) -> &EnclosureCatalog {
        &self.enclosures
    }

    /// Finds the enclosures that can take `quantity` individuals of `species`.
    pub fn evaluate(
        &self,
        species: &str,
        quantity: impl Into<QuantityInput>,
    ) -> Result<Vec<ViableEnclosure>, QueryError> {
        self.evaluate_query(&Query::new(species, quantity))
    }

    /// Evaluates a prepared [`Query`].
    pub fn evaluate_query(&self, query: &Query) -> Result<Vec<ViableEnclosure>, QueryError> {
        query::evaluate(&self.species, &self.enclosures, query)
    }

    /// Evaluates a query and keeps per-enclosure rejection reasons.
    pub fn evaluate_detailed(&self, query: &Query) -> Result<Evaluation, QueryError> {
        query::evaluate_detailed(&self.species, &self.enclosures, query)
    }
}

impl Default for ZooCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeSet;
    use crate::enclosure::{Enclosure, EnclosureId, Occupant};
    use crate::species::{Species, SpeciesId};

    #[test]
    fn standard_layout() {
        let zoo = ZooCatalog::standard();
        let ids: Vec<u32> = zoo.enclosures().iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let capacities: Vec<u32> = zoo.enclosures().iter().map(Enclosure::capacity).collect();
        assert_eq!(capacities, vec![10, 5, 7, 8, 9]);
    }

    #[test]
    fn rejects_residents_from_another_catalog() {
        let other = SpeciesCatalog::new([Species::new(
            SpeciesId::new("LEAO").unwrap(),
            5,
            BiomeSet::parse_label("savana").unwrap(),
            true,
        )
        .unwrap()])
        .unwrap();

        let id = EnclosureId::new(1).unwrap();
        let lion = Occupant::resolve(id, &other, "LEAO", 1).unwrap();
        let enclosure =
            Enclosure::new(id, BiomeSet::parse_label("savana").unwrap(), 10, vec![lion]).unwrap();
        let enclosures = EnclosureCatalog::new([enclosure]).unwrap();

        let err = ZooCatalog::new(SpeciesCatalog::standard(), enclosures).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownOccupantSpecies { .. }));
    }

    #[test]
    fn evaluate_accepts_plain_arguments() {
        let zoo = ZooCatalog::default();
        let result = zoo.evaluate("leao", 1).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.get(), 5);
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ZooCatalog>();
    }
}
