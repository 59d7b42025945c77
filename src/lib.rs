//! # recintos - enclosure eligibility for a small zoo
//!
//! Given a species and a number of individuals, recintos decides which
//! enclosures of a fixed inventory could legally house the group and how
//! much space each would have left.
//!
//! ## Core Concepts
//!
//! - **Species**: unit size, tolerated biomes, predator flag
//! - **Enclosure**: capacity, satisfied biomes, current residents
//! - **Space accounting**: residents plus the new group, with a flat
//!   penalty when species mix
//! - **Eligibility**: ordered admission rules, stopping at the first failure
//!
//! ## Usage
//!
//! ```rust
//! use recintos::{ErrorKind, ZooCatalog};
//!
//! let zoo = ZooCatalog::standard();
//!
//! let viable = zoo.evaluate("LEAO", 1)?;
//! assert_eq!(viable[0].to_string(), "Recinto 5 (espaço livre: 3 total: 9)");
//!
//! let err = zoo.evaluate("UNICORNIO", 1).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidSpecies);
//! # Ok::<(), recintos::QueryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Catalog data
pub mod biome;
pub mod catalog;
pub mod config;
pub mod enclosure;
pub mod error;
pub mod species;

// Evaluation
pub mod eligibility;
pub mod quantity;
pub mod query;
pub mod space;

// Re-export primary types at crate root for convenience
pub use biome::{Biome, BiomeSet};
pub use catalog::ZooCatalog;
pub use config::{EnclosureConfig, OccupantConfig, SpeciesConfig, ZooConfig};
pub use eligibility::{assess, can_admit, Rule};
pub use enclosure::{Enclosure, EnclosureCatalog, EnclosureId, Occupant};
pub use error::{CatalogError, ConfigError, ErrorKind, QueryError, ZooError, ZooResult};
pub use quantity::{Quantity, QuantityInput};
pub use query::{evaluate, evaluate_detailed, Evaluation, Query, RejectedEnclosure, ViableEnclosure};
pub use space::{occupied_space, SpaceBreakdown, DIVERSITY_PENALTY};
pub use species::{Species, SpeciesCatalog, SpeciesId};
