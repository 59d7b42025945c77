//! Error types for recintos.
//!
//! All errors are strongly typed using thiserror. Query errors are the
//! values callers match on; catalog and configuration errors only happen
//! while building a [`ZooCatalog`](crate::ZooCatalog).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enclosure::EnclosureId;
use crate::species::SpeciesId;

/// The three kinds of query failure, in the priority order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The requested species is not in the species catalog.
    InvalidSpecies,
    /// The quantity is not a strictly positive integer.
    InvalidQuantity,
    /// No enclosure passes every admission rule.
    NoViableEnclosure,
}

impl ErrorKind {
    /// Returns the short message historically shown to zoo staff.
    #[must_use]
    pub const fn legacy_message(self) -> &'static str {
        match self {
            Self::InvalidSpecies => "Animal inválido",
            Self::InvalidQuantity => "Quantidade inválida",
            Self::NoViableEnclosure => "Não há recinto viável",
        }
    }
}

/// Errors returned by an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Animal inválido: '{species}' is not in the species catalog")]
    InvalidSpecies {
        species: String,
    },

    #[error("Quantidade inválida: {input} is not a strictly positive integer")]
    InvalidQuantity {
        input: String,
    },

    #[error("Não há recinto viável for {quantity} x {species}")]
    NoViableEnclosure {
        species: SpeciesId,
        quantity: u64,
    },
}

impl QueryError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSpecies { .. } => ErrorKind::InvalidSpecies,
            Self::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            Self::NoViableEnclosure { .. } => ErrorKind::NoViableEnclosure,
        }
    }

    /// Returns the short message historically shown to zoo staff.
    #[must_use]
    pub const fn legacy_message(&self) -> &'static str {
        self.kind().legacy_message()
    }
}

/// Well-formedness violations detected while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Species id cannot be empty")]
    EmptySpeciesId,

    #[error("Species '{species}' is declared more than once")]
    DuplicateSpecies {
        species: SpeciesId,
    },

    #[error("Species '{species}' must have a positive unit size")]
    ZeroUnitSize {
        species: SpeciesId,
    },

    #[error("Species '{species}' must tolerate at least one biome")]
    SpeciesWithoutBiomes {
        species: SpeciesId,
    },

    #[error("Invalid biome token '{token}'")]
    InvalidBiome {
        token: String,
    },

    #[error("Enclosure id must be a positive integer")]
    ZeroEnclosureId,

    #[error("Enclosure {id} is declared more than once")]
    DuplicateEnclosure {
        id: EnclosureId,
    },

    #[error("Enclosure {id} must have a positive capacity")]
    ZeroCapacity {
        id: EnclosureId,
    },

    #[error("Enclosure {id} must satisfy at least one biome")]
    EnclosureWithoutBiomes {
        id: EnclosureId,
    },

    #[error("Enclosure {id} references unknown species '{species}'")]
    UnknownOccupantSpecies {
        id: EnclosureId,
        species: String,
    },

    #[error("Enclosure {id} lists '{species}' with a zero count")]
    ZeroOccupantCount {
        id: EnclosureId,
        species: SpeciesId,
    },

    #[error("Enclosure {id} lists '{species}' more than once")]
    RepeatedOccupant {
        id: EnclosureId,
        species: SpeciesId,
    },

    #[error("Enclosure {id} holds {occupied} space units but has capacity {capacity}")]
    OverCapacity {
        id: EnclosureId,
        occupied: u64,
        capacity: u32,
    },
}

/// Errors loading a catalog configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Top-level error type for recintos.
#[derive(Debug, Error)]
pub enum ZooError {
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl ZooError {
    /// Returns true if this is a query error.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// Returns true if this error comes from catalog construction or loading.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Catalog(_) | Self::Config(_))
    }

    /// Returns the query error kind, if this is a query error.
    #[must_use]
    pub const fn query_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Query(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Returns the staff-facing message for query errors.
    #[must_use]
    pub const fn legacy_message(&self) -> Option<&'static str> {
        match self.query_kind() {
            Some(kind) => Some(kind.legacy_message()),
            None => None,
        }
    }
}

/// Result type alias for recintos operations.
pub type ZooResult<T> = Result<T, ZooError>;
