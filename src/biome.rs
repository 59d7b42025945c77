//! Biome tokens and biome sets.
//!
//! A biome is a habitat tag such as `savana`, `rio` or `floresta`. Species
//! tolerate a set of biomes; enclosures satisfy a set of biomes, written in
//! the catalog as a label like `"savana e rio"`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A single, lowercase-normalized biome token.
///
/// # Examples
///
/// ```
/// use recintos::Biome;
///
/// let b = Biome::new(" Savana ").unwrap();
/// assert_eq!(b, Biome::savana());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Biome(String);

impl Biome {
    /// Creates a biome from a token, trimming and lowercasing it.
    pub fn new(token: &str) -> Result<Self, CatalogError> {
        let normalized = token.trim().to_lowercase();
        let valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(CatalogError::InvalidBiome {
                token: token.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// The savanna biome.
    #[must_use]
    pub fn savana() -> Self {
        Self("savana".to_string())
    }

    /// The river biome.
    #[must_use]
    pub fn rio() -> Self {
        Self("rio".to_string())
    }

    /// The forest biome.
    #[must_use]
    pub fn floresta() -> Self {
        Self("floresta".to_string())
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Biome {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Biome> for String {
    fn from(biome: Biome) -> Self {
        biome.0
    }
}

/// A set of biomes.
///
/// Deserializes from either a list of tokens or a label such as
/// `"savana e rio"`; serializes as a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BiomeSetRepr", into = "Vec<Biome>")]
pub struct BiomeSet(BTreeSet<Biome>);

impl BiomeSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a label like `"savana e rio"` or `"savana, rio"`.
    pub fn parse_label(label: &str) -> Result<Self, CatalogError> {
        label
            .replace(',', " ")
            .split_whitespace()
            .filter(|token| !token.eq_ignore_ascii_case("e"))
            .map(Biome::new)
            .collect()
    }

    /// Returns true if the set contains `biome`.
    #[must_use]
    pub fn contains(&self, biome: &Biome) -> bool {
        self.0.contains(biome)
    }

    /// Returns true if the two sets share at least one biome.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of biomes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the biomes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Biome> {
        self.0.iter()
    }
}

impl FromIterator<Biome> for BiomeSet {
    fn from_iter<I: IntoIterator<Item = Biome>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for BiomeSet {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

impl fmt::Display for BiomeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for biome in &self.0 {
            if !first {
                f.write_str(" e ")?;
            }
            f.write_str(biome.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl From<BiomeSet> for Vec<Biome> {
    fn from(set: BiomeSet) -> Self {
        set.0.into_iter().collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BiomeSetRepr {
    Label(String),
    List(Vec<String>),
}

impl TryFrom<BiomeSetRepr> for BiomeSet {
    type Error = CatalogError;

    fn try_from(repr: BiomeSetRepr) -> Result<Self, Self::Error> {
        match repr {
            BiomeSetRepr::Label(label) => Self::parse_label(&label),
            BiomeSetRepr::List(tokens) => tokens.iter().map(|t| Biome::new(t)).collect(),
        }
    }
}
