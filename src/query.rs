//! Query evaluation.
//!
//! Validates a request, scans the enclosure catalog in order through the
//! eligibility rules, and reports free space for each enclosure that admits
//! the group. Nothing here mutates the catalogs; evaluating the same query
//! twice gives the same answer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::eligibility::{self, Rule};
use crate::enclosure::{EnclosureCatalog, EnclosureId};
use crate::error::QueryError;
use crate::quantity::{Quantity, QuantityInput};
use crate::space;
use crate::species::{SpeciesCatalog, SpeciesId};

/// A request to place `quantity` individuals of `species`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Species id as supplied; normalized during lookup.
    pub species: String,
    /// Quantity as supplied; validated after the species resolves.
    pub quantity: QuantityInput,
}

impl Query {
    /// Creates a query.
    pub fn new(species: impl Into<String>, quantity: impl Into<QuantityInput>) -> Self {
        Self {
            species: species.into(),
            quantity: quantity.into(),
        }
    }
}

/// An enclosure that can take the requested group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViableEnclosure {
    /// Enclosure number.
    pub id: EnclosureId,
    /// Space left after the addition.
    pub free_space: u64,
    /// Total capacity.
    pub capacity: u32,
}

impl fmt::Display for ViableEnclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Recinto {} (espaço livre: {} total: {})",
            self.id, self.free_space, self.capacity
        )
    }
}

/// An enclosure that turned the group down, and the first rule it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RejectedEnclosure {
    /// Enclosure number.
    pub id: EnclosureId,
    /// First failing rule.
    pub rule: Rule,
}

/// Full outcome of a validated query, viable or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Resolved species.
    pub species: SpeciesId,
    /// Validated quantity.
    pub quantity: Quantity,
    /// Enclosures that admit the group, in catalog order.
    pub viable: Vec<ViableEnclosure>,
    /// Enclosures that reject the group, in catalog order.
    pub rejected: Vec<RejectedEnclosure>,
}

impl Evaluation {
    /// Returns true if at least one enclosure admits the group.
    #[must_use]
    pub fn is_viable(&self) -> bool {
        !self.viable.is_empty()
    }

    /// Converts into the viable list, failing when it is empty.
    pub fn into_viable(self) -> Result<Vec<ViableEnclosure>, QueryError> {
        if self.viable.is_empty() {
            return Err(QueryError::NoViableEnclosure {
                species: self.species,
                quantity: self.quantity.get(),
            });
        }
        Ok(self.viable)
    }
}

/// Validates `query` and assesses every enclosure, keeping rejection reasons.
///
/// Fails only on an invalid species or quantity; an empty viable list is a
/// valid [`Evaluation`].
pub fn evaluate_detailed(
    species: &SpeciesCatalog,
    enclosures: &EnclosureCatalog,
    query: &Query,
) -> Result<Evaluation, QueryError> {
    let Some(candidate) = species.lookup(&query.species) else {
        return Err(QueryError::InvalidSpecies {
            species: query.species.clone(),
        });
    };
    let quantity = query.quantity.validate()?;

    let mut viable = Vec::new();
    let mut rejected = Vec::new();
    for enclosure in enclosures {
        match eligibility::assess(enclosure, candidate, quantity) {
            Ok(()) => {
                // Admission already checked occupied <= capacity.
                let free_space = space::free_space(enclosure, candidate, quantity).unwrap_or(0);
                viable.push(ViableEnclosure {
                    id: enclosure.id(),
                    free_space,
                    capacity: enclosure.capacity(),
                });
            }
            Err(rule) => rejected.push(RejectedEnclosure {
                id: enclosure.id(),
                rule,
            }),
        }
    }

    tracing::debug!(
        species = %candidate.id(),
        quantity = quantity.get(),
        viable = viable.len(),
        rejected = rejected.len(),
        "query evaluated"
    );

    Ok(Evaluation {
        species: candidate.id().clone(),
        quantity,
        viable,
        rejected,
    })
}

/// Evaluates `query`, returning the viable enclosures in catalog order.
///
/// Errors are checked in priority order: unknown species, then invalid
/// quantity, then no viable enclosure.
pub fn evaluate(
    species: &SpeciesCatalog,
    enclosures: &EnclosureCatalog,
    query: &Query,
) -> Result<Vec<ViableEnclosure>, QueryError> {
    evaluate_detailed(species, enclosures, query)?.into_viable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ZooCatalog;

    fn run(species: &str, quantity: impl Into<QuantityInput>) -> Result<Vec<ViableEnclosure>, QueryError> {
        let zoo = ZooCatalog::standard();
        evaluate(zoo.species(), zoo.enclosures(), &Query::new(species, quantity))
    }

    fn summary(result: &[ViableEnclosure]) -> Vec<(u32, u64, u32)> {
        result
            .iter()
            .map(|v| (v.id.get(), v.free_space, v.capacity))
            .collect()
    }

    #[test]
    fn lion_goes_to_lion_enclosure() {
        let result = run("LEAO", 1).unwrap();
        assert_eq!(summary(&result), vec![(5, 3, 9)]);
    }

    #[test]
    fn monkey_results() {
        let result = run("MACACO", 1).unwrap();
        assert_eq!(summary(&result), vec![(2, 4, 5), (3, 3, 7)]);
    }

    #[test]
    fn unknown_species_beats_invalid_quantity() {
        let err = run("UNICORNIO", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSpecies);
    }

    #[test]
    fn zero_quantity() {
        assert_eq!(run("LEAO", 0).unwrap_err().kind(), ErrorKind::InvalidQuantity);
    }

    #[test]
    fn leopard_has_nowhere_to_go() {
        let err = run("LEOPARDO", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoViableEnclosure);
    }

    #[test]
    fn detailed_lists_rejections_in_order() {
        let zoo = ZooCatalog::standard();
        let eval = evaluate_detailed(zoo.species(), zoo.enclosures(), &Query::new("MACACO", 1))
            .unwrap();
        let rejected: Vec<(u32, Rule)> = eval.rejected.iter().map(|r| (r.id.get(), r.rule)).collect();
        assert_eq!(
            rejected,
            vec![
                (1, Rule::MonkeyCompanionship),
                (4, Rule::Biome),
                (5, Rule::Predation)
            ]
        );
        assert!(eval.is_viable());
    }

    #[test]
    fn detailed_does_not_fail_when_nothing_fits() {
        let zoo = ZooCatalog::standard();
        let eval = evaluate_detailed(zoo.species(), zoo.enclosures(), &Query::new("LEOPARDO", 1))
            .unwrap();
        assert!(!eval.is_viable());
        assert_eq!(eval.rejected.len(), 5);
    }

    #[test]
    fn viable_renders_like_the_staff_report() {
        let result = run("LEAO", 1).unwrap();
        assert_eq!(result[0].to_string(), "Recinto 5 (espaço livre: 3 total: 9)");
    }

    #[test]
    fn query_deserializes_from_json() {
        let q: Query = serde_json::from_str(r#"{"species":"GAZELA","quantity":2}"#).unwrap();
        assert_eq!(q, Query::new("GAZELA", 2));
    }
}
