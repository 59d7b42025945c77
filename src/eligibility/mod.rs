//! Eligibility evaluation.
//!
//! Decides whether one enclosure can take one candidate group. Rules run in
//! a fixed order and evaluation stops at the first failure, so the reported
//! [`Rule`] is always the earliest one that rejects:
//!
//! 1. capacity
//! 2. biome
//! 3. monkey companionship
//! 4. hippo habitat
//! 5. predation

mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enclosure::Enclosure;
use crate::quantity::Quantity;
use crate::species::Species;

/// An admission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Occupied space after the addition must not exceed capacity.
    Capacity,
    /// Species and enclosure must share a biome.
    Biome,
    /// Monkeys may not join an enclosure that holds only monkeys.
    MonkeyCompanionship,
    /// Hippos need savanna or river.
    HippoHabitat,
    /// Predators only with conspecifics, prey never with predators.
    Predation,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ORDER: [Self; 5] = [
        Self::Capacity,
        Self::Biome,
        Self::MonkeyCompanionship,
        Self::HippoHabitat,
        Self::Predation,
    ];

    /// Evaluates this single rule.
    #[must_use]
    pub fn check(self, enclosure: &Enclosure, species: &Species, quantity: Quantity) -> bool {
        match self {
            Self::Capacity => rules::has_capacity(enclosure, species, quantity),
            Self::Biome => rules::biome_matches(enclosure, species),
            Self::MonkeyCompanionship => rules::monkey_has_company(enclosure, species),
            Self::HippoHabitat => rules::hippo_habitat(enclosure, species),
            Self::Predation => rules::predation_safe(enclosure, species),
        }
    }

    /// Short human description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Capacity => "not enough space",
            Self::Biome => "no compatible biome",
            Self::MonkeyCompanionship => "monkeys cannot join a monkey-only enclosure",
            Self::HippoHabitat => "hippos need savanna or river",
            Self::Predation => "predator and prey cannot share an enclosure",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Returns `Ok(())` if every rule passes, or the first rule that fails.
pub fn assess(enclosure: &Enclosure, species: &Species, quantity: Quantity) -> Result<(), Rule> {
    match Rule::ORDER
        .into_iter()
        .find(|rule| !rule.check(enclosure, species, quantity))
    {
        Some(rule) => {
            tracing::debug!(
                enclosure = %enclosure.id(),
                species = %species.id(),
                quantity = quantity.get(),
                rule = ?rule,
                "enclosure rejected"
            );
            Err(rule)
        }
        None => Ok(()),
    }
}

/// Returns true if `enclosure` can take `quantity` individuals of `species`.
#[must_use]
pub fn can_admit(enclosure: &Enclosure, species: &Species, quantity: Quantity) -> bool {
    assess(enclosure, species, quantity).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biome::BiomeSet;
    use crate::enclosure::{EnclosureId, Occupant};
    use crate::species::{SpeciesCatalog, HIPPO, MONKEY};

    fn enclosure(biomes: &str, capacity: u32, residents: &[(&str, u32)]) -> Enclosure {
        let species = SpeciesCatalog::standard();
        let id = EnclosureId::new(1).unwrap();
        let occupants = residents
            .iter()
            .map(|(s, n)| Occupant::resolve(id, &species, s, *n).unwrap())
            .collect();
        Enclosure::new(id, BiomeSet::parse_label(biomes).unwrap(), capacity, occupants).unwrap()
    }

    fn species(id: &str) -> Species {
        Species::clone(SpeciesCatalog::standard().lookup(id).unwrap())
    }

    fn one() -> Quantity {
        Quantity::new(1).unwrap()
    }

    #[test]
    fn order_is_fixed() {
        assert_eq!(
            Rule::ORDER,
            [
                Rule::Capacity,
                Rule::Biome,
                Rule::MonkeyCompanionship,
                Rule::HippoHabitat,
                Rule::Predation
            ]
        );
    }

    #[test]
    fn capacity_reported_before_biome() {
        // Too small and wrong biome: capacity wins.
        let e = enclosure("rio", 1, &[]);
        assert_eq!(assess(&e, &species("LEAO"), one()), Err(Rule::Capacity));
    }

    #[test]
    fn biome_reported_before_predation() {
        let e = enclosure("rio", 20, &[("CROCODILO", 1)]);
        assert_eq!(assess(&e, &species("GAZELA"), one()), Err(Rule::Biome));
    }

    #[test]
    fn monkey_rule_reported_before_predation() {
        let e = enclosure("savana", 10, &[(MONKEY, 3)]);
        assert_eq!(assess(&e, &species(MONKEY), one()), Err(Rule::MonkeyCompanionship));
    }

    #[test]
    fn predation_reported_last() {
        let e = enclosure("savana", 9, &[("LEAO", 1)]);
        assert_eq!(assess(&e, &species(MONKEY), one()), Err(Rule::Predation));
        assert_eq!(assess(&e, &species(HIPPO), one()), Err(Rule::Predation));
    }

    #[test]
    fn admits_when_everything_passes() {
        let e = enclosure("savana e rio", 7, &[("GAZELA", 1)]);
        assert_eq!(assess(&e, &species(HIPPO), one()), Ok(()));
        assert!(can_admit(&e, &species(MONKEY), one()));
    }

    #[test]
    fn empty_enclosure_admits_monkey() {
        assert!(can_admit(&enclosure("floresta", 5, &[]), &species(MONKEY), one()));
    }

    #[test]
    fn assessment_is_repeatable() {
        let e = enclosure("savana", 10, &[(MONKEY, 3)]);
        let first = assess(&e, &species("GAZELA"), one());
        let second = assess(&e, &species("GAZELA"), one());
        assert_eq!(first, second);
    }

    #[test]
    fn rule_serializes_snake_case() {
        let json = serde_json::to_string(&Rule::MonkeyCompanionship).unwrap();
        assert_eq!(json, "\"monkey_companionship\"");
    }
}
