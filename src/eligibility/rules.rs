//! Individual admission rules.
//!
//! Each function answers one question about one enclosure and one candidate
//! group. They are pure and independent; ordering lives in the parent module.

use crate::biome::Biome;
use crate::enclosure::Enclosure;
use crate::quantity::Quantity;
use crate::space;
use crate::species::{Species, HIPPO, MONKEY};

/// The group fits once the diversity penalty is included.
pub(super) fn has_capacity(enclosure: &Enclosure, species: &Species, quantity: Quantity) -> bool {
    space::occupied_space(enclosure, species, quantity) <= u64::from(enclosure.capacity())
}

/// The species tolerates at least one biome the enclosure satisfies.
pub(super) fn biome_matches(enclosure: &Enclosure, species: &Species) -> bool {
    species.biomes().intersects(enclosure.biomes())
}

/// Monkeys either open an empty enclosure or join one that already holds
/// another species. Other species always pass.
pub(super) fn monkey_has_company(enclosure: &Enclosure, species: &Species) -> bool {
    if !species.is(MONKEY) {
        return true;
    }
    enclosure.is_empty()
        || enclosure
            .occupants()
            .iter()
            .any(|o| !o.species().is(MONKEY))
}

/// Hippos need savanna or river. Other species always pass.
pub(super) fn hippo_habitat(enclosure: &Enclosure, species: &Species) -> bool {
    if !species.is(HIPPO) {
        return true;
    }
    let biomes = enclosure.biomes();
    biomes.contains(&Biome::savana()) || biomes.contains(&Biome::rio())
}

/// Predators live only with their own species; non-predators never live
/// with a predator.
pub(super) fn predation_safe(enclosure: &Enclosure, species: &Species) -> bool {
    let mut residents = enclosure.occupants().iter();
    if species.is_predator() {
        residents.all(|o| o.species().id() == species.id())
    } else {
        residents.all(|o| !o.species().is_predator())
    }
}
