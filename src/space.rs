//! Space accounting.
//!
//! Computes how much of an enclosure is used by its residents plus a
//! hypothetical addition. The accountant never decides admissibility; it
//! only produces the number the capacity rule and the free-space report
//! both compare against.

use serde::Serialize;

use crate::enclosure::Enclosure;
use crate::quantity::Quantity;
use crate::species::Species;

/// Flat overhead charged once when an enclosure would hold more than one species.
pub const DIVERSITY_PENALTY: u64 = 1;

/// How the occupied space of an enclosure splits up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceBreakdown {
    /// Space used by the current residents.
    pub resident: u64,
    /// Space the candidate group would use.
    pub added: u64,
    /// Diversity penalty, either zero or [`DIVERSITY_PENALTY`].
    pub penalty: u64,
}

impl SpaceBreakdown {
    /// Total occupied space.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.resident
            .saturating_add(self.added)
            .saturating_add(self.penalty)
    }
}

fn resident_space(enclosure: &Enclosure) -> u64 {
    enclosure
        .occupants()
        .iter()
        .map(|o| u64::from(o.species().unit_size()).saturating_mul(u64::from(o.count())))
        .fold(0, u64::saturating_add)
}

/// Breaks down the space `enclosure` would use after adding `quantity`
/// individuals of `candidate`.
#[must_use]
pub fn breakdown(enclosure: &Enclosure, candidate: &Species, quantity: Quantity) -> SpaceBreakdown {
    let mixed = enclosure
        .occupants()
        .iter()
        .any(|o| o.species().id() != candidate.id());

    SpaceBreakdown {
        resident: resident_space(enclosure),
        added: u64::from(candidate.unit_size()).saturating_mul(quantity.get()),
        penalty: if mixed { DIVERSITY_PENALTY } else { 0 },
    }
}

/// Total space `enclosure` would use after adding `quantity` individuals
/// of `candidate`, diversity penalty included.
#[must_use]
pub fn occupied_space(enclosure: &Enclosure, candidate: &Species, quantity: Quantity) -> u64 {
    let space = breakdown(enclosure, candidate, quantity);
    tracing::trace!(
        enclosure = %enclosure.id(),
        species = %candidate.id(),
        resident = space.resident,
        added = space.added,
        penalty = space.penalty,
        "space breakdown"
    );
    space.total()
}

/// Space used by the current residents alone.
///
/// The diversity penalty applies when the residents already span more than
/// one species.
#[must_use]
pub fn current_occupancy(enclosure: &Enclosure) -> u64 {
    let mut occupants = enclosure.occupants().iter();
    let mixed = occupants.next().is_some_and(|first| {
        occupants.any(|o| o.species().id() != first.species().id())
    });
    let penalty = if mixed { DIVERSITY_PENALTY } else { 0 };
    resident_space(enclosure).saturating_add(penalty)
}

/// Space left after the addition, or `None` if the addition does not fit.
#[must_use]
pub fn free_space(enclosure: &Enclosure, candidate: &Species, quantity: Quantity) -> Option<u64> {
    u64::from(enclosure.capacity()).checked_sub(occupied_space(enclosure, candidate, quantity))
}
