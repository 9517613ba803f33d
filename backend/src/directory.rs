//! Read-only lookups over the dealerships loaded at boot.

use common::model::dealership::Dealership;

/// In-memory dealership index. Built once from the loaded dataset and never mutated, so it
/// is shared across workers without any locking.
#[derive(Debug, Clone, Default)]
pub struct DealershipDirectory {
    dealerships: Vec<Dealership>,
}

impl DealershipDirectory {
    pub fn new(dealerships: Vec<Dealership>) -> Self {
        Self { dealerships }
    }

    pub fn find_all(&self) -> &[Dealership] {
        &self.dealerships
    }

    /// Exact match on `state`, ignoring case.
    pub fn find_by_state(&self, state: &str) -> Vec<&Dealership> {
        let state = state.to_lowercase();
        self.dealerships
            .iter()
            .filter(|dealer| dealer.state().to_lowercase() == state)
            .collect()
    }

    /// Matches the decimal form of each dealership id against `id`, so the path segment
    /// `"5"` finds the dealership stored with id `5`.
    pub fn find_by_id(&self, id: &str) -> Option<&Dealership> {
        self.dealerships
            .iter()
            .find(|dealer| dealer.id().to_string() == id)
    }
}
