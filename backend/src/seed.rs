//! Boot-time reset of the review store.

use crate::error::StoreError;
use crate::store::ReviewStore;
use common::model::review::Review;
use log::info;

/// Makes the review store match the reviews source file.
///
/// Called once from `main` before the server binds. Anything inserted by a previous run is
/// discarded.
pub fn seed_reviews(store: &dyn ReviewStore, reviews: &[Review]) -> Result<(), StoreError> {
    store.reset_and_seed(reviews)?;
    info!("Seeded review store with {} reviews", reviews.len());
    Ok(())
}
