//! # Review Store
//!
//! The persisted collection of reviews. It is the only mutable state shared between
//! requests; the dealership side of the service never touches it.
//!
//! ## Lifecycle
//!
//! At boot `seed::seed_reviews` calls `reset_and_seed` once, before the server binds, so
//! the collection always starts out equal to the reviews source file. Reviews inserted
//! while the process runs live until the next boot wipes them.
//!
//! ## Id assignment
//!
//! `insert` numbers reviews as one above the highest id currently stored, starting at `1`
//! for an empty store. Both implementations compute the id and write the row as a single
//! store operation (one SQL statement, or one write lock), so concurrent inserts cannot
//! be handed the same id.
//!
//! Implementations are synchronous. Handlers reach them through `run`, which moves the
//! call onto the blocking pool.

pub mod sqlite;

#[cfg(test)]
pub mod memory;

use crate::error::StoreError;
use common::model::review::{Review, ReviewDraft};
use std::sync::Arc;

pub trait ReviewStore: Send + Sync {
    /// Deletes every stored review, then stores `reviews` unchanged, ids included.
    fn reset_and_seed(&self, reviews: &[Review]) -> Result<(), StoreError>;

    /// Every stored review, ordered by id.
    fn find_all(&self) -> Result<Vec<Review>, StoreError>;

    /// Reviews whose `dealership` equals `dealer_id`, ordered by id.
    fn find_by_dealer(&self, dealer_id: i64) -> Result<Vec<Review>, StoreError>;

    /// Stores `draft` under the next id and returns the stored review.
    fn insert(&self, draft: ReviewDraft) -> Result<Review, StoreError>;
}

/// Runs a store operation on the blocking thread pool.
pub async fn run<T, F>(store: Arc<dyn ReviewStore>, op: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce(&dyn ReviewStore) -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(store.as_ref())).await?
}
