//! In-memory review store used as a stand-in for SQLite in handler tests.

use super::ReviewStore;
use crate::error::StoreError;
use common::model::review::{Review, ReviewDraft};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Default)]
pub struct InMemoryReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The id `insert` hands out when `reviews` is the current contents of the store.
fn next_id<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> i64 {
    reviews
        .into_iter()
        .map(|review| review.id)
        .max()
        .map_or(1, |max| max + 1)
}

impl ReviewStore for InMemoryReviewStore {
    fn reset_and_seed(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let mut stored = self.reviews.write().unwrap_or_else(PoisonError::into_inner);
        *stored = reviews.to_vec();
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Review>, StoreError> {
        let stored = self.reviews.read().unwrap_or_else(PoisonError::into_inner);
        let mut reviews = stored.clone();
        reviews.sort_by_key(|review| review.id);
        Ok(reviews)
    }

    fn find_by_dealer(&self, dealer_id: i64) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|review| review.dealership == dealer_id)
            .collect())
    }

    fn insert(&self, draft: ReviewDraft) -> Result<Review, StoreError> {
        let mut stored = self.reviews.write().unwrap_or_else(PoisonError::into_inner);
        let review = draft.into_review(next_id(stored.iter()));
        stored.push(review.clone());
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(dealership: i64) -> ReviewDraft {
        ReviewDraft {
            name: "Nico".to_string(),
            dealership,
            review: "Quick and friendly".to_string(),
            ..ReviewDraft::default()
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&Vec::<Review>::new()), 1);
    }

    #[test]
    fn next_id_follows_the_maximum_not_the_count() {
        let reviews = vec![draft(1).into_review(1), draft(1).into_review(3)];
        assert_eq!(next_id(&reviews), 4);

        let unordered = vec![
            draft(1).into_review(9),
            draft(1).into_review(2),
            draft(1).into_review(5),
        ];
        assert_eq!(next_id(&unordered), 10);
    }

    #[test]
    fn numbering_matches_the_sqlite_store() {
        let store = InMemoryReviewStore::new();
        store
            .reset_and_seed(&[draft(10).into_review(1), draft(20).into_review(3)])
            .unwrap();

        let inserted = store.insert(draft(10)).unwrap();

        assert_eq!(inserted.id, 4);
        let ids: Vec<i64> = store
            .find_by_dealer(10)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn reset_discards_inserted_reviews() {
        let store = InMemoryReviewStore::new();
        store.insert(draft(1)).unwrap();
        store.insert(draft(1)).unwrap();

        store.reset_and_seed(&[draft(2).into_review(8)]).unwrap();

        assert_eq!(store.find_all().unwrap(), vec![draft(2).into_review(8)]);
    }
}
