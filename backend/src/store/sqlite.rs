//! SQLite-backed review store.
//!
//! Every operation opens its own connection to the database file, the same way the rest of
//! the service's storage code talks to SQLite. Concurrent writers wait on SQLite's lock
//! for up to `BUSY_TIMEOUT` instead of failing straight away.

use super::ReviewStore;
use crate::error::StoreError;
use common::model::review::{Review, ReviewDraft};
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::path::PathBuf;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS reviews (
        id            INTEGER PRIMARY KEY,
        name          TEXT    NOT NULL,
        dealership    INTEGER NOT NULL,
        review        TEXT    NOT NULL,
        purchase      INTEGER NOT NULL DEFAULT 0,
        purchase_date TEXT,
        car_make      TEXT,
        car_model     TEXT,
        car_year      INTEGER
    );
    CREATE INDEX IF NOT EXISTS reviews_dealership ON reviews (dealership);
";

const SELECT_REVIEWS: &str = "SELECT id, name, dealership, review, purchase, purchase_date, \
                              car_make, car_model, car_year FROM reviews";

// The max lookup and the write are one statement, so SQLite's write lock covers both.
const INSERT_NEXT: &str = "
    INSERT INTO reviews
        (id, name, dealership, review, purchase, purchase_date, car_make, car_model, car_year)
    SELECT COALESCE(MAX(id), 0) + 1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8 FROM reviews
    RETURNING id
";

pub struct SqliteReviewStore {
    path: PathBuf,
}

impl SqliteReviewStore {
    /// Opens the database at `path`, creating the file and the review table if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        store.connect()?.execute_batch(CREATE_TABLE)?;
        info!("Review store ready at {}", store.path.display());
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    fn query(&self, sql: &str, dealer_id: Option<i64>) -> Result<Vec<Review>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = match dealer_id {
            Some(dealer_id) => stmt.query_map(params![dealer_id], review_from_row)?,
            None => stmt.query_map([], review_from_row)?,
        };
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn review_from_row(row: &Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        name: row.get(1)?,
        dealership: row.get(2)?,
        review: row.get(3)?,
        purchase: row.get(4)?,
        purchase_date: row.get(5)?,
        car_make: row.get(6)?,
        car_model: row.get(7)?,
        car_year: row.get(8)?,
    })
}

impl ReviewStore for SqliteReviewStore {
    fn reset_and_seed(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let removed = tx.execute("DELETE FROM reviews", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO reviews (id, name, dealership, review, purchase, \
                 purchase_date, car_make, car_model, car_year) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;
            for review in reviews {
                stmt.execute(params![
                    review.id,
                    review.name,
                    review.dealership,
                    review.review,
                    review.purchase,
                    review.purchase_date,
                    review.car_make,
                    review.car_model,
                    review.car_year,
                ])?;
            }
        }
        tx.commit()?;

        debug!("Removed {} stale reviews, seeded {}", removed, reviews.len());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Review>, StoreError> {
        self.query(&format!("{SELECT_REVIEWS} ORDER BY id"), None)
    }

    fn find_by_dealer(&self, dealer_id: i64) -> Result<Vec<Review>, StoreError> {
        self.query(
            &format!("{SELECT_REVIEWS} WHERE dealership = ?1 ORDER BY id"),
            Some(dealer_id),
        )
    }

    fn insert(&self, draft: ReviewDraft) -> Result<Review, StoreError> {
        let conn = self.connect()?;
        let id: i64 = conn.query_row(
            INSERT_NEXT,
            params![
                draft.name,
                draft.dealership,
                draft.review,
                draft.purchase,
                draft.purchase_date,
                draft.car_make,
                draft.car_model,
                draft.car_year,
            ],
            |row| row.get(0),
        )?;
        Ok(draft.into_review(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn store() -> (TempDir, SqliteReviewStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteReviewStore::open(dir.path().join("reviews.sqlite")).unwrap();
        (dir, store)
    }

    fn draft(dealership: i64) -> ReviewDraft {
        ReviewDraft {
            name: "Upton Foxcroft".to_string(),
            dealership,
            review: "Fantastic services".to_string(),
            purchase: true,
            purchase_date: Some("02/16/2021".to_string()),
            car_make: Some("Mazda".to_string()),
            car_model: Some("MX-5".to_string()),
            car_year: Some(2019),
        }
    }

    fn seeded(id: i64, dealership: i64) -> Review {
        draft(dealership).into_review(id)
    }

    #[test]
    fn inserts_into_an_empty_store_count_up_from_one() {
        let (_dir, store) = store();

        let ids: Vec<i64> = (0..5)
            .map(|_| store.insert(draft(10)).unwrap().id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_follows_the_highest_seeded_id() {
        let (_dir, store) = store();
        store
            .reset_and_seed(&[seeded(1, 10), seeded(3, 20)])
            .unwrap();

        let inserted = store.insert(draft(10)).unwrap();

        assert_eq!(inserted.id, 4);
        let for_dealer: Vec<i64> = store
            .find_by_dealer(10)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(for_dealer, vec![1, 4]);
    }

    #[test]
    fn insert_returns_what_was_stored() {
        let (_dir, store) = store();

        let inserted = store.insert(draft(7)).unwrap();

        assert_eq!(store.find_all().unwrap(), vec![inserted]);
    }

    #[test]
    fn reset_and_seed_replaces_previous_contents() {
        let (_dir, store) = store();
        store.reset_and_seed(&[seeded(1, 1), seeded(2, 1)]).unwrap();
        store.insert(draft(1)).unwrap();

        let fresh = vec![seeded(10, 3), seeded(11, 4)];
        store.reset_and_seed(&fresh).unwrap();

        assert_eq!(store.find_all().unwrap(), fresh);
    }

    #[test]
    fn optional_fields_round_trip_as_absent() {
        let (_dir, store) = store();
        let bare = ReviewDraft {
            name: "Anon".to_string(),
            dealership: 2,
            review: "ok".to_string(),
            ..ReviewDraft::default()
        };

        let inserted = store.insert(bare).unwrap();

        let stored = &store.find_all().unwrap()[0];
        assert_eq!(stored, &inserted);
        assert!(!stored.purchase);
        assert_eq!(stored.car_make, None);
        assert_eq!(stored.car_year, None);
    }

    #[test]
    fn find_by_dealer_with_no_reviews_is_empty() {
        let (_dir, store) = store();
        store.reset_and_seed(&[seeded(1, 10)]).unwrap();

        assert!(store.find_by_dealer(99).unwrap().is_empty());
    }

    #[test]
    fn duplicate_seed_ids_are_rejected_without_losing_the_old_contents() {
        let (_dir, store) = store();
        store.reset_and_seed(&[seeded(1, 1)]).unwrap();

        let result = store.reset_and_seed(&[seeded(5, 1), seeded(5, 2)]);

        assert!(matches!(result, Err(StoreError::Sqlite(_))));
        assert_eq!(store.find_all().unwrap(), vec![seeded(1, 1)]);
    }

    #[test]
    fn concurrent_inserts_get_distinct_ids() {
        let (_dir, store) = store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(draft(i)).unwrap().id)
            })
            .collect();
        let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }
}
