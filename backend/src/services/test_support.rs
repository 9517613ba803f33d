//! Fixtures shared by the handler tests.

use crate::directory::DealershipDirectory;
use crate::error::StoreError;
use crate::state::AppState;
use crate::store::ReviewStore;
use actix_web::web;
use common::model::dealership::DealershipsFile;
use common::model::review::{Review, ReviewDraft};
use serde_json::json;
use std::sync::Arc;

fn unavailable() -> StoreError {
    StoreError::Sqlite(rusqlite::Error::InvalidPath("/unreachable/reviews.sqlite".into()))
}

/// A store whose every operation fails, for exercising the 500 paths.
pub struct FailingStore;

impl ReviewStore for FailingStore {
    fn reset_and_seed(&self, _reviews: &[Review]) -> Result<(), StoreError> {
        Err(unavailable())
    }

    fn find_all(&self) -> Result<Vec<Review>, StoreError> {
        Err(unavailable())
    }

    fn find_by_dealer(&self, _dealer_id: i64) -> Result<Vec<Review>, StoreError> {
        Err(unavailable())
    }

    fn insert(&self, _draft: ReviewDraft) -> Result<Review, StoreError> {
        Err(unavailable())
    }
}

pub fn review(id: i64, dealership: i64) -> Review {
    ReviewDraft {
        name: format!("Reviewer {id}"),
        dealership,
        review: "Great service".to_string(),
        purchase: true,
        purchase_date: Some("07/11/2020".to_string()),
        car_make: Some("Audi".to_string()),
        car_model: Some("A6".to_string()),
        car_year: Some(2010),
    }
    .into_review(id)
}

pub fn dealerships() -> DealershipDirectory {
    let file: DealershipsFile = serde_json::from_value(json!({
        "dealerships": [
            {"id": 1, "city": "El Paso", "state": "Texas", "st": "TX",
             "full_name": "Holdlamis Car Dealership"},
            {"id": 5, "city": "Fresno", "state": "California", "st": "CA",
             "full_name": "Temp Car Dealership"},
            {"id": 9, "city": "Oakland", "state": "california", "st": "CA",
             "full_name": "Sub-Ex Car Dealership"}
        ]
    }))
    .unwrap();
    DealershipDirectory::new(file.dealerships)
}

pub fn state(store: impl ReviewStore + 'static) -> web::Data<AppState> {
    web::Data::new(AppState::new(Arc::new(store), dealerships()))
}
