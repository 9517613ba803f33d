//! # Reviews By Dealership
//!
//! Backs `GET /fetchReviews/dealer/{id}`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the dealership id as a path segment.
//!
//! 2.  **Id Parsing**: `fetch_dealer_reviews` parses the segment as an integer, the type
//!     reviews store their `dealership` under. A segment that is not an integer cannot match
//!     any review and short-circuits to an empty result without touching the store.
//!
//! 3.  **Store Query**: the lookup runs on the blocking pool through `store::run`.
//!
//! 4.  **HTTP Response**: the matching reviews are serialized as a JSON array. Store failures
//!     are logged and mapped to `ApiError::Fetch`.

use crate::error::ApiError;
use crate::state::AppState;
use crate::store;
use actix_web::{web, HttpResponse};
use common::model::review::Review;
use log::{debug, error};

/// Actix web handler for the `GET /fetchReviews/dealer/{id}` endpoint.
///
/// # Arguments
/// * `state` - Shared application state holding the review store.
/// * `dealer_id` - The dealership id from the URL path.
///
/// # Returns
/// - `200 OK` with a JSON array of the dealership's reviews. Empty when the dealership has
///   none, or when the id is not an integer.
/// - `500 Internal Server Error` if the store query fails.
pub async fn process(
    state: web::Data<AppState>,
    dealer_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let reviews = fetch_dealer_reviews(&state, &dealer_id).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

async fn fetch_dealer_reviews(state: &AppState, dealer_id: &str) -> Result<Vec<Review>, ApiError> {
    let Ok(dealer_id) = dealer_id.parse::<i64>() else {
        debug!("Dealer id {:?} is not an integer, no reviews match", dealer_id);
        return Ok(Vec::new());
    };

    store::run(state.reviews.clone(), move |store| store.find_by_dealer(dealer_id))
        .await
        .map_err(|e| {
            error!("Error fetching reviews for dealer {}: {}", dealer_id, e);
            ApiError::Fetch(e)
        })
}
