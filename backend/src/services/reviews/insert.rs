//! # Review Insertion
//!
//! `POST /insert_review` accepts a raw body of any content type. The body is parsed and
//! shaped by `draft::parse_draft` before the store is touched, so a malformed payload is
//! answered with `400 Bad Request` and leaves the store unchanged.
//!
//! The store assigns the id (highest stored id plus one, `1` when empty) and the handler
//! answers with the review exactly as stored.

use super::draft::parse_draft;
use crate::error::ApiError;
use crate::state::AppState;
use crate::store;
use actix_web::{web, HttpResponse};
use common::model::review::Review;
use log::{error, info, warn};

/// Actix web handler for the `POST /insert_review` endpoint.
///
/// # Arguments
/// * `state` - Shared application state holding the review store.
/// * `body` - The raw request body. Read regardless of the `Content-Type` header.
///
/// # Returns
/// - `200 OK` with the stored review, assigned `id` included, as a JSON object.
/// - `400 Bad Request` if the body is not JSON or does not shape into a draft. The store is
///   not touched.
/// - `500 Internal Server Error` with `{"error": "Error inserting review"}` if the store
///   write fails.
pub async fn process(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let review = insert_review(&state, &body).await?;
    Ok(HttpResponse::Ok().json(review))
}

async fn insert_review(state: &AppState, body: &[u8]) -> Result<Review, ApiError> {
    let draft = parse_draft(body).inspect_err(|e| warn!("Rejected review payload: {}", e))?;

    let review = store::run(state.reviews.clone(), move |store| store.insert(draft))
        .await
        .map_err(|e| {
            error!("Error inserting review: {}", e);
            ApiError::Insert(e)
        })?;

    info!(
        "Inserted review {} for dealership {}",
        review.id, review.dealership
    );
    Ok(review)
}
