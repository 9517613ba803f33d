use crate::error::ApiError;
use crate::state::AppState;
use crate::store;
use actix_web::{web, HttpResponse};
use common::model::review::Review;
use log::error;

/// Actix web handler for the `GET /fetchReviews` endpoint.
///
/// # Returns
/// - `200 OK` with a JSON array of every stored review, ordered by id.
/// - `500 Internal Server Error` with `{"error": "Error fetching documents"}` if the store
///   query fails. No partial results are returned.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let reviews = fetch_reviews(&state).await?;
    Ok(HttpResponse::Ok().json(reviews))
}

async fn fetch_reviews(state: &AppState) -> Result<Vec<Review>, ApiError> {
    store::run(state.reviews.clone(), |store| store.find_all())
        .await
        .map_err(|e| {
            error!("Error fetching reviews: {}", e);
            ApiError::Fetch(e)
        })
}
