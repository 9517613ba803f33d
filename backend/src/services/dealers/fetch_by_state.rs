use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /fetchDealers/{state}` endpoint.
///
/// # Arguments
/// * `state` - Shared application state holding the dealership directory.
/// * `dealer_state` - State name from the URL path. Compared to each dealership's `state`
///   ignoring case, with no partial matching.
///
/// # Returns
/// - `200 OK` with a JSON array of the matching dealerships, empty when none match.
pub async fn process(
    state: web::Data<AppState>,
    dealer_state: web::Path<String>,
) -> impl Responder {
    HttpResponse::Ok().json(state.dealerships.find_by_state(&dealer_state))
}
