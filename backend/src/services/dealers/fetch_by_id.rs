use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use log::debug;

/// Actix web handler for the `GET /fetchDealer/{id}` endpoint.
///
/// The path id is compared to the decimal form of each dealership id, so `/fetchDealer/5`
/// finds the dealership stored with the number `5`.
///
/// # Returns
/// - `200 OK` with the dealership as a JSON object.
/// - `200 OK` with a JSON `null` when no dealership has that id. A miss is not an error.
pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> impl Responder {
    let dealer = state.dealerships.find_by_id(&id);
    if dealer.is_none() {
        debug!("No dealership with id {:?}", id.as_str());
    }
    HttpResponse::Ok().json(dealer)
}
