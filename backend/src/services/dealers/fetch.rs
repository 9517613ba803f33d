use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for `GET /fetchDealers`.
///
/// Returns every loaded dealership in source order. Served from memory, so it keeps
/// answering while the review store is unavailable.
pub async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.dealerships.find_all())
}
