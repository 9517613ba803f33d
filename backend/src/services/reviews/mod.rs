//! Review routes, backed by the review store.
//!
//! - `fetch`: every stored review.
//! - `fetch_by_dealer`: reviews for one dealership.
//! - `insert`: shapes a raw JSON body into a draft and stores it under the next id.

mod draft;
mod fetch;
mod fetch_by_dealer;
mod insert;

use actix_web::web::{get, post, ServiceConfig};

pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/fetchReviews", get().to(fetch::process))
        .route("/fetchReviews/dealer/{id}", get().to(fetch_by_dealer::process))
        .route("/insert_review", post().to(insert::process));
}
