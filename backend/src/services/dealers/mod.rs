//! Dealership routes. All three answer from the in-memory directory and never reach the
//! review store.

mod fetch;
mod fetch_by_id;
mod fetch_by_state;

use actix_web::web::{get, ServiceConfig};

pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/fetchDealers", get().to(fetch::process))
        .route("/fetchDealers/{state}", get().to(fetch_by_state::process))
        .route("/fetchDealer/{id}", get().to(fetch_by_id::process));
}
