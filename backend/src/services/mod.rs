//! # HTTP routes
//!
//! Every route sits at the root path, matching the paths existing clients already call.
//!
//! | Method | Path                        | Handler                        |
//! |--------|-----------------------------|--------------------------------|
//! | GET    | `/`                         | `home::process`                |
//! | GET    | `/fetchReviews`             | `reviews::fetch`               |
//! | GET    | `/fetchReviews/dealer/{id}` | `reviews::fetch_by_dealer`     |
//! | POST   | `/insert_review`            | `reviews::insert`              |
//! | GET    | `/fetchDealers`             | `dealers::fetch`               |
//! | GET    | `/fetchDealers/{state}`     | `dealers::fetch_by_state`      |
//! | GET    | `/fetchDealer/{id}`         | `dealers::fetch_by_id`         |
//!
//! Review routes read and write the review store. Dealer routes only read the in-memory
//! directory and keep working when the store is failing.

mod dealers;
mod home;
mod reviews;

#[cfg(test)]
mod test_support;

use actix_web::web::{get, ServiceConfig};

/// Registers every route on an actix `App`.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/", get().to(home::process))
        .configure(reviews::configure_routes)
        .configure(dealers::configure_routes);
}
