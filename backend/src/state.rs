//! Shared application state handed to every handler through `web::Data`.

use crate::directory::DealershipDirectory;
use crate::store::ReviewStore;
use std::sync::Arc;

/// The two capabilities the routes read from.
///
/// Dealerships are an immutable in-memory directory; reviews live in the persistent store.
/// They stay separate because only the store can fail or change while the service runs.
#[derive(Clone)]
pub struct AppState {
    pub reviews: Arc<dyn ReviewStore>,
    pub dealerships: Arc<DealershipDirectory>,
}

impl AppState {
    pub fn new(reviews: Arc<dyn ReviewStore>, dealerships: DealershipDirectory) -> Self {
        Self {
            reviews,
            dealerships: Arc::new(dealerships),
        }
    }
}
