//! Boot-time loading of the two static source files.
//!
//! Both files must be present and parse completely. There is no partial startup: a
//! `DatasetError` here stops the process before the server binds.

use crate::error::DatasetError;
use common::model::dealership::{Dealership, DealershipsFile};
use common::model::review::{Review, ReviewsFile};
use log::info;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// The parsed contents of both source files.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub reviews: Vec<Review>,
    pub dealerships: Vec<Dealership>,
}

impl Datasets {
    pub fn load(reviews_path: &Path, dealerships_path: &Path) -> Result<Self, DatasetError> {
        let reviews: ReviewsFile = read_json(reviews_path)?;
        let dealerships: DealershipsFile = read_json(dealerships_path)?;

        info!(
            "Loaded {} reviews from {} and {} dealerships from {}",
            reviews.reviews.len(),
            reviews_path.display(),
            dealerships.dealerships.len(),
            dealerships_path.display()
        );

        Ok(Self {
            reviews: reviews.reviews,
            dealerships: dealerships.dealerships,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
