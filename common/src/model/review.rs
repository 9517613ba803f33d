use serde::{Deserialize, Serialize};

/// A persisted customer review of a dealership.
///
/// Seeded reviews keep the `id` they carry in the source dataset. Reviews created through
/// `POST /insert_review` get theirs from the review store, one above the highest id present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    /// Id of the reviewed dealership. Never checked against the dealership dataset.
    pub dealership: i64,
    pub review: String,
    #[serde(default)]
    pub purchase: bool,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub car_make: Option<String>,
    #[serde(default)]
    pub car_model: Option<String>,
    #[serde(default)]
    pub car_year: Option<i64>,
}

/// A client-submitted review that has been shaped into a fixed record but not yet
/// given an id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewDraft {
    pub name: String,
    pub dealership: i64,
    pub review: String,
    pub purchase: bool,
    pub purchase_date: Option<String>,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<i64>,
}

impl ReviewDraft {
    /// Builds the full record once the store has picked an id.
    pub fn into_review(self, id: i64) -> Review {
        Review {
            id,
            name: self.name,
            dealership: self.dealership,
            review: self.review,
            purchase: self.purchase,
            purchase_date: self.purchase_date,
            car_make: self.car_make,
            car_model: self.car_model,
            car_year: self.car_year,
        }
    }
}

/// Top-level shape of the reviews source file: `{ "reviews": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsFile {
    pub reviews: Vec<Review>,
}
