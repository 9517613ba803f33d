//! Error types for loading, storage, and request handling.
//!
//! Handlers return `ApiError`, which actix turns into a JSON `{"error": ...}` body with a
//! status code chosen by `ResponseError::status_code`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read one of the static source files at boot.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of a single operation against the review store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("review store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Why a submitted review body could not be shaped into a draft.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Review payload must be a JSON object")]
    NotAnObject,

    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Error returned by route handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// A read against the store failed.
    #[error("Error fetching documents")]
    Fetch(#[source] StoreError),

    /// The insert path failed after the draft was accepted.
    #[error("Error inserting review")]
    Insert(#[source] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Draft(_) => StatusCode::BAD_REQUEST,
            ApiError::Fetch(_) | ApiError::Insert(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
