//! Shapes the untyped body of `POST /insert_review` into a `ReviewDraft`.
//!
//! `name`, `dealership` and `review` are required. `purchase` defaults to `false` and the
//! remaining fields are stored as absent when missing or `null`. Integer fields also accept
//! a string holding an integer, since form-driven clients tend to send them that way.
//! Unknown fields are dropped.

use crate::error::DraftError;
use common::model::review::ReviewDraft;
use serde_json::{Map, Value};

pub fn parse_draft(body: &[u8]) -> Result<ReviewDraft, DraftError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| DraftError::InvalidJson)?;
    let Value::Object(fields) = value else {
        return Err(DraftError::NotAnObject);
    };

    Ok(ReviewDraft {
        name: required("name", string_field(&fields, "name")?)?,
        dealership: required("dealership", integer_field(&fields, "dealership")?)?,
        review: required("review", string_field(&fields, "review")?)?,
        purchase: bool_field(&fields, "purchase")?.unwrap_or(false),
        purchase_date: string_field(&fields, "purchase_date")?,
        car_make: string_field(&fields, "car_make")?,
        car_model: string_field(&fields, "car_model")?,
        car_year: integer_field(&fields, "car_year")?,
    })
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, DraftError> {
    value.ok_or(DraftError::MissingField(field))
}

fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|value| !value.is_null())
}

fn string_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DraftError> {
    match present(fields, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DraftError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn integer_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, DraftError> {
    let integer = match present(fields, field) {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    };
    integer.map(Some).ok_or(DraftError::WrongType {
        field,
        expected: "an integer",
    })
}

fn bool_field(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, DraftError> {
    match present(fields, field) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(DraftError::WrongType {
            field,
            expected: "a boolean",
        }),
    }
}
