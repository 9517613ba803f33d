use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dealership as read from the dealerships source file.
///
/// Only `id` and `state` take part in lookups. The whole source object is kept, keys in
/// their original order, and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Dealership {
    id: i64,
    state: String,
    fields: Map<String, Value>,
}

impl Dealership {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Any field of the source object, `id` and `state` included.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl TryFrom<Map<String, Value>> for Dealership {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = fields
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| "dealership `id` must be an integer".to_string())?;
        let state = fields
            .get("state")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("dealership {} has no `state` string", id))?
            .to_string();
        Ok(Self { id, state, fields })
    }
}

impl From<Dealership> for Map<String, Value> {
    fn from(dealership: Dealership) -> Self {
        dealership.fields
    }
}

/// Top-level shape of the dealerships source file: `{ "dealerships": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealershipsFile {
    pub dealerships: Vec<Dealership>,
}
