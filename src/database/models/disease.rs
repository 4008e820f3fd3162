//! Disease record model.

use mongodb::bson::{self, Document};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::error::{Result, SeedError};

/// Field used as the natural key of a disease record.
pub const NAME_FIELD: &str = "name";

/// One entry of a `diseases` array.
///
/// Only `name` is interpreted; everything else (species, symptoms,
/// diagnostic tests, treatment, ...) is carried through as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DiseaseRecord(Map<String, Value>);

impl DiseaseRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's `name` if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_FIELD).and_then(Value::as_str)
    }

    /// Whether a `name` key exists at all, whatever its type.
    pub fn has_name_field(&self) -> bool {
        self.0.contains_key(NAME_FIELD)
    }

    /// Filter matching the stored record with the same name.
    pub fn key_filter(&self) -> Option<Document> {
        self.name().map(|name| bson::doc! { NAME_FIELD: name })
    }

    /// Convert the whole record to BSON for writing.
    ///
    /// # Errors
    /// Fails with [`SeedError::MalformedInput`] for values BSON cannot hold,
    /// e.g. integers above `i64::MAX`.
    pub fn to_document(&self) -> Result<Document> {
        bson::to_document(&self.0).map_err(|e| {
            SeedError::MalformedInput(format!(
                "record {:?} cannot be stored: {}",
                self.name().unwrap_or("<unnamed>"),
                e
            ))
        })
    }

    /// The record seeded into an empty collection by `seed-sample`.
    pub fn sample() -> Self {
        let mut fields = Map::new();
        fields.insert(NAME_FIELD.to_string(), json!("Foot-and-Mouth Disease"));
        fields.insert("species".to_string(), json!(["Cattle", "Sheep", "Goats"]));
        fields.insert("symptoms".to_string(), json!(["Fever", "Blisters", "Lameness"]));
        Self(fields)
    }
}
