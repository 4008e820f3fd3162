//! Reading and validating the record container.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SeedError};

/// Top-level key holding the records.
pub const RECORDS_KEY: &str = "diseases";

/// Read a UTF-8 JSON document from `path`.
pub fn read_container(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| SeedError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SeedError::MalformedInput(format!("{} is not valid JSON: {}", path.display(), e))
    })
}

/// Extract the record array from a container.
///
/// The container must be an object whose `diseases` key holds a non-empty
/// array. Other top-level keys are ignored.
pub fn parse_container(container: Value) -> Result<Vec<Value>> {
    let mut map = match container {
        Value::Object(map) => map,
        other => {
            return Err(SeedError::MalformedInput(format!(
                "expected a JSON object with a top-level `{RECORDS_KEY}` array, found {}",
                kind(&other)
            )));
        }
    };

    match map.remove(RECORDS_KEY) {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items),
        Some(Value::Array(_)) => Err(SeedError::MalformedInput(format!(
            "`{RECORDS_KEY}` contains no entries"
        ))),
        Some(other) => Err(SeedError::MalformedInput(format!(
            "`{RECORDS_KEY}` must be an array, found {}",
            kind(&other)
        ))),
        None => Err(SeedError::MalformedInput(format!(
            "missing top-level `{RECORDS_KEY}` array"
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn assert_malformed(container: Value) {
        let err = parse_container(container).unwrap_err();
        assert!(matches!(err, SeedError::MalformedInput(_)), "got {err:?}");
    }

    #[test]
    fn test_parse_valid_container() {
        let items = parse_container(json!({
            "version": 2,
            "diseases": [{"name": "Rabies"}, {"name": "Anthrax"}],
        }))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["name"], "Anthrax");
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert_malformed(json!([{"name": "Rabies"}]));
        assert_malformed(json!("diseases"));
        assert_malformed(json!({"records": [{"name": "Rabies"}]}));
        assert_malformed(json!({"diseases": {"name": "Rabies"}}));
        assert_malformed(json!({"diseases": null}));
    }

    #[test]
    fn test_rejects_empty_sequence() {
        assert_malformed(json!({"diseases": []}));
    }

    #[test]
    fn test_read_invalid_json() {
        let path = std::env::temp_dir().join(format!("animora-invalid-{}.json", std::process::id()));
        fs::write(&path, "{\"diseases\": [").unwrap();

        let err = read_container(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, SeedError::MalformedInput(_)));
    }

    #[test]
    fn test_read_missing_file() {
        let path = Path::new("/nonexistent/animora/diseases.json");

        let err = read_container(path).unwrap_err();
        assert!(matches!(err, SeedError::InputFile { .. }));
    }
}
