use serde_json::Value;

use crate::error::CoreError;

/// The only document schema version this build accepts.
pub const SCHEMA_VERSION: &str = "1.0";

/// File name of the schema artifact, as shipped under `schemas/`.
pub const SCHEMA_FILE_NAME: &str = "pdf_ready_v1.0.json";

/// Raw text of the schema artifact, embedded at compile time.
pub const SCHEMA_SOURCE: &str = include_str!("../schemas/pdf_ready_v1.0.json");

/// Keys every JSON Schema document must expose.
const REQUIRED_KEYS: [&str; 3] = ["$schema", "type", "properties"];

/// Top-level properties a `pdf_ready` schema must declare.
pub const TOP_LEVEL_PROPERTIES: [&str; 3] = ["schema_version", "meta", "content"];

/// Parse the embedded schema artifact.
pub fn load_schema() -> Result<Value, CoreError> {
    let schema: Value = serde_json::from_str(SCHEMA_SOURCE)?;
    verify_schema_artifact(&schema)?;
    Ok(schema)
}

/// Check the packaging invariant of a schema artifact: it is a JSON Schema
/// document whose `properties` expose `schema_version`, `meta` and `content`.
pub fn verify_schema_artifact(schema: &Value) -> Result<(), CoreError> {
    for key in REQUIRED_KEYS {
        if schema.get(key).is_none() {
            return Err(CoreError::SchemaMissingKey(key.to_string()));
        }
    }

    let properties = schema.get("properties").and_then(Value::as_object);
    for prop in TOP_LEVEL_PROPERTIES {
        if !properties.is_some_and(|p| p.contains_key(prop)) {
            return Err(CoreError::SchemaMissingProperty(prop.to_string()));
        }
    }

    Ok(())
}
