use std::path::Path;

use serde_json::Value;

use crate::diagnostics::{first_violation, format_violation};
use crate::error::ValidationError;
use crate::models::SchemaDocument;
use crate::schema::load_schema;

mod evaluator;
mod violation;

pub use evaluator::collect_violations;
pub use violation::{InstancePath, PathSegment, Rule, RuleTag, Violation, display_value, json_type_name};

/// Validate raw JSON text against the `pdf_ready` v1.0 schema.
pub fn validate(raw: &str) -> Result<SchemaDocument, ValidationError> {
    let value = parse(raw, "Document")?;
    validate_value(value)
}

/// Read a UTF-8 file and validate it.
pub fn validate_file(path: &Path) -> Result<SchemaDocument, ValidationError> {
    if !path.exists() {
        tracing::error!(path = %path.display(), "input file not found");
        return Err(ValidationError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path).map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "failed to read input file");
        ValidationError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let origin = format!("File '{}'", path.display());
    let document = validate_value(parse(&raw, &origin)?)?;
    tracing::info!(path = %path.display(), "schema validation successful");
    Ok(document)
}

/// Validate an already parsed value.
///
/// Every rule is evaluated; only the highest-priority violation is reported.
pub fn validate_value(value: Value) -> Result<SchemaDocument, ValidationError> {
    let schema = load_schema()?;
    let violations = collect_violations(&schema, &value)?;

    if let Some(violation) = first_violation(&violations) {
        let message = format_violation(violation);
        tracing::error!(
            violations = violations.len(),
            "schema validation failed: {message}"
        );
        return Err(ValidationError::Schema { message });
    }

    // Every schema-conforming value maps onto the model; this only fires if
    // the two drift apart.
    serde_json::from_value(value).map_err(|e| ValidationError::Schema {
        message: format!("{e} at root"),
    })
}

fn parse(raw: &str, origin: &str) -> Result<Value, ValidationError> {
    serde_json::from_str(raw).map_err(|source| {
        tracing::error!(origin, error = %source, "invalid JSON");
        ValidationError::Parse {
            origin: origin.to_string(),
            line: source.line(),
            column: source.column(),
            source,
        }
    })
}
