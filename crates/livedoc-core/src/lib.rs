//! livedoc-core
//!
//! The `pdf_ready` document model, the versioned schema artifact and the
//! validator that turns raw JSON into a [`SchemaDocument`] or a single
//! actionable diagnostic. No template or PDF dependency.

pub mod diagnostics;
pub mod error;
pub mod models;
pub mod schema;
pub mod validate;

pub use error::{CoreError, FailureKind, ValidationError};
pub use models::SchemaDocument;
pub use validate::{validate, validate_file};
