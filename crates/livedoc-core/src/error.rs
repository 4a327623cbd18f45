use std::path::PathBuf;

use thiserror::Error;

/// Failures of the embedded schema artifact itself. These indicate a
/// packaging bug, never a problem with the caller's document.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("schema artifact is not valid JSON: {0}")]
    SchemaParse(#[from] serde_json::Error),

    #[error("schema artifact is missing required key: {0}")]
    SchemaMissingKey(String),

    #[error("schema artifact is missing expected property: {0}")]
    SchemaMissingProperty(String),

    #[error("schema artifact has an invalid pattern '{pattern}': {source}")]
    SchemaPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Which class of failure a [`ValidationError`] belongs to. Callers map the
/// two kinds to different exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Missing, unreadable or syntactically invalid input.
    Input,
    /// Well-formed input that breaks a schema rule.
    Schema,
    /// The schema artifact shipped with this crate is broken.
    Internal,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "Invalid input: File '{}' not found. Ensure pdf_ready_json points to a valid file.",
        path.display()
    )]
    FileNotFound { path: PathBuf },

    #[error("Invalid input: File '{}' could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Invalid input: {origin} contains invalid JSON at line {line}, column {column}. \
         Ensure the file is valid JSON."
    )]
    Parse {
        origin: String,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema validation failed: {message}. Ensure JSON follows canonical schema v1.0.")]
    Schema { message: String },

    #[error("Internal error: Schema file not found or invalid. {0}")]
    Internal(#[from] CoreError),
}

impl ValidationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::FileNotFound { .. } | Self::Unreadable { .. } | Self::Parse { .. } => {
                FailureKind::Input
            }
            Self::Schema { .. } => FailureKind::Schema,
            Self::Internal(_) => FailureKind::Internal,
        }
    }

    /// The single human-actionable message of a schema violation.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Schema { message } => Some(message),
            _ => None,
        }
    }
}
