use livedoc_core::{FailureKind, ValidationError};
use livedoc_export::{ExportError, TemplateError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl GenerateError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Export(_) => 1,
            Self::Validation(e) => match e.kind() {
                FailureKind::Schema => 2,
                FailureKind::Input | FailureKind::Internal => 1,
            },
            Self::Template(_) => 3,
        }
    }
}
