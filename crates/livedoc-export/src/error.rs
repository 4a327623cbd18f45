use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(
        "Template error: Template '{name}' not found. Check template_dir path or use default templates."
    )]
    NotFound { name: String },

    #[error("Template error: Template '{name}' could not be read: {source}")]
    Unreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: Syntax error in '{name}'{}. Fix template syntax.", line_suffix(.line))]
    Syntax {
        name: String,
        line: Option<usize>,
        message: String,
    },

    #[error("Template error: Rendering '{name}' failed: {message}")]
    Render { name: String, message: String },

    #[error("Template error: document could not be bound to template context: {0}")]
    Context(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed writing {} to {}: {source}", .what, .path.display())]
    Io {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
