//! GitHub Actions workflow-command glue.

use std::io::Write as _;
use std::path::Path;

use eyre::WrapErr as _;

/// Append `name` to the step outputs file named by `GITHUB_OUTPUT`.
/// Outside of Actions the variable is unset and this does nothing.
pub fn set_output(name: &str, value: &str) -> eyre::Result<()> {
    let Some(path) = std::env::var_os("GITHUB_OUTPUT").filter(|p| !p.is_empty()) else {
        tracing::debug!(name, value, "GITHUB_OUTPUT not set, skipping output");
        return Ok(());
    };
    append_output(Path::new(&path), name, value)
}

pub fn append_output(path: &Path, name: &str, value: &str) -> eyre::Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open step outputs at {}", path.display()))?;
    file.write_all(output_entry(name, value).as_bytes())
        .wrap_err_with(|| format!("failed to write step outputs at {}", path.display()))?;
    Ok(())
}

/// Heredoc form, safe for multi-line values.
pub fn output_entry(name: &str, value: &str) -> String {
    format!("{name}<<EOF\n{value}\nEOF\n")
}

/// Mark the step failed with an annotation on stderr.
pub fn set_failed(message: &str) {
    eprintln!("{}", error_command(message));
}

pub fn error_command(message: &str) -> String {
    format!("::error::{message}")
}
