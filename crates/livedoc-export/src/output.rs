use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Persist a PDF container at `path`, creating parent directories.
pub fn write_pdf(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    write_atomic(path, bytes, "PDF")?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote PDF");
    Ok(())
}

/// Where the debug HTML for a given output path goes: `<output>.debug.html`.
pub fn debug_html_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().unwrap_or_default().to_os_string();
    name.push(".debug.html");
    output.with_file_name(name)
}

/// Persist the intermediate HTML next to the output for inspection.
pub fn write_debug_html(output: &Path, html: &str) -> Result<PathBuf, ExportError> {
    let path = debug_html_path(output);
    write_atomic(&path, html.as_bytes(), "debug HTML")?;
    tracing::info!(path = %path.display(), "saved debug HTML");
    Ok(path)
}

/// Write through a temporary sibling that is renamed into place, so a
/// failed write never leaves a truncated file at `path`.
fn write_atomic(path: &Path, bytes: &[u8], what: &'static str) -> Result<(), ExportError> {
    let io_err = |source: std::io::Error| {
        tracing::error!(path = %path.display(), error = %source, "failed writing {what}");
        ExportError::Io {
            what,
            path: path.to_path_buf(),
            source,
        }
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_err)?;

    // Same mode a plain `fs::write` would give (0666 minus umask), not the
    // temp file's owner-only default.
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut file = builder.tempfile_in(parent).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    file.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
