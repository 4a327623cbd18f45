use std::path::PathBuf;

use clap::Parser;

use crate::error::GenerateError;

/// Output location used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "output.pdf";

/// Everything one generation run needs, resolved once at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub pdf_ready_json: PathBuf,
    pub output_path: PathBuf,
    /// Override directory consulted before the built-in templates.
    pub template_dir: Option<PathBuf>,
    /// Also write the rendered HTML next to the output.
    pub debug_html: bool,
    pub verbose: bool,
}

impl GeneratorConfig {
    pub fn new(pdf_ready_json: impl Into<PathBuf>) -> Self {
        Self {
            pdf_ready_json: pdf_ready_json.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            template_dir: None,
            debug_html: false,
            verbose: false,
        }
    }
}

/// Command-line surface. Every flag can also come from the GitHub Actions
/// `INPUT_*` variable of the same name.
#[derive(Debug, Parser)]
#[command(name = "livedoc", version, about = "Render a pdf_ready JSON document to PDF")]
pub struct Cli {
    /// Path to the pdf_ready JSON document.
    #[arg(long, env = "INPUT_PDF_READY_JSON")]
    pub pdf_ready_json: Option<String>,

    /// Where to write the PDF.
    #[arg(long, env = "INPUT_OUTPUT_PATH")]
    pub output_path: Option<String>,

    /// Directory with template overrides.
    #[arg(long, env = "INPUT_TEMPLATE_DIR")]
    pub template_dir: Option<String>,

    /// Save the rendered HTML as `<output>.debug.html`.
    #[arg(long, env = "INPUT_DEBUG_HTML", num_args = 0..=1, default_missing_value = "true")]
    pub debug_html: Option<String>,

    /// Enable debug logging.
    #[arg(long, env = "INPUT_VERBOSE", num_args = 0..=1, default_missing_value = "true")]
    pub verbose: Option<String>,

    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    pub runner_debug: Option<String>,
}

impl Cli {
    /// Verbosity is needed before logging is installed, so it is exposed
    /// separately from [`Cli::into_config`].
    pub fn verbose(&self) -> bool {
        self.runner_debug.as_deref().map(str::trim) == Some("1") || parse_flag(self.verbose.as_deref())
    }

    pub fn into_config(self) -> Result<GeneratorConfig, GenerateError> {
        let verbose = self.verbose();

        let pdf_ready_json = non_blank(self.pdf_ready_json).ok_or_else(|| {
            GenerateError::Config("pdf_ready_json input is required but was not provided".into())
        })?;

        let output_path = match self.output_path {
            None => DEFAULT_OUTPUT_PATH.to_string(),
            Some(raw) if raw.trim().is_empty() => {
                return Err(GenerateError::Config(
                    "output_path must be a non-empty string".into(),
                ));
            }
            Some(raw) => raw.trim().to_string(),
        };

        Ok(GeneratorConfig {
            pdf_ready_json: PathBuf::from(pdf_ready_json),
            output_path: PathBuf::from(output_path),
            template_dir: non_blank(self.template_dir).map(PathBuf::from),
            debug_html: parse_flag(self.debug_html.as_deref()),
            verbose,
        })
    }
}

/// Boolean input: `true`, `1` and `yes` (any case) are on, anything else is off.
pub fn parse_flag(raw: Option<&str>) -> bool {
    let Some(value) = raw.map(|v| v.trim().to_ascii_lowercase()) else {
        return false;
    };
    match value.as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" | "" => false,
        other => {
            tracing::warn!(value = other, "unrecognized boolean input, treating as false");
            false
        }
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_case_insensitive() {
        for on in ["true", "TRUE", "1", "Yes", " yes "] {
            assert!(parse_flag(Some(on)), "{on}");
        }
        for off in ["false", "0", "NO", "", "maybe"] {
            assert!(!parse_flag(Some(off)), "{off}");
        }
        assert!(!parse_flag(None));
    }
}
