use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use livedoc::{Cli, Generator, gh_action};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting livedoc");

    let result = cli
        .into_config()
        .and_then(|config| Generator::new(config).generate());

    match result {
        Ok(path) => {
            if let Err(e) = gh_action::set_output("pdf-path", &path.to_string_lossy()) {
                tracing::error!(error = ?e, "failed to record action output");
                gh_action::set_failed(&format!("Failed to record pdf-path output. Error: {e:#}"));
                return ExitCode::FAILURE;
            }
            tracing::info!(path = %path.display(), "PDF generated successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            gh_action::set_failed(&format!("Failed to generate PDF. Error: {e}"));
            ExitCode::from(e.exit_code())
        }
    }
}
