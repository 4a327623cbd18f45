//! livedoc library root.
//!
//! The CLI binary is a thin shell over these modules so that integration
//! tests can drive the whole pipeline without spawning a process.

pub mod config;
pub mod error;
pub mod generator;
pub mod gh_action;

pub use config::{Cli, GeneratorConfig};
pub use error::GenerateError;
pub use generator::Generator;
