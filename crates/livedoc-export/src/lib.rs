//! livedoc-export
//!
//! Template resolution, HTML rendering and PDF container emission for
//! validated `pdf_ready` documents.

pub mod error;
pub mod filters;
pub mod output;
pub mod pdf;
pub mod render;
pub mod template;

pub use error::{ExportError, TemplateError};
pub use pdf::build_pdf;
pub use render::Renderer;
pub use template::{ROOT_TEMPLATE, TemplateResolver};
