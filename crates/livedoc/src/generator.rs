use std::path::PathBuf;

use livedoc_export::{Renderer, TemplateResolver, build_pdf, output};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;

/// Runs the whole pipeline for one configuration:
/// validate, render, optionally dump HTML, emit, write.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the PDF and return where it was written.
    pub fn generate(&self) -> Result<PathBuf, GenerateError> {
        let config = &self.config;
        tracing::info!(
            input = %config.pdf_ready_json.display(),
            output = %config.output_path.display(),
            "generating PDF"
        );

        let document = livedoc_core::validate_file(&config.pdf_ready_json)?;
        tracing::debug!(
            title = %document.meta.document_title,
            stories = document.content.user_stories.len(),
            "document validated"
        );

        let resolver = TemplateResolver::new(config.template_dir.as_deref());
        let renderer = Renderer::new(&resolver)?;
        let html = renderer.render(&document)?;

        if config.debug_html {
            output::write_debug_html(&config.output_path, &html)?;
        }

        let pdf = build_pdf(&html);
        output::write_pdf(&config.output_path, &pdf)?;

        Ok(config.output_path.clone())
    }
}
