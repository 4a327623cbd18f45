use tera::{Context, ErrorKind, Tera};

use livedoc_core::SchemaDocument;

use crate::error::TemplateError;
use crate::filters;
use crate::template::{ROOT_TEMPLATE, ResolvedTemplate, TemplateResolver};

/// Renders a validated document to HTML.
///
/// All templates reachable through the resolver are resolved and compiled
/// once, at construction. The instance can then render any number of
/// documents; it holds no other state.
pub struct Renderer {
    tera: Tera,
    templates: Vec<ResolvedTemplate>,
}

impl Renderer {
    pub fn new(resolver: &TemplateResolver) -> Result<Self, TemplateError> {
        let templates = resolver
            .names()?
            .iter()
            .map(|name| resolver.resolve(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut tera = Tera::default();
        // Every template escapes interpolated values; `| safe` opts out.
        tera.autoescape_on(vec![""]);
        tera.set_escape_fn(escape_html);
        tera.register_filter("markdown", filters::markdown);
        tera.register_filter("format_datetime", filters::format_datetime);

        tera.add_raw_templates(templates.iter().map(|t| (t.name.as_str(), t.body.as_str())))
            .map_err(|e| classify(&e, ROOT_TEMPLATE))?;

        tracing::debug!(templates = templates.len(), "renderer initialized");
        Ok(Self { tera, templates })
    }

    /// The resolved templates this renderer was compiled from.
    pub fn templates(&self) -> &[ResolvedTemplate] {
        &self.templates
    }

    pub fn template(&self, name: &str) -> Option<&ResolvedTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Render the root template with the whole document as its scope.
    pub fn render(&self, document: &SchemaDocument) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(document).map_err(|e| TemplateError::Context(e.to_string()))?;

        let html = self.tera.render(ROOT_TEMPLATE, &context).map_err(|e| {
            let err = classify(&e, ROOT_TEMPLATE);
            tracing::error!("{err}");
            err
        })?;

        tracing::info!(characters = html.len(), "template rendered successfully");
        Ok(html)
    }
}

/// HTML escaping for interpolated values. Unlike Tera's default, `/` is
/// left alone so URLs stay readable.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Map a Tera error chain onto a [`TemplateError`].
fn classify(err: &tera::Error, template: &str) -> TemplateError {
    let mut messages = Vec::new();
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);

    while let Some(e) = current {
        if let Some(tera_err) = e.downcast_ref::<tera::Error>() {
            match &tera_err.kind {
                ErrorKind::TemplateNotFound(name) => {
                    return TemplateError::NotFound {
                        name: name.trim_matches(['[', ']']).to_string(),
                    };
                }
                ErrorKind::MissingParent { parent, .. } => {
                    return TemplateError::NotFound {
                        name: parent.clone(),
                    };
                }
                _ => {}
            }
        }
        messages.push(e.to_string());
        current = e.source();
    }

    let message = messages.join(": ");
    match parse_failure_name(&message) {
        Some(name) => TemplateError::Syntax {
            name: name.to_string(),
            line: parse_failure_line(&message),
            message,
        },
        None => TemplateError::Render {
            name: template.to_string(),
            message,
        },
    }
}

/// Template name from Tera's `Failed to parse '<name>'` wrapper.
fn parse_failure_name(message: &str) -> Option<&str> {
    let start = message.find("Failed to parse '")? + "Failed to parse '".len();
    let len = message[start..].find('\'')?;
    Some(&message[start..start + len])
}

/// Line number from the parser's ` --> line:column` marker.
fn parse_failure_line(message: &str) -> Option<usize> {
    let start = message.find("--> ")? + "--> ".len();
    let digits: String = message[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
