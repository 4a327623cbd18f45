//! Transforms callable from templates.

use std::collections::HashMap;

use pulldown_cmark::{Event, Options, Parser, Tag, html};
use tera::Value;

/// Link and image schemes kept as written; any other scheme becomes `#`.
const SAFE_URL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// strftime pattern used when a template does not pass one: `YYYY-MM-DD HH:mm`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Convert markdown to HTML.
///
/// Blank input yields an empty string. Section bodies come from upstream
/// data, so raw HTML is emitted as escaped text and link or image
/// destinations with a scheme outside [`SAFE_URL_SCHEMES`] are replaced.
pub fn markdown_to_html(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return String::new();
    };

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id })
            if !is_safe_destination(&dest_url) =>
        {
            tracing::warn!(url = %dest_url, "dropping unsafe link destination");
            Event::Start(Tag::Link { link_type, dest_url: "#".into(), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id })
            if !is_safe_destination(&dest_url) =>
        {
            tracing::warn!(url = %dest_url, "dropping unsafe image source");
            Event::Start(Tag::Image { link_type, dest_url: "#".into(), title, id })
        }
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Relative destinations are safe; absolute ones need an allowed scheme.
/// Whitespace and control characters are ignored, as browsers do.
fn is_safe_destination(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => SAFE_URL_SCHEMES
            .iter()
            .any(|scheme| cleaned[..end].eq_ignore_ascii_case(scheme)),
        _ => true,
    }
}

/// Format an ISO 8601 timestamp with a strftime pattern.
///
/// The wall-clock time in the timestamp's own offset is used; a trailing
/// `Z` is read as `+00:00`. Blank or unparseable input gives an empty
/// string so that one bad timestamp cannot abort a whole render.
pub fn format_timestamp(timestamp: Option<&str>, format: Option<&str>) -> String {
    let Some(raw) = timestamp.map(str::trim).filter(|t| !t.is_empty()) else {
        return String::new();
    };
    let format = format.unwrap_or(DEFAULT_DATETIME_FORMAT);

    let normalized = match raw.strip_suffix(['Z', 'z']) {
        Some(prefix) => format!("{prefix}+00:00"),
        None => raw.to_string(),
    };

    let datetime = match normalized.parse::<jiff::civil::DateTime>() {
        Ok(dt) => dt,
        Err(e) => {
            tracing::warn!(timestamp = raw, error = %e, "failed to parse timestamp");
            return String::new();
        }
    };

    match jiff::fmt::strtime::format(format, datetime) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!(timestamp = raw, format, error = %e, "failed to format timestamp");
            String::new()
        }
    }
}

/// Tera adapter for [`markdown_to_html`]: `{{ text | markdown | safe }}`.
pub fn markdown(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::Null => Ok(Value::String(String::new())),
        Value::String(text) => Ok(Value::String(markdown_to_html(Some(text)))),
        other => Err(tera::Error::msg(format!(
            "filter `markdown` expects a string, got {other}"
        ))),
    }
}

/// Tera adapter for [`format_timestamp`]:
/// `{{ ts | format_datetime }}` or `{{ ts | format_datetime(format="%B %d, %Y") }}`.
pub fn format_datetime(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let format = match args.get("format") {
        None => None,
        Some(Value::String(f)) => Some(f.as_str()),
        Some(other) => {
            return Err(tera::Error::msg(format!(
                "filter `format_datetime` expects a string `format`, got {other}"
            )));
        }
    };
    Ok(Value::String(format_timestamp(value.as_str(), format)))
}
