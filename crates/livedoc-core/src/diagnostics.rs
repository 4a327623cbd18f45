//! Human-readable messages for schema violations.
//!
//! Each rule kind maps to one or more pure formatters. A formatter either
//! produces the message or returns `None`, in which case dispatch moves on
//! and finally falls back to [`generic`].

use crate::schema::SCHEMA_VERSION;
use crate::validate::{Rule, RuleTag, Violation, display_value, json_type_name};

/// Formats a violation given its rendered path, or declines.
pub type Formatter = fn(&Violation, &str) -> Option<String>;

/// Dispatch table. For a given tag, entries are tried in order.
const FORMATTERS: &[(RuleTag, Formatter)] = &[
    (RuleTag::Required, missing_field),
    (RuleTag::Const, schema_version_mismatch),
    (RuleTag::Format, timestamp_format),
    (RuleTag::Format, url_format),
    (RuleTag::Type, type_mismatch),
    (RuleTag::MinLength, non_empty_string),
    (RuleTag::Pattern, non_empty_string),
    (RuleTag::Pattern, url_pattern),
    (RuleTag::Pattern, other_pattern),
    (RuleTag::MinItems, non_empty_array),
    (RuleTag::Minimum, below_minimum),
];

/// Render the message for a single violation.
pub fn format_violation(violation: &Violation) -> String {
    let path = violation.path.to_string();
    let tag = violation.rule.tag();
    FORMATTERS
        .iter()
        .filter(|(t, _)| *t == tag)
        .find_map(|(_, formatter)| formatter(violation, &path))
        .unwrap_or_else(|| generic(violation, &path))
}

/// Pick the violation to report: lowest rule priority, earliest on ties.
pub fn first_violation(violations: &[Violation]) -> Option<&Violation> {
    violations.iter().min_by_key(|v| v.rule.priority())
}

pub fn generic(violation: &Violation, path: &str) -> String {
    format!("{} at {path}", violation.native_message())
}

pub fn missing_field(violation: &Violation, path: &str) -> Option<String> {
    match &violation.rule {
        Rule::Required { property } => Some(format!("Missing required field '{property}' at {path}")),
        _ => None,
    }
}

pub fn schema_version_mismatch(violation: &Violation, _path: &str) -> Option<String> {
    if !matches!(violation.rule, Rule::Const { .. })
        || violation.path.last_key() != Some("schema_version")
    {
        return None;
    }
    Some(format!(
        "Invalid schema_version: expected '{SCHEMA_VERSION}', got '{}'",
        display_value(&violation.instance)
    ))
}

pub fn timestamp_format(violation: &Violation, path: &str) -> Option<String> {
    match &violation.rule {
        Rule::Format { format } if format == "date-time" => Some(format!(
            "'{path}' is not a valid ISO 8601 timestamp. Use format: YYYY-MM-DDTHH:MM:SSZ"
        )),
        _ => None,
    }
}

pub fn url_format(violation: &Violation, path: &str) -> Option<String> {
    match &violation.rule {
        Rule::Format { format } if format == "uri" => Some(invalid_url(path)),
        _ => None,
    }
}

pub fn type_mismatch(violation: &Violation, path: &str) -> Option<String> {
    match &violation.rule {
        Rule::Type { expected } => Some(format!(
            "'{path}' must be of type {}, got {}",
            expected.join(" or "),
            json_type_name(&violation.instance)
        )),
        _ => None,
    }
}

pub fn non_empty_string(violation: &Violation, path: &str) -> Option<String> {
    let applies = matches!(violation.rule, Rule::MinLength { .. })
        || violation.rule.is_non_blank_pattern();
    applies.then(|| format!("'{path}' must be a non-empty string"))
}

pub fn url_pattern(violation: &Violation, path: &str) -> Option<String> {
    match &violation.rule {
        Rule::Pattern { pattern } if pattern.contains("https?://") => Some(invalid_url(path)),
        _ => None,
    }
}

pub fn other_pattern(violation: &Violation, path: &str) -> Option<String> {
    matches!(violation.rule, Rule::Pattern { .. })
        .then(|| format!("'{path}' does not match required pattern"))
}

pub fn non_empty_array(violation: &Violation, path: &str) -> Option<String> {
    matches!(violation.rule, Rule::MinItems { .. })
        .then(|| format!("'{path}' must be a non-empty array"))
}

pub fn below_minimum(violation: &Violation, path: &str) -> Option<String> {
    match &violation.rule {
        Rule::Minimum { limit } => Some(format!(
            "'{path}' must be >= {limit}, got {}",
            display_value(&violation.instance)
        )),
        _ => None,
    }
}

fn invalid_url(path: &str) -> String {
    format!("'{path}' is not a valid URL. Use format: http:// or https://")
}
