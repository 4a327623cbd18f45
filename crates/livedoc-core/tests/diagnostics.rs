use livedoc_core::diagnostics::{first_violation, format_violation, generic, schema_version_mismatch};
use livedoc_core::validate::{InstancePath, Rule, Violation};
use serde_json::json;

fn violation(rule: Rule, path: InstancePath, instance: serde_json::Value) -> Violation {
    Violation { rule, path, instance }
}

#[test]
fn path_displays_dot_joined_with_indices() {
    let path = InstancePath::root()
        .key("content")
        .key("user_stories")
        .index(0)
        .key("url");
    assert_eq!(path.to_string(), "content.user_stories.0.url");
    assert_eq!(InstancePath::root().to_string(), "root");
}

#[test]
fn const_outside_schema_version_falls_back_to_generic() {
    let v = violation(
        Rule::Const { expected: json!("a") },
        InstancePath::root().key("meta").key("kind"),
        json!("b"),
    );
    assert_eq!(schema_version_mismatch(&v, "meta.kind"), None);
    assert_eq!(format_violation(&v), "'a' was expected at meta.kind");
}

#[test]
fn unknown_format_falls_back_to_generic() {
    let v = violation(
        Rule::Format { format: "email".to_string() },
        InstancePath::root().key("contact"),
        json!("nobody"),
    );
    assert_eq!(format_violation(&v), "'nobody' is not a 'email' at contact");
    assert_eq!(generic(&v, "contact"), format_violation(&v));
}

#[test]
fn other_patterns_use_pattern_message() {
    let v = violation(
        Rule::Pattern { pattern: "^[A-Z]+-\\d+$".to_string() },
        InstancePath::root().key("id"),
        json!("abc"),
    );
    assert_eq!(format_violation(&v), "'id' does not match required pattern");
}

#[test]
fn non_numeric_version_is_interpolated_as_json() {
    let v = violation(
        Rule::Const { expected: json!("1.0") },
        InstancePath::root().key("schema_version"),
        json!(2),
    );
    assert_eq!(
        format_violation(&v),
        "Invalid schema_version: expected '1.0', got '2'"
    );
}

#[test]
fn first_violation_prefers_priority_then_order() {
    let path = InstancePath::root();
    let violations = vec![
        violation(Rule::MinItems { limit: 1 }, path.key("a"), json!([])),
        violation(Rule::Type { expected: vec!["string".into()] }, path.key("b"), json!(1)),
        violation(Rule::Type { expected: vec!["string".into()] }, path.key("c"), json!(2)),
    ];
    let first = first_violation(&violations).unwrap();
    assert_eq!(first.path.to_string(), "b");
    assert!(first_violation(&[]).is_none());
}
