use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::CoreError;

use super::violation::{InstancePath, Rule, Violation};

/// RFC 3339 `date-time` shape. Field ranges are left to the timestamp parser.
static RFC3339_DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[Tt]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:[Zz]|[+-]\d{2}:\d{2})$")
        .expect("BUG: invalid RFC3339_DATE_TIME regex literal")
});

/// Evaluate `instance` against a Draft-07 `schema` and return every
/// violation in evaluation order.
///
/// Supported keywords: `type`, `const`, `required`, `properties`,
/// `additionalProperties`, `items`, `format` (`date-time`, `uri`),
/// `minLength`, `pattern`, `minItems`, `minimum`. Unknown keywords and
/// formats are ignored, as JSON Schema prescribes.
pub fn collect_violations(schema: &Value, instance: &Value) -> Result<Vec<Violation>, CoreError> {
    let mut evaluator = Evaluator::default();
    evaluator.walk(schema, instance, &InstancePath::root())?;
    Ok(evaluator.violations)
}

#[derive(Default)]
struct Evaluator {
    patterns: HashMap<String, Regex>,
    violations: Vec<Violation>,
}

impl Evaluator {
    fn walk(&mut self, schema: &Value, instance: &Value, path: &InstancePath) -> Result<(), CoreError> {
        let Some(keywords) = schema.as_object() else {
            return Ok(());
        };

        for (keyword, arg) in keywords {
            match keyword.as_str() {
                "type" => self.check_type(arg, instance, path),
                "const" => {
                    if instance != arg {
                        self.push(Rule::Const { expected: arg.clone() }, path, instance);
                    }
                }
                "required" => self.check_required(arg, instance, path),
                "properties" => {
                    if let (Some(props), Some(object)) = (arg.as_object(), instance.as_object()) {
                        for (name, sub_schema) in props {
                            if let Some(child) = object.get(name) {
                                self.walk(sub_schema, child, &path.key(name))?;
                            }
                        }
                    }
                }
                "additionalProperties" => {
                    if let Some(object) = instance.as_object() {
                        let declared = keywords.get("properties").and_then(Value::as_object);
                        self.check_additional(arg, declared, object, path)?;
                    }
                }
                "items" => {
                    if let Some(elements) = instance.as_array() {
                        for (i, element) in elements.iter().enumerate() {
                            self.walk(arg, element, &path.index(i))?;
                        }
                    }
                }
                "minItems" => {
                    if let (Some(limit), Some(elements)) = (arg.as_u64(), instance.as_array())
                        && (elements.len() as u64) < limit
                    {
                        self.push(Rule::MinItems { limit }, path, instance);
                    }
                }
                "minLength" => {
                    if let (Some(limit), Some(text)) = (arg.as_u64(), instance.as_str())
                        && (text.chars().count() as u64) < limit
                    {
                        self.push(Rule::MinLength { limit }, path, instance);
                    }
                }
                "pattern" => {
                    if let (Some(pattern), Some(text)) = (arg.as_str(), instance.as_str())
                        && !self.regex(pattern)?.is_match(text)
                    {
                        let rule = Rule::Pattern { pattern: pattern.to_string() };
                        self.push(rule, path, instance);
                    }
                }
                "format" => {
                    if let (Some(format), Some(text)) = (arg.as_str(), instance.as_str())
                        && !conforms_to_format(format, text)
                    {
                        let rule = Rule::Format { format: format.to_string() };
                        self.push(rule, path, instance);
                    }
                }
                "minimum" => {
                    if let (Some(limit), Some(value)) = (arg.as_number(), instance.as_f64())
                        && limit.as_f64().is_some_and(|bound| value < bound)
                    {
                        self.push(Rule::Minimum { limit: limit.clone() }, path, instance);
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn check_type(&mut self, arg: &Value, instance: &Value, path: &InstancePath) {
        let expected: Vec<String> = match arg {
            Value::String(name) => vec![name.clone()],
            Value::Array(names) => names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => return,
        };

        if !expected.iter().any(|name| is_instance_of(name, instance)) {
            self.push(Rule::Type { expected }, path, instance);
        }
    }

    fn check_required(&mut self, arg: &Value, instance: &Value, path: &InstancePath) {
        let (Some(names), Some(object)) = (arg.as_array(), instance.as_object()) else {
            return;
        };
        for name in names.iter().filter_map(Value::as_str) {
            if !object.contains_key(name) {
                let rule = Rule::Required { property: name.to_string() };
                self.push(rule, path, instance);
            }
        }
    }

    fn check_additional(
        &mut self,
        arg: &Value,
        declared: Option<&Map<String, Value>>,
        object: &Map<String, Value>,
        path: &InstancePath,
    ) -> Result<(), CoreError> {
        if !arg.is_object() {
            return Ok(());
        }
        for (name, child) in object {
            if declared.is_some_and(|d| d.contains_key(name)) {
                continue;
            }
            self.walk(arg, child, &path.key(name))?;
        }
        Ok(())
    }

    fn regex(&mut self, pattern: &str) -> Result<&Regex, CoreError> {
        match self.patterns.entry(pattern.to_string()) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let compiled = Regex::new(pattern).map_err(|source| CoreError::SchemaPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                Ok(&*entry.insert(compiled))
            }
        }
    }

    fn push(&mut self, rule: Rule, path: &InstancePath, instance: &Value) {
        self.violations.push(Violation {
            rule,
            path: path.clone(),
            instance: instance.clone(),
        });
    }
}

fn is_instance_of(type_name: &str, value: &Value) -> bool {
    match type_name {
        "null" => value.is_null(),
        "boolean" => value.is_boolean(),
        "string" => value.is_string(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "number" => value.is_number(),
        // Only exact integers, so every accepted count fits the model's `u64`.
        "integer" => match value {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            _ => false,
        },
        _ => true,
    }
}

fn conforms_to_format(format: &str, text: &str) -> bool {
    match format {
        "date-time" => {
            RFC3339_DATE_TIME.is_match(text) && text.parse::<jiff::Timestamp>().is_ok()
        }
        "uri" => is_absolute_uri(text),
        _ => true,
    }
}

/// `scheme ":" rest` with an RFC 3986 scheme and no whitespace.
fn is_absolute_uri(text: &str) -> bool {
    let Some((scheme, rest)) = text.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_alpha
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        && !rest.is_empty()
        && !rest.chars().any(char::is_whitespace)
}
