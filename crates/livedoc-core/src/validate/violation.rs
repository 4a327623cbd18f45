use std::fmt;

use serde_json::{Number, Value};

/// One step of an instance path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside the validated document, from the root.
///
/// Displays dot-joined with indices verbatim (`content.user_stories.0.url`);
/// the empty path displays as `root`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath(Vec<PathSegment>);

impl InstancePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// The final object key, if the path ends in one.
    pub fn last_key(&self) -> Option<&str> {
        match self.0.last() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                PathSegment::Key(key) => f.write_str(key)?,
                PathSegment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

/// Schema keyword that a value failed, with the keyword's argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required { property: String },
    Const { expected: Value },
    Format { format: String },
    Type { expected: Vec<String> },
    MinLength { limit: u64 },
    Pattern { pattern: String },
    MinItems { limit: u64 },
    Minimum { limit: Number },
}

/// Discriminant of [`Rule`], used to dispatch message formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTag {
    Required,
    Const,
    Format,
    Type,
    MinLength,
    Pattern,
    MinItems,
    Minimum,
}

impl Rule {
    pub fn tag(&self) -> RuleTag {
        match self {
            Self::Required { .. } => RuleTag::Required,
            Self::Const { .. } => RuleTag::Const,
            Self::Format { .. } => RuleTag::Format,
            Self::Type { .. } => RuleTag::Type,
            Self::MinLength { .. } => RuleTag::MinLength,
            Self::Pattern { .. } => RuleTag::Pattern,
            Self::MinItems { .. } => RuleTag::MinItems,
            Self::Minimum { .. } => RuleTag::Minimum,
        }
    }

    /// A pattern whose only purpose is to reject blank strings.
    pub fn is_non_blank_pattern(&self) -> bool {
        matches!(self, Self::Pattern { pattern } if pattern.contains("\\S"))
    }

    /// Rank used to pick the reported violation; lower surfaces first.
    ///
    /// Presence and version errors outrank drill-down detail on the same
    /// document.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Required { .. } => 0,
            Self::Const { .. } => 1,
            Self::Format { .. } => 2,
            Self::Type { .. } => 3,
            Self::MinLength { .. } => 4,
            Self::Pattern { .. } if self.is_non_blank_pattern() => 4,
            Self::Pattern { .. } => 5,
            Self::MinItems { .. } => 6,
            Self::Minimum { .. } => 7,
        }
    }
}

/// A single failed rule at a single location.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub rule: Rule,
    pub path: InstancePath,
    /// The offending value. For `required` this is the parent object.
    pub instance: Value,
}

impl Violation {
    /// Keyword-level description of the failure, independent of any
    /// user-facing template.
    pub fn native_message(&self) -> String {
        let instance = repr(&self.instance);
        match &self.rule {
            Rule::Required { property } => format!("'{property}' is a required property"),
            Rule::Const { expected } => format!("{} was expected", repr(expected)),
            Rule::Format { format } => format!("{instance} is not a '{format}'"),
            Rule::Type { expected } => {
                format!("{instance} is not of type {}", quoted_list(expected))
            }
            Rule::MinLength { .. } | Rule::MinItems { .. } => format!("{instance} is too short"),
            Rule::Pattern { pattern } => format!("{instance} does not match '{pattern}'"),
            Rule::Minimum { limit } => {
                format!("{instance} is less than the minimum of {limit}")
            }
        }
    }
}

/// JSON type name of a runtime value. Integral numbers are `integer`.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Value as interpolated into a message: strings bare, everything else as
/// JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn repr(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|t| format!("'{t}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
