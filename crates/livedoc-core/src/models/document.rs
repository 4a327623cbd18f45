use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::item::Item;

/// A validated `pdf_ready` document.
///
/// Built once per validation call and never mutated afterwards. Every field
/// is addressable by name from a template: the renderer binds the whole
/// document as the top-level scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub schema_version: String,
    pub meta: Meta,
    pub content: Content,

    /// Keys the schema does not name, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub document_title: String,
    pub document_version: String,
    /// ISO 8601 timestamp, kept verbatim.
    pub generated_at: String,
    pub source_set: Vec<String>,
    pub selection_summary: SelectionSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_context: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Item counts reported by the upstream selection step.
///
/// `total_items` is not checked against `included_items + excluded_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub total_items: u64,
    pub included_items: u64,
    pub excluded_items: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Rendering order is input order.
    pub user_stories: Vec<Item>,
}
