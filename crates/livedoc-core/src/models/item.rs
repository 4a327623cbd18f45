use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Named free-text sections of an item. Values are markdown or null; names
/// the templates do not know about are kept and ignored.
pub type Sections = BTreeMap<String, Option<String>>;

/// One user story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub state: String,
    pub tags: Vec<String>,
    pub url: String,
    pub timestamps: Timestamps,
    pub sections: Sections,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub created: String,
    pub updated: String,
}
