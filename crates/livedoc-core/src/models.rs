pub mod document;
pub mod item;

pub use document::{Content, Meta, SchemaDocument, SelectionSummary};
pub use item::{Item, Sections, Timestamps};
