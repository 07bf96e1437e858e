//! Documented entity types.
//!
//! An [`Item`] is one documented definition (function, mixin, variable, ...)
//! tagged with one or more raw group labels. Labels may be namespaced
//! (`"theme.colors"`) and/or nested (`"layout.grid"`); the engine resolves
//! them into canonical slugs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifying context of a documented definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemContext {
    /// Semantic kind of the definition (e.g. "function", "mixin",
    /// "variable"). The vocabulary is caller-defined and treated as opaque.
    #[serde(rename = "type")]
    pub kind: String,
    /// Definition name.
    pub name: String,
    /// Definition scope (e.g. "default", "private").
    #[serde(default)]
    pub scope: String,
}

/// A documented source entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Raw group labels in declaration order. Well-formed items carry at
    /// least one label.
    pub group: Vec<String>,
    /// Definition context.
    pub context: ItemContext,
    /// Resolved slug-to-title mapping for the groups this item belongs to.
    /// Populated by the normalizer; empty until a classification run.
    #[serde(
        rename = "groupName",
        default,
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub group_names: IndexMap<String, String>,
}

impl Item {
    /// Create an item with the given group labels, kind and name.
    #[must_use]
    pub fn new(group: Vec<String>, kind: &str, name: &str) -> Self {
        Self {
            group,
            context: ItemContext {
                kind: kind.to_owned(),
                name: name.to_owned(),
                scope: String::new(),
            },
            group_names: IndexMap::new(),
        }
    }
}

/// Parse a pre-parsed entity corpus from its JSON array form.
///
/// Unknown fields (descriptions, file locations, ...) are ignored; only the
/// classification-relevant fields are retained.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if the corpus is malformed.
pub fn items_from_json(content: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(content)
}
