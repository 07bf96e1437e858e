//! Source key derivation.
//!
//! Computes stable string identifiers per item, one per group membership,
//! for use as in-page anchors and links. Unlike the group/type index, every
//! raw group label contributes a key, and labels are kept whole: the
//! namespace prefix is stripped but nesting is not split and case is
//! preserved.

use sdoc_model::Item;
use serde::Serialize;

use crate::namespace::NamespaceMatcher;

/// Stable source identifiers for one item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// Definition name.
    pub name: String,
    /// Semantic kind of the definition.
    #[serde(rename = "type")]
    pub kind: String,
    /// Definition scope.
    pub scope: String,
    /// Namespace-stripped group labels, one per membership.
    pub group: Vec<String>,
    /// Raw group labels, unmodified.
    #[serde(rename = "groupNamespaced")]
    pub group_namespaced: Vec<String>,
    /// `"<group>-<type>-<name>"` identifier per stripped label.
    pub src: Vec<String>,
}

/// Derive one source record per item.
#[must_use]
pub fn derive_source_keys(items: &[Item], namespace: &NamespaceMatcher) -> Vec<SourceRecord> {
    items
        .iter()
        .map(|item| {
            let group: Vec<String> = item
                .group
                .iter()
                .map(|raw| namespace.strip(raw).to_owned())
                .collect();
            let src = group
                .iter()
                .map(|group| format!("{group}-{}-{}", item.context.kind, item.context.name))
                .collect();

            SourceRecord {
                name: item.context.name.clone(),
                kind: item.context.kind.clone(),
                scope: item.context.scope.clone(),
                group,
                group_namespaced: item.group.clone(),
                src,
            }
        })
        .collect()
}
