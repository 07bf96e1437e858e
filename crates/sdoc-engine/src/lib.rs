//! Group classification and indexing engine for sdoc.
//!
//! Turns a flat list of documented entities into the normalized, nested
//! structures the rendering collaborator consumes:
//! - [`normalize_groups`]: canonical slug registry plus per-item `groupName`
//!   mappings (the one side-effecting transform)
//! - [`index_by_group_and_type`]: nested group/type tree, filed by each
//!   item's first group label
//! - [`derive_source_keys`]: stable per-item anchor identifiers, one per
//!   group membership
//!
//! [`classify`] runs all three in dependency order over one item list.
//!
//! # Quick Start
//!
//! ```
//! use sdoc_engine::{GroupRegistry, Item, classify};
//!
//! let mut items = vec![
//!     Item::new(vec!["theme.colors".to_owned()], "function", "shade"),
//!     Item::new(vec!["Layout.Grid".to_owned()], "mixin", "span"),
//! ];
//!
//! let result = classify(GroupRegistry::new(), "theme", &mut items);
//!
//! assert_eq!(result.registry.title("colors"), Some("colors"));
//! assert!(result.tree.node(&["layout", "grid"]).is_some());
//! assert_eq!(result.sources[0].src, vec!["colors-function-shade".to_owned()]);
//! ```

pub(crate) mod group_index;
pub mod label;
pub(crate) mod namespace;
pub(crate) mod normalize;
pub(crate) mod source;

pub use group_index::{GroupNode, GroupTypeIndex, index_by_group_and_type};
pub use namespace::NamespaceMatcher;
pub use normalize::normalize_groups;
pub use source::{SourceRecord, derive_source_keys};

// Re-export the model types for convenience
pub use sdoc_model::{GroupRegistry, Item, ItemContext};

/// Combined output of one classification run.
#[derive(Debug)]
pub struct Classification<'a> {
    /// Resolved slug-to-title registry.
    pub registry: GroupRegistry,
    /// Nested group/type tree over the items.
    pub tree: GroupTypeIndex<'a>,
    /// One source record per item.
    pub sources: Vec<SourceRecord>,
}

/// Run the full pipeline over one item list.
///
/// The normalizer runs first since it rewrites each item's `group_names`;
/// the indexer and the source-key deriver then run independently over the
/// normalized items. Synchronous and free of I/O; the registry and derived
/// structures are rebuilt on every call.
pub fn classify<'a>(
    seed: GroupRegistry,
    namespace: &str,
    items: &'a mut [Item],
) -> Classification<'a> {
    let matcher = NamespaceMatcher::new(namespace);
    let registry = normalize_groups(seed, &matcher, items);

    let items = &*items;
    Classification {
        registry,
        tree: index_by_group_and_type(items, &matcher),
        sources: derive_source_keys(items, &matcher),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_classify_runs_full_pipeline() {
        let mut seed = GroupRegistry::new();
        seed.seed("undefined", "General");
        seed.seed("theme.colors", "Color Palette");
        let mut items = vec![
            Item::new(vec!["theme.colors".to_owned()], "function", "shade"),
            Item::new(vec!["X".to_owned(), "Y".to_owned()], "function", "foo"),
        ];

        let result = classify(seed, "theme", &mut items);

        // Registry: raw namespaced key replaced, item slugs registered
        assert!(!result.registry.contains("theme.colors"));
        assert_eq!(result.registry.title("colors"), Some("colors"));
        assert_eq!(result.registry.title("undefined"), Some("General"));
        assert!(result.registry.contains("x"));
        assert!(result.registry.contains("y"));

        // Tree: first-group-only filing
        assert!(result.tree.node(&["x"]).is_some());
        assert!(result.tree.node(&["y"]).is_none());

        // Source keys: all memberships
        assert_eq!(
            result.sources[1].src,
            vec!["X-function-foo".to_owned(), "Y-function-foo".to_owned()]
        );

        // Items carry their group names after the run
        drop(result);
        assert_eq!(
            items[0].group_names.get("colors"),
            Some(&"colors".to_owned())
        );
    }

    #[test]
    fn test_classify_with_empty_namespace() {
        let mut items = vec![Item::new(vec!["A.B".to_owned()], "function", "foo")];

        let result = classify(GroupRegistry::new(), "", &mut items);

        assert!(result.tree.node(&["a", "b"]).is_some());
        assert_eq!(result.sources[0].src, vec!["A.B-function-foo".to_owned()]);
    }
}
