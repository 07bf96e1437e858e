//! Group/type partitioning.
//!
//! Builds a nested tree keyed by group-path segments, then by item type, with
//! insertion-ordered buckets at the leaves. Only the first group label of an
//! item is consulted: filing is by "primary" group. Source keys (see
//! [`crate::source`]) honor every group membership instead; the two policies
//! are deliberately kept separate.

use indexmap::IndexMap;
use sdoc_model::Item;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::label;
use crate::namespace::NamespaceMatcher;

/// One node of the group/type tree.
///
/// Internal nodes are mappings keyed by group segment; items live only in
/// type buckets. A node may carry both child segments and buckets when one
/// group is both a leaf and a parent (e.g. items filed under `"a"` next to
/// items filed under `"a.b"`).
#[derive(Debug, Default)]
pub struct GroupNode<'a> {
    children: IndexMap<String, GroupNode<'a>>,
    buckets: IndexMap<String, Vec<&'a Item>>,
}

impl<'a> GroupNode<'a> {
    /// Child node for a path segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&GroupNode<'a>> {
        self.children.get(segment)
    }

    /// Items of one type filed directly under this node.
    #[must_use]
    pub fn bucket(&self, kind: &str) -> Option<&[&'a Item]> {
        self.buckets.get(kind).map(Vec::as_slice)
    }

    /// Child segments and their nodes, in first-seen order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &GroupNode<'a>)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Type buckets, in first-seen order.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[&'a Item])> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether this node has neither children nor buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.buckets.is_empty()
    }

    /// Walk to the child node for `segment`, creating it if missing.
    fn ensure_child(&mut self, segment: String) -> &mut GroupNode<'a> {
        self.children.entry(segment).or_default()
    }
}

impl Serialize for GroupNode<'_> {
    /// Serialize to the collaborator wire shape: one object mixing child
    /// segments (nested objects) and type buckets (item arrays), i.e.
    /// `tree[segment]...[type] = [items...]`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len() + self.buckets.len()))?;
        for (segment, child) in &self.children {
            map.serialize_entry(segment, child)?;
        }
        for (kind, bucket) in &self.buckets {
            map.serialize_entry(kind, bucket)?;
        }
        map.end()
    }
}

/// Nested group/type index over an item slice.
#[derive(Debug, Default)]
pub struct GroupTypeIndex<'a> {
    root: GroupNode<'a>,
}

impl<'a> GroupTypeIndex<'a> {
    /// Root node of the tree.
    #[must_use]
    pub fn root(&self) -> &GroupNode<'a> {
        &self.root
    }

    /// Node at a full group path, if present.
    #[must_use]
    pub fn node(&self, path: &[&str]) -> Option<&GroupNode<'a>> {
        path.iter()
            .try_fold(&self.root, |node, segment| node.child(segment))
    }
}

impl Serialize for GroupTypeIndex<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

/// Partition items by the path of their first group label, then by type.
///
/// The descent path is the namespace-stripped, dot-split, lower-cased form of
/// `group[0]`; further group memberships do not affect filing. Items sharing
/// a group path and type share one bucket, in original relative order. Items
/// without group labels are skipped with a warning.
#[must_use]
pub fn index_by_group_and_type<'a>(
    items: &'a [Item],
    namespace: &NamespaceMatcher,
) -> GroupTypeIndex<'a> {
    let mut index = GroupTypeIndex::default();

    for item in items {
        let Some(primary) = item.group.first() else {
            tracing::warn!(name = %item.context.name, "Item has no group labels, skipping");
            continue;
        };

        let mut node = &mut index.root;
        for segment in label::expand(primary, namespace) {
            node = node.ensure_child(segment);
        }
        node.buckets
            .entry(item.context.kind.clone())
            .or_default()
            .push(item);
    }

    index
}
