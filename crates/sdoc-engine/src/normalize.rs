//! Group label normalization.
//!
//! Resolves every raw group label to canonical slugs, folds new slugs into a
//! slug-to-title registry, and records the groups applicable to each item.
//! This is the engine's one deliberately side-effecting transform: each item's
//! `group_names` is rewritten in place. The indexer and the source-key deriver
//! are pure siblings that run after it.

use indexmap::IndexMap;
use sdoc_model::{GroupRegistry, Item};

use crate::label::{self, LabelShape};
use crate::namespace::NamespaceMatcher;

/// Normalize group labels across the registry and the item list.
///
/// The seed registry is taken by value and the expanded registry is returned:
/// caller-seeded raw keys that turn out to be namespaced or nested are
/// replaced by their expansion, and every slug referenced by any item is
/// registered. Seeding is first-write-wins throughout, so a caller-supplied
/// title is never overwritten by a slug discovered later.
///
/// Each item's `group_names` is rebuilt from scratch, which makes the pass
/// idempotent: running it twice over the same items yields the same registry
/// and the same mappings.
pub fn normalize_groups(
    seed: GroupRegistry,
    namespace: &NamespaceMatcher,
    items: &mut [Item],
) -> GroupRegistry {
    let mut registry = expand_registry(seed, namespace);

    for item in &mut *items {
        let mut group_names = IndexMap::new();
        for raw in &item.group {
            for slug in label::expand(raw, namespace) {
                let title = registry.seed(slug.clone(), slug.clone()).to_owned();
                group_names.insert(slug, title);
            }
        }
        item.group_names = group_names;
    }

    registry
}

/// Expand raw registry keys into canonical slugs.
///
/// Namespaced and nested keys are deleted once their expansion is seeded;
/// plain keys stay (their lower-cased slug is seeded alongside).
fn expand_registry(seed: GroupRegistry, namespace: &NamespaceMatcher) -> GroupRegistry {
    let mut registry = seed;
    let raw_keys: Vec<String> = registry.slugs().map(str::to_owned).collect();

    for raw in raw_keys {
        let shape = LabelShape::classify(&raw, namespace);
        for slug in label::expand(&raw, namespace) {
            registry.seed(slug.clone(), slug);
        }
        if shape.is_expanded() {
            tracing::debug!(key = %raw, "Replaced raw group key with its expansion");
            registry.remove(&raw);
        }
    }

    registry
}
