//! Canonical group registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from resolved group slug to display title.
///
/// Seeding is first-write-wins: once a slug carries a title, later seeds for
/// the same slug are ignored. Raw labels that resolve to the same slug are
/// merged silently under the first title seen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupRegistry {
    entries: IndexMap<String, String>,
}

impl GroupRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slug with a title, first-write-wins.
    ///
    /// Returns the title effectively stored for the slug: the given one if
    /// the slug was absent, the existing one otherwise.
    pub fn seed(&mut self, slug: impl Into<String>, title: impl Into<String>) -> &str {
        self.entries.entry(slug.into()).or_insert_with(|| title.into())
    }

    /// Display title for a slug.
    #[must_use]
    pub fn title(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    /// Whether a slug is registered.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    /// Remove a slug, preserving the order of the remaining entries.
    ///
    /// Used by the normalizer to delete raw namespaced/nested keys once they
    /// are replaced by their expansion.
    pub fn remove(&mut self, slug: &str) -> Option<String> {
        self.entries.shift_remove(slug)
    }

    /// Registered slugs in insertion order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(slug, title)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of registered slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for GroupRegistry {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut registry = Self::new();
        for (slug, title) in iter {
            registry.seed(slug, title);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_registers_slug() {
        let mut registry = GroupRegistry::new();

        registry.seed("colors", "Color Palette");

        assert!(registry.contains("colors"));
        assert_eq!(registry.title("colors"), Some("Color Palette"));
    }

    #[test]
    fn test_seed_first_write_wins() {
        let mut registry = GroupRegistry::new();
        registry.seed("colors", "Color Palette");

        let stored = registry.seed("colors", "colors");

        assert_eq!(stored, "Color Palette");
        assert_eq!(registry.title("colors"), Some("Color Palette"));
    }

    #[test]
    fn test_seed_returns_new_title_when_absent() {
        let mut registry = GroupRegistry::new();

        let stored = registry.seed("helpers", "helpers");

        assert_eq!(stored, "helpers");
    }

    #[test]
    fn test_slugs_preserve_insertion_order() {
        let mut registry = GroupRegistry::new();
        registry.seed("b", "B");
        registry.seed("a", "A");
        registry.seed("c", "C");

        let slugs: Vec<_> = registry.slugs().collect();

        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut registry = GroupRegistry::new();
        registry.seed("a", "A");
        registry.seed("b", "B");
        registry.seed("c", "C");

        let removed = registry.remove("b");

        assert_eq!(removed, Some("B".to_owned()));
        let slugs: Vec<_> = registry.slugs().collect();
        assert_eq!(slugs, vec!["a", "c"]);
    }

    #[test]
    fn test_from_iterator_is_first_write_wins() {
        let registry: GroupRegistry = vec![
            ("colors".to_owned(), "Color Palette".to_owned()),
            ("colors".to_owned(), "colors".to_owned()),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.title("colors"), Some("Color Palette"));
    }
}
