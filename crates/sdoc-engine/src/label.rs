//! Raw group label classification and canonical expansion.
//!
//! A raw label resolves to one or more canonical slugs: the namespace prefix
//! is stripped, the remainder is split on the nesting delimiter, and each
//! segment is lower-cased. A canonical slug therefore never contains the
//! namespace prefix or the delimiter.

use crate::namespace::NamespaceMatcher;

/// Nesting delimiter inside group labels.
pub const DELIMITER: char = '.';

/// Shape of a raw group label relative to the configured namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelShape {
    /// No namespace prefix, no nesting delimiter.
    Plain,
    /// Carries the namespace prefix only.
    Namespaced,
    /// Contains the nesting delimiter only.
    Nested,
    /// Namespaced and still nested after the prefix is stripped.
    NamespacedNested,
}

impl LabelShape {
    /// Classify a raw label.
    #[must_use]
    pub fn classify(label: &str, namespace: &NamespaceMatcher) -> Self {
        let namespaced = namespace.matches(label);
        let nested = namespace.strip(label).contains(DELIMITER);
        match (namespaced, nested) {
            (false, false) => Self::Plain,
            (true, false) => Self::Namespaced,
            (false, true) => Self::Nested,
            (true, true) => Self::NamespacedNested,
        }
    }

    /// Whether expansion rewrites the label, so a registry entry keyed by the
    /// raw label must be replaced by its expansion.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Expand a raw label into its canonical slugs.
#[must_use]
pub fn expand(label: &str, namespace: &NamespaceMatcher) -> Vec<String> {
    namespace
        .strip(label)
        .split(DELIMITER)
        .map(str::to_lowercase)
        .collect()
}
