//! Namespace prefix stripping.

use regex::Regex;

/// Matches and strips a leading `"<namespace>."` prefix, case-insensitively.
///
/// An empty namespace produces a matcher that never strips anything.
#[derive(Clone, Debug)]
pub struct NamespaceMatcher {
    pattern: Option<Regex>,
}

impl NamespaceMatcher {
    /// Build a matcher for the given namespace.
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        let pattern = if namespace.is_empty() {
            None
        } else {
            // The namespace is escaped, so the pattern is always valid.
            let pattern = format!(r"(?i)^{}\.", regex::escape(namespace));
            Some(Regex::new(&pattern).expect("escaped namespace pattern is valid"))
        };
        Self { pattern }
    }

    /// Whether `label` starts with the namespace prefix.
    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(label))
    }

    /// Strip one leading namespace prefix from `label`, if present.
    #[must_use]
    pub fn strip<'a>(&self, label: &'a str) -> &'a str {
        match &self.pattern {
            Some(re) => match re.find(label) {
                Some(m) => &label[m.end()..],
                None => label,
            },
            None => label,
        }
    }
}
