//! Pass-through attributes.
//!
//! Widgets that forward caller attributes keep them here untouched. Two keys
//! have meaning to the framework: `data-testid` backs [`Widget::test_id`] and
//! `aria-label` backs [`Widget::accessible_name`].
//!
//! [`Widget::test_id`]: tumaninah_core::Widget::test_id
//! [`Widget::accessible_name`]: tumaninah_core::Widget::accessible_name

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute key for test ids.
pub const TEST_ID: &str = "data-testid";
/// Attribute key for accessible names.
pub const ARIA_LABEL: &str = "aria-label";

/// Ordered map of caller-supplied attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate over attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `data-testid` attribute.
    #[must_use]
    pub fn test_id(&self) -> Option<&str> {
        self.get(TEST_ID)
    }

    /// The `aria-label` attribute.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.get(ARIA_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_replace() {
        let mut attrs = Attributes::new();
        attrs.set("dir", "rtl");
        attrs.set("dir", "ltr");
        assert_eq!(attrs.get("dir"), Some("ltr"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_well_known_keys() {
        let mut attrs = Attributes::new();
        attrs.set(TEST_ID, "main-tabs");
        attrs.set(ARIA_LABEL, "Sections");
        assert_eq!(attrs.test_id(), Some("main-tabs"));
        assert_eq!(attrs.label(), Some("Sections"));
    }

    #[test]
    fn test_iter_in_key_order() {
        let mut attrs = Attributes::new();
        attrs.set("z", "1");
        attrs.set("a", "2");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "z"]);
    }
}
