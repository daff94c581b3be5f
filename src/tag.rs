//! Tag attribute sets attached to service registrations.

use std::collections::HashMap;

use crate::value::Value;

/// Attribute name carrying a service's priority within a tagged collection.
pub const PRIORITY_ATTRIBUTE: &str = "priority";

/// The attribute set of one tag occurrence on a service registration.
///
/// A service may carry the same tag several times with different attribute
/// sets; the resolver only consults the first occurrence. Attribute lookup is
/// by name and carries no ordering contract.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{TagAttributes, Value};
///
/// let attributes = TagAttributes::new()
///     .with("priority", 32)
///     .with("key", "payments");
///
/// assert_eq!(attributes.get("priority"), Some(&Value::Int(32)));
/// assert_eq!(attributes.get("key"), Some(&Value::Str("payments".to_string())));
/// assert_eq!(attributes.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagAttributes {
    attributes: HashMap<String, Value>,
}

impl TagAttributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, builder-style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets an attribute in place, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Looks up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Whether an attribute with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the set holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_and_set_replace_existing() {
        let mut attributes = TagAttributes::new().with("priority", 1).with("priority", 2);
        assert_eq!(attributes.get("priority"), Some(&Value::Int(2)));

        attributes.set("priority", 3);
        assert_eq!(attributes.get("priority"), Some(&Value::Int(3)));
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn empty_set() {
        let attributes = TagAttributes::new();
        assert!(attributes.is_empty());
        assert!(!attributes.contains(PRIORITY_ATTRIBUTE));
    }
}
