//! Service reference handles stored in resolved collections.

use std::fmt;

/// A handle naming a registered service by id.
///
/// References are what a resolved tagged collection holds: inert pointers
/// into the registry, resolvable to instances by whatever wiring consumes
/// the collection.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::ServiceReference;
///
/// let reference = ServiceReference::new("app.handler.checkout");
/// assert_eq!(reference.id(), "app.handler.checkout");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceReference {
    id: String,
}

impl ServiceReference {
    /// Creates a reference to the service with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The referenced service id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ServiceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
