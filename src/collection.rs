//! Resolved tagged collections: ordered mappings from index keys to
//! service references.

use std::fmt;

use indexmap::IndexMap;

use crate::reference::ServiceReference;

/// Position of a service inside a resolved collection.
///
/// Services that produced an index key occupy a `Keyed` slot; the rest are
/// numbered consecutively with `Position` slots in final collection order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    /// Slot addressed by an index key string.
    Keyed(String),
    /// Anonymous slot, numbered in collection order across all priorities.
    Position(usize),
}

impl CollectionKey {
    /// The index key string, or `None` for positional slots.
    pub fn as_keyed(&self) -> Option<&str> {
        match self {
            CollectionKey::Keyed(key) => Some(key),
            CollectionKey::Position(_) => None,
        }
    }

    /// The positional slot number, or `None` for keyed slots.
    pub fn as_position(&self) -> Option<usize> {
        match self {
            CollectionKey::Keyed(_) => None,
            CollectionKey::Position(position) => Some(*position),
        }
    }
}

impl fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKey::Keyed(key) => write!(f, "{}", key),
            CollectionKey::Position(position) => write!(f, "#{}", position),
        }
    }
}

/// An ordered mapping from collection keys to service references.
///
/// Order is the contract: entries appear by priority descending, with
/// registration order preserved among services sharing a priority. Built by
/// [`resolve_tagged_collection`](crate::resolve_tagged_collection); read-only
/// afterwards.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{
///     resolve_tagged_collection, ClassRegistry, ServiceDefinition, ServiceRegistry,
///     TagAttributes,
/// };
///
/// let mut registry = ServiceRegistry::new();
/// registry.register(
///     "app.first",
///     ServiceDefinition::new("app::First").with_tag("app.step", TagAttributes::new()),
/// );
/// registry.register(
///     "app.second",
///     ServiceDefinition::new("app::Second").with_tag("app.step", TagAttributes::new()),
/// );
///
/// let collection =
///     resolve_tagged_collection("app.step", &registry, &ClassRegistry::new(), None, None)
///         .unwrap();
///
/// assert_eq!(collection.len(), 2);
/// let ids: Vec<&str> = collection.references().map(|r| r.id()).collect();
/// assert_eq!(ids, ["app.first", "app.second"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggedCollection {
    entries: IndexMap<CollectionKey, ServiceReference>,
}

impl TaggedCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a reference under a key.
    ///
    /// An existing key keeps its slot position; the value is replaced and the
    /// previous reference returned.
    pub(crate) fn insert(
        &mut self,
        key: CollectionKey,
        reference: ServiceReference,
    ) -> Option<ServiceReference> {
        self.entries.insert(key, reference)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a reference by index key.
    pub fn get(&self, key: &str) -> Option<&ServiceReference> {
        self.entries.get(&CollectionKey::Keyed(key.to_string()))
    }

    /// Looks up a reference by positional slot number.
    pub fn at(&self, position: usize) -> Option<&ServiceReference> {
        self.entries.get(&CollectionKey::Position(position))
    }

    /// Iterates entries in collection order.
    pub fn iter(&self) -> impl Iterator<Item = (&CollectionKey, &ServiceReference)> {
        self.entries.iter()
    }

    /// Iterates keys in collection order.
    pub fn keys(&self) -> impl Iterator<Item = &CollectionKey> {
        self.entries.keys()
    }

    /// Iterates references in collection order.
    pub fn references(&self) -> impl Iterator<Item = &ServiceReference> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a TaggedCollection {
    type Item = (&'a CollectionKey, &'a ServiceReference);
    type IntoIter = indexmap::map::Iter<'a, CollectionKey, ServiceReference>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
