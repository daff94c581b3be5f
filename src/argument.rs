//! Lazy tagged-collection declarations.

/// Declares "every service tagged X", optionally indexed, for deferred
/// resolution.
///
/// An argument is configuration, not runtime state: it is constructed while
/// wiring the container and consumed later by whatever compiles or resolves
/// the collection. It performs no validation beyond its types; the resolver
/// rejects an argument carrying a default index method without an index
/// attribute.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::TaggedCollectionArgument;
///
/// // All services tagged "app.handler", in priority order.
/// let plain = TaggedCollectionArgument::new("app.handler");
/// assert_eq!(plain.tag(), "app.handler");
/// assert_eq!(plain.index_attribute(), None);
///
/// // The same services, keyed by their "key" attribute, falling back to a
/// // static index() method on each service's class.
/// let keyed = TaggedCollectionArgument::new("app.handler")
///     .indexed_by("key")
///     .with_default_index_method("index");
/// assert_eq!(keyed.index_attribute(), Some("key"));
/// assert_eq!(keyed.default_index_method(), Some("index"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaggedCollectionArgument {
    tag: String,
    index_attribute: Option<String>,
    default_index_method: Option<String>,
}

impl TaggedCollectionArgument {
    /// Declares the collection of services carrying `tag`, unkeyed.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            index_attribute: None,
            default_index_method: None,
        }
    }

    /// Keys the collection by the given tag attribute.
    pub fn indexed_by(mut self, attribute: impl Into<String>) -> Self {
        self.index_attribute = Some(attribute.into());
        self
    }

    /// Names a static method on each service's class used as the index key
    /// when the index attribute is absent from a tag entry.
    pub fn with_default_index_method(mut self, method: impl Into<String>) -> Self {
        self.default_index_method = Some(method.into());
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The tag attribute keying the collection, if any.
    pub fn index_attribute(&self) -> Option<&str> {
        self.index_attribute.as_deref()
    }

    /// The fallback static index method, if any.
    pub fn default_index_method(&self) -> Option<&str> {
        self.default_index_method.as_deref()
    }
}
