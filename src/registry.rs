//! Service definitions and the tagged-service registry seam.

use indexmap::IndexMap;

use crate::tag::TagAttributes;

/// A registered service: class name plus ordered tag entries.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{ServiceDefinition, TagAttributes};
///
/// let definition = ServiceDefinition::new("app::CheckoutHandler")
///     .with_tag("app.handler", TagAttributes::new().with("priority", 10))
///     .with_tag("app.listener", TagAttributes::new());
///
/// assert_eq!(definition.class(), "app::CheckoutHandler");
/// assert_eq!(definition.tags().count(), 2);
/// assert!(definition.has_tag("app.handler"));
/// assert!(!definition.has_tag("app.command"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDefinition {
    class: String,
    tags: Vec<(String, TagAttributes)>,
}

impl ServiceDefinition {
    /// Creates a definition for the given class, with no tags.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            tags: Vec::new(),
        }
    }

    /// Appends a tag entry, builder-style.
    ///
    /// The same tag may be added several times with different attribute
    /// sets; entry order is preserved.
    pub fn with_tag(mut self, tag: impl Into<String>, attributes: TagAttributes) -> Self {
        self.tags.push((tag.into(), attributes));
        self
    }

    /// Appends a tag entry in place.
    pub fn add_tag(&mut self, tag: impl Into<String>, attributes: TagAttributes) -> &mut Self {
        self.tags.push((tag.into(), attributes));
        self
    }

    /// The service's class name.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// All tag entries, in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &TagAttributes)> {
        self.tags.iter().map(|(tag, attributes)| (tag.as_str(), attributes))
    }

    /// Attribute sets of every entry for `tag`, in declaration order.
    pub fn tag_attributes<'a>(&'a self, tag: &str) -> Vec<&'a TagAttributes> {
        self.tags
            .iter()
            .filter(|(name, _)| name == tag)
            .map(|(_, attributes)| attributes)
            .collect()
    }

    /// Whether the service carries `tag` at least once.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|(name, _)| name == tag)
    }
}

/// One service returned by a tagged-service query.
///
/// `attribute_sets` holds the attributes of every occurrence of the queried
/// tag on the service, in declaration order; the resolver consults only the
/// first.
#[derive(Debug, Clone)]
pub struct TaggedService<'a> {
    /// The service id.
    pub id: &'a str,
    /// Attribute sets of the queried tag's occurrences, in declaration order.
    pub attribute_sets: Vec<&'a TagAttributes>,
}

impl<'a> TaggedService<'a> {
    /// The attribute set of the first tag occurrence, if any.
    pub fn first_attributes(&self) -> Option<&'a TagAttributes> {
        self.attribute_sets.first().copied()
    }
}

/// The registry seam the resolver queries.
///
/// Implementations must enumerate tagged services in registration order;
/// collection ordering among equal priorities is defined by it.
pub trait TaggedServices {
    /// Services carrying `tag`, in registration order, each with the
    /// attribute sets of its occurrences of the tag.
    fn find_tagged(&self, tag: &str) -> Vec<TaggedService<'_>>;

    /// The definition registered under `id`, if any.
    fn definition(&self, id: &str) -> Option<&ServiceDefinition>;
}

/// In-memory, insertion-ordered service registry.
///
/// Registering under an existing id replaces the definition in place, so a
/// service keeps its original position in enumeration order.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{ServiceDefinition, ServiceRegistry, TagAttributes, TaggedServices};
///
/// let mut registry = ServiceRegistry::new();
/// registry
///     .register(
///         "app.checkout",
///         ServiceDefinition::new("app::Checkout")
///             .with_tag("app.handler", TagAttributes::new().with("priority", 10)),
///     )
///     .register(
///         "app.refund",
///         ServiceDefinition::new("app::Refund").with_tag("app.handler", TagAttributes::new()),
///     );
///
/// let tagged = registry.find_tagged("app.handler");
/// let ids: Vec<&str> = tagged.iter().map(|s| s.id).collect();
/// assert_eq!(ids, ["app.checkout", "app.refund"]);
/// assert!(registry.find_tagged("app.command").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    definitions: IndexMap<String, ServiceDefinition>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition under `id`, replacing any previous one in
    /// place.
    pub fn register(&mut self, id: impl Into<String>, definition: ServiceDefinition) -> &mut Self {
        self.definitions.insert(id.into(), definition);
        self
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no services are registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered service ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}

impl TaggedServices for ServiceRegistry {
    fn find_tagged(&self, tag: &str) -> Vec<TaggedService<'_>> {
        self.definitions
            .iter()
            .filter(|(_, definition)| definition.has_tag(tag))
            .map(|(id, definition)| TaggedService {
                id: id.as_str(),
                attribute_sets: definition.tag_attributes(tag),
            })
            .collect()
    }

    fn definition(&self, id: &str) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }
}
