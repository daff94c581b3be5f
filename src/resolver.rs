//! Discovery and priority ordering of tagged services.
//!
//! The resolver is stateless and runs during the synchronous build phase: it
//! queries the registry seam for every service carrying a tag, orders them by
//! declared priority, and keys each entry by attribute, static index method,
//! or positional slot.

use std::cmp::Reverse;

use crate::argument::TaggedCollectionArgument;
use crate::collection::{CollectionKey, TaggedCollection};
use crate::error::{TagError, TagResult};
use crate::metadata::ClassMetadataProvider;
use crate::reference::ServiceReference;
use crate::registry::{TaggedService, TaggedServices};
use crate::tag::{TagAttributes, PRIORITY_ATTRIBUTE};
use crate::value::Value;

/// Finds every service tagged `tag` and returns them as an ordered
/// collection of references.
///
/// Services are ordered by their `"priority"` attribute descending
/// (default 0); services sharing a priority keep their registration order.
/// Only the attributes of each service's first occurrence of the tag are
/// consulted.
///
/// Each entry's key is determined in order of precedence:
/// 1. the `index_attribute` value on the tag entry, when present;
/// 2. the string returned by invoking `default_index_method`, a static,
///    public, zero-argument method on the service's class metadata;
/// 3. with neither configured, a positional slot.
///
/// With `index_attribute` configured, a later service producing an already
/// used key replaces the earlier reference in place (last write wins).
///
/// # Errors
///
/// Fails without touching the registry if `default_index_method` is given
/// but `index_attribute` is not. Per service, fails if the index attribute
/// is absent with no fallback method, if the class or method cannot be
/// found, if the method is not static or not public, or if a value that
/// must be a string or an integer is not one. See [`TagError`].
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
///     "app.fallback",
///     ServiceDefinition::new("app::Fallback")
///         .with_tag("app.handler", TagAttributes::new().with("priority", -10)),
/// );
/// registry.register(
///     "app.checkout",
///     ServiceDefinition::new("app::Checkout")
///         .with_tag("app.handler", TagAttributes::new().with("priority", 10)),
/// );
///
/// let collection =
///     resolve_tagged_collection("app.handler", &registry, &ClassRegistry::new(), None, None)
///         .unwrap();
///
/// let ids: Vec<&str> = collection.references().map(|r| r.id()).collect();
/// assert_eq!(ids, ["app.checkout", "app.fallback"]);
/// ```
pub fn resolve_tagged_collection<R, C>(
    tag: &str,
    registry: &R,
    classes: &C,
    index_attribute: Option<&str>,
    default_index_method: Option<&str>,
) -> TagResult<TaggedCollection>
where
    R: TaggedServices + ?Sized,
    C: ClassMetadataProvider + ?Sized,
{
    if default_index_method.is_some() && index_attribute.is_none() {
        return Err(TagError::IndexMethodWithoutAttribute { tag: tag.to_string() });
    }

    let mut entries = Vec::new();
    for service in registry.find_tagged(tag) {
        let attributes = service.first_attributes();
        let priority = priority_of(tag, &service, attributes)?;
        let key = index_key(
            tag,
            &service,
            attributes,
            registry,
            classes,
            index_attribute,
            default_index_method,
        )?;
        entries.push((priority, key, ServiceReference::new(service.id)));
    }

    // Stable sort: services sharing a priority keep registration order. A
    // binary heap would not guarantee that, so the grouping is a sort over
    // (priority descending, insertion index).
    entries.sort_by_key(|(priority, _, _)| Reverse(*priority));

    let mut collection = TaggedCollection::new();
    let mut position = 0usize;
    for (_, key, reference) in entries {
        match key {
            Some(key) => {
                collection.insert(CollectionKey::Keyed(key), reference);
            }
            None => {
                collection.insert(CollectionKey::Position(position), reference);
                position += 1;
            }
        }
    }
    Ok(collection)
}

fn priority_of(
    tag: &str,
    service: &TaggedService<'_>,
    attributes: Option<&TagAttributes>,
) -> TagResult<i64> {
    match attributes.and_then(|a| a.get(PRIORITY_ATTRIBUTE)) {
        None => Ok(0),
        Some(Value::Int(priority)) => Ok(*priority),
        Some(other) => Err(TagError::InvalidPriority {
            tag: tag.to_string(),
            service_id: service.id.to_string(),
            found: other.type_name(),
        }),
    }
}

fn index_key<R, C>(
    tag: &str,
    service: &TaggedService<'_>,
    attributes: Option<&TagAttributes>,
    registry: &R,
    classes: &C,
    index_attribute: Option<&str>,
    default_index_method: Option<&str>,
) -> TagResult<Option<String>>
where
    R: TaggedServices + ?Sized,
    C: ClassMetadataProvider + ?Sized,
{
    let Some(attribute) = index_attribute else {
        return Ok(None);
    };

    if let Some(value) = attributes.and_then(|a| a.get(attribute)) {
        return match value {
            Value::Str(key) => Ok(Some(key.clone())),
            other => Err(TagError::InvalidIndexAttribute {
                tag: tag.to_string(),
                service_id: service.id.to_string(),
                attribute: attribute.to_string(),
                found: other.type_name(),
            }),
        };
    }

    let Some(method) = default_index_method else {
        return Err(TagError::MissingIndexAttribute {
            tag: tag.to_string(),
            service_id: service.id.to_string(),
            attribute: attribute.to_string(),
        });
    };

    let definition =
        registry.definition(service.id).ok_or_else(|| TagError::DefinitionNotFound {
            service_id: service.id.to_string(),
        })?;
    let class = definition.class();

    let metadata = classes.class_metadata(class).ok_or_else(|| TagError::ClassNotFound {
        service_id: service.id.to_string(),
        class: class.to_string(),
    })?;
    let index_method = metadata.method(method).ok_or_else(|| TagError::MethodNotFound {
        service_id: service.id.to_string(),
        class: class.to_string(),
        method: method.to_string(),
    })?;

    if !index_method.is_static() {
        return Err(TagError::MethodNotStatic {
            service_id: service.id.to_string(),
            class: class.to_string(),
            method: method.to_string(),
        });
    }
    if !index_method.is_public() {
        return Err(TagError::MethodNotPublic {
            service_id: service.id.to_string(),
            class: class.to_string(),
            method: method.to_string(),
        });
    }

    match index_method.invoke() {
        Value::Str(key) => Ok(Some(key)),
        other => Err(TagError::NonStringIndex {
            service_id: service.id.to_string(),
            class: class.to_string(),
            method: method.to_string(),
            found: other.type_name(),
        }),
    }
}

impl TaggedCollectionArgument {
    /// Resolves this declaration against a registry and metadata provider.
    ///
    /// Equivalent to [`resolve_tagged_collection`] with the argument's tag
    /// and index configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ferrous_tags::{
    ///     ClassRegistry, ServiceDefinition, ServiceRegistry, TagAttributes,
    ///     TaggedCollectionArgument,
    /// };
    ///
    /// let mut registry = ServiceRegistry::new();
    /// registry.register(
    ///     "app.checkout",
    ///     ServiceDefinition::new("app::Checkout")
    ///         .with_tag("app.handler", TagAttributes::new().with("key", "checkout")),
    /// );
    ///
    /// let argument = TaggedCollectionArgument::new("app.handler").indexed_by("key");
    /// let collection = argument.resolve(&registry, &ClassRegistry::new()).unwrap();
    ///
    /// assert_eq!(collection.get("checkout").map(|r| r.id()), Some("app.checkout"));
    /// ```
    pub fn resolve<R, C>(&self, registry: &R, classes: &C) -> TagResult<TaggedCollection>
    where
        R: TaggedServices + ?Sized,
        C: ClassMetadataProvider + ?Sized,
    {
        resolve_tagged_collection(
            self.tag(),
            registry,
            classes,
            self.index_attribute(),
            self.default_index_method(),
        )
    }
}
