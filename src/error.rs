//! Error types for tagged-collection resolution.

use std::fmt;

/// Errors raised while resolving a tagged collection.
///
/// Every error aborts the resolve call with no partial result; the caller is
/// expected to surface the message as a build-time failure. Each variant
/// carries the service id, class, method, tag, or attribute needed to fix the
/// configuration.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{
///     resolve_tagged_collection, ClassRegistry, ServiceRegistry, TagError, TagErrorKind,
/// };
///
/// // A default index method without an index attribute is rejected up front.
/// let error = resolve_tagged_collection(
///     "app.handler",
///     &ServiceRegistry::new(),
///     &ClassRegistry::new(),
///     None,
///     Some("index"),
/// )
/// .unwrap_err();
///
/// assert!(matches!(error, TagError::IndexMethodWithoutAttribute { .. }));
/// assert_eq!(error.kind(), TagErrorKind::Configuration);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// A default index method was configured without an index attribute
    IndexMethodWithoutAttribute {
        /// The tag being resolved
        tag: String,
    },
    /// The index attribute is absent and no default index method is configured
    MissingIndexAttribute {
        /// The tag being resolved
        tag: String,
        /// The offending service
        service_id: String,
        /// The attribute expected on the tag entry
        attribute: String,
    },
    /// The priority attribute holds a non-integer value
    InvalidPriority {
        /// The tag being resolved
        tag: String,
        /// The offending service
        service_id: String,
        /// Type name of the value found
        found: &'static str,
    },
    /// The index attribute holds a non-string value
    InvalidIndexAttribute {
        /// The tag being resolved
        tag: String,
        /// The offending service
        service_id: String,
        /// The attribute holding the value
        attribute: String,
        /// Type name of the value found
        found: &'static str,
    },
    /// The registry enumerated a service id it has no definition for
    DefinitionNotFound {
        /// The missing service id
        service_id: String,
    },
    /// The service's class is unknown to the metadata provider
    ClassNotFound {
        /// The service being indexed
        service_id: String,
        /// The class with no metadata
        class: String,
    },
    /// The class lacks the configured default index method
    MethodNotFound {
        /// The service being indexed
        service_id: String,
        /// The service's class
        class: String,
        /// The missing method
        method: String,
    },
    /// The default index method is not static
    MethodNotStatic {
        /// The service being indexed
        service_id: String,
        /// The service's class
        class: String,
        /// The non-static method
        method: String,
    },
    /// The default index method is not publicly callable
    MethodNotPublic {
        /// The service being indexed
        service_id: String,
        /// The service's class
        class: String,
        /// The non-public method
        method: String,
    },
    /// The default index method returned a non-string value
    NonStringIndex {
        /// The service being indexed
        service_id: String,
        /// The service's class
        class: String,
        /// The method invoked
        method: String,
        /// Type name of the value returned
        found: &'static str,
    },
}

/// Classification of a [`TagError`]: caller misconfiguration vs. lookup
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagErrorKind {
    /// The resolve call itself, or a tag entry, is misconfigured
    Configuration,
    /// A class or method lookup failed, or yielded the wrong shape
    Resolution,
}

impl TagError {
    /// Classifies the error.
    pub fn kind(&self) -> TagErrorKind {
        match self {
            TagError::IndexMethodWithoutAttribute { .. }
            | TagError::MissingIndexAttribute { .. }
            | TagError::InvalidPriority { .. }
            | TagError::InvalidIndexAttribute { .. } => TagErrorKind::Configuration,
            TagError::DefinitionNotFound { .. }
            | TagError::ClassNotFound { .. }
            | TagError::MethodNotFound { .. }
            | TagError::MethodNotStatic { .. }
            | TagError::MethodNotPublic { .. }
            | TagError::NonStringIndex { .. } => TagErrorKind::Resolution,
        }
    }

    /// Whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.kind() == TagErrorKind::Configuration
    }

    /// Whether this is a resolution error.
    pub fn is_resolution(&self) -> bool {
        self.kind() == TagErrorKind::Resolution
    }
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::IndexMethodWithoutAttribute { tag } => {
                write!(f, "Tag \"{}\": a default index method requires an index attribute", tag)
            }
            TagError::MissingIndexAttribute { tag, service_id, attribute } => {
                write!(
                    f,
                    "Service \"{}\" tagged \"{}\" is missing index attribute \"{}\"",
                    service_id, tag, attribute
                )
            }
            TagError::InvalidPriority { tag, service_id, found } => {
                write!(
                    f,
                    "Service \"{}\" tagged \"{}\" declares a non-integer priority ({})",
                    service_id, tag, found
                )
            }
            TagError::InvalidIndexAttribute { tag, service_id, attribute, found } => {
                write!(
                    f,
                    "Service \"{}\" tagged \"{}\" declares a non-string value ({}) for index attribute \"{}\"",
                    service_id, tag, found, attribute
                )
            }
            TagError::DefinitionNotFound { service_id } => {
                write!(f, "No definition registered for service \"{}\"", service_id)
            }
            TagError::ClassNotFound { service_id, class } => {
                write!(
                    f,
                    "No class metadata for \"{}\" while indexing service \"{}\"",
                    class, service_id
                )
            }
            TagError::MethodNotFound { service_id, class, method } => {
                write!(
                    f,
                    "Class \"{}\" of service \"{}\" has no method \"{}\"",
                    class, service_id, method
                )
            }
            TagError::MethodNotStatic { service_id, class, method } => {
                write!(
                    f,
                    "Method \"{}::{}\" indexing service \"{}\" must be static",
                    class, method, service_id
                )
            }
            TagError::MethodNotPublic { service_id, class, method } => {
                write!(
                    f,
                    "Method \"{}::{}\" indexing service \"{}\" must be public",
                    class, method, service_id
                )
            }
            TagError::NonStringIndex { service_id, class, method, found } => {
                write!(
                    f,
                    "Method \"{}::{}\" indexing service \"{}\" must return a string, got {}",
                    class, method, service_id, found
                )
            }
        }
    }
}

impl std::error::Error for TagError {}

/// Result type for tagged-collection operations
pub type TagResult<T> = Result<T, TagError>;
