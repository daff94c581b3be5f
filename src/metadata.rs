//! Class metadata and the static index method seam.
//!
//! Index methods are registered as resolved capability references: a closure
//! alongside declared staticness and visibility, looked up by class name and
//! invoked with no arguments. The resolver enforces the declarations and
//! reports violations against the service being indexed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Declared visibility of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Callable from outside the class.
    Public,
    /// Not callable from outside the class.
    Private,
}

type MethodBody = Arc<dyn Fn() -> Value + Send + Sync>;

/// A zero-argument method on a class, as the resolver sees it.
///
/// The body is an explicit capability reference rather than a reflective
/// handle; staticness and visibility stay declared data so misdeclared
/// index methods are still reportable.
#[derive(Clone)]
pub struct MethodMetadata {
    is_static: bool,
    visibility: Visibility,
    body: MethodBody,
}

impl MethodMetadata {
    /// Creates a method with explicit staticness and visibility.
    pub fn new<F, V>(is_static: bool, visibility: Visibility, body: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self {
            is_static,
            visibility,
            body: Arc::new(move || body().into()),
        }
    }

    /// Creates a public static method, the shape index methods must have.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ferrous_tags::{MethodMetadata, Value};
    ///
    /// let method = MethodMetadata::public_static(|| "checkout");
    /// assert!(method.is_static());
    /// assert!(method.is_public());
    /// assert_eq!(method.invoke(), Value::Str("checkout".to_string()));
    /// ```
    pub fn public_static<F, V>(body: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Self::new(true, Visibility::Public, body)
    }

    /// Whether the method is static.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The method's declared visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the method is publicly callable.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Invokes the method with no arguments.
    pub fn invoke(&self) -> Value {
        (self.body)()
    }
}

impl fmt::Debug for MethodMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodMetadata")
            .field("is_static", &self.is_static)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// Metadata for one class: its name and named zero-argument methods.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{ClassMetadata, MethodMetadata};
///
/// let class = ClassMetadata::new("app::CheckoutHandler")
///     .with_method("index", MethodMetadata::public_static(|| "checkout"));
///
/// assert_eq!(class.name(), "app::CheckoutHandler");
/// assert!(class.has_method("index"));
/// assert!(class.method("other").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    name: String,
    methods: HashMap<String, MethodMetadata>,
}

impl ClassMetadata {
    /// Creates metadata for the named class, with no methods.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: HashMap::new(),
        }
    }

    /// Adds a method, builder-style.
    pub fn with_method(mut self, name: impl Into<String>, method: MethodMetadata) -> Self {
        self.methods.insert(name.into(), method);
        self
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the class declares a method with this name.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Looks up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodMetadata> {
        self.methods.get(name)
    }
}

/// The class-metadata seam the resolver queries for default index methods.
pub trait ClassMetadataProvider {
    /// Metadata for the named class, if known.
    fn class_metadata(&self, class: &str) -> Option<&ClassMetadata>;
}

/// In-memory class metadata registry.
///
/// # Examples
///
/// ```rust
/// use ferrous_tags::{ClassMetadata, ClassMetadataProvider, ClassRegistry, MethodMetadata};
///
/// let mut classes = ClassRegistry::new();
/// classes.register(
///     ClassMetadata::new("app::CheckoutHandler")
///         .with_method("index", MethodMetadata::public_static(|| "checkout")),
/// );
///
/// assert!(classes.class_metadata("app::CheckoutHandler").is_some());
/// assert!(classes.class_metadata("app::Unknown").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassMetadata>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers class metadata under its own name, replacing any previous
    /// entry.
    pub fn register(&mut self, metadata: ClassMetadata) -> &mut Self {
        self.classes.insert(metadata.name().to_string(), metadata);
        self
    }
}

impl ClassMetadataProvider for ClassRegistry {
    fn class_metadata(&self, class: &str) -> Option<&ClassMetadata> {
        self.classes.get(class)
    }
}
