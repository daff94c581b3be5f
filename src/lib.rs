//! # ferrous-tags
//!
//! Priority-ordered, index-keyed tagged service discovery for dependency
//! injection containers.
//!
//! ## Features
//!
//! - **Tagged discovery**: find every service registered under a tag name
//! - **Priority ordering**: integer priorities, descending, with registration
//!   order preserved among equal priorities
//! - **Index keys**: address collection entries by a tag attribute, by a
//!   static index method on the service's class, or by positional slot
//! - **Lazy declarations**: [`TaggedCollectionArgument`] defers resolution to
//!   whatever compiles the container
//! - **Build-time diagnostics**: every failure names the service, class,
//!   method, and tag that caused it
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrous_tags::{
//!     resolve_tagged_collection, ClassRegistry, ServiceDefinition, ServiceRegistry,
//!     TagAttributes,
//! };
//!
//! // Register services carrying the "app.handler" tag.
//! let mut registry = ServiceRegistry::new();
//! registry.register(
//!     "app.handler.fallback",
//!     ServiceDefinition::new("app::FallbackHandler")
//!         .with_tag("app.handler", TagAttributes::new().with("priority", -100)),
//! );
//! registry.register(
//!     "app.handler.checkout",
//!     ServiceDefinition::new("app::CheckoutHandler")
//!         .with_tag("app.handler", TagAttributes::new().with("priority", 10)),
//! );
//! registry.register(
//!     "app.handler.refund",
//!     ServiceDefinition::new("app::RefundHandler")
//!         .with_tag("app.handler", TagAttributes::new().with("priority", 10)),
//! );
//!
//! // Discover them, highest priority first; equal priorities keep
//! // registration order.
//! let collection =
//!     resolve_tagged_collection("app.handler", &registry, &ClassRegistry::new(), None, None)
//!         .unwrap();
//!
//! let ids: Vec<&str> = collection.references().map(|r| r.id()).collect();
//! assert_eq!(
//!     ids,
//!     ["app.handler.checkout", "app.handler.refund", "app.handler.fallback"]
//! );
//! ```
//!
//! ## Indexed collections
//!
//! Collections may be keyed instead of positional: by a tag attribute, with a
//! static method on the service's class as fallback when the attribute is
//! absent.
//!
//! ```rust
//! use ferrous_tags::{
//!     ClassMetadata, ClassRegistry, MethodMetadata, ServiceDefinition, ServiceRegistry,
//!     TagAttributes, TaggedCollectionArgument,
//! };
//!
//! let mut registry = ServiceRegistry::new();
//! registry.register(
//!     "app.codec.json",
//!     ServiceDefinition::new("app::JsonCodec")
//!         .with_tag("app.codec", TagAttributes::new().with("format", "json")),
//! );
//! registry.register(
//!     "app.codec.msgpack",
//!     ServiceDefinition::new("app::MsgpackCodec")
//!         .with_tag("app.codec", TagAttributes::new()),
//! );
//!
//! // app::MsgpackCodec has no "format" attribute; its class declares a
//! // static format() method instead.
//! let mut classes = ClassRegistry::new();
//! classes.register(
//!     ClassMetadata::new("app::MsgpackCodec")
//!         .with_method("format", MethodMetadata::public_static(|| "msgpack")),
//! );
//!
//! let argument = TaggedCollectionArgument::new("app.codec")
//!     .indexed_by("format")
//!     .with_default_index_method("format");
//!
//! let collection = argument.resolve(&registry, &classes).unwrap();
//! assert_eq!(collection.get("json").map(|r| r.id()), Some("app.codec.json"));
//! assert_eq!(collection.get("msgpack").map(|r| r.id()), Some("app.codec.msgpack"));
//! ```
//!
//! ## Scope
//!
//! This crate is the collection-discovery primitive of a container's build
//! phase. Dependency-graph resolution, autowiring, and instantiation are the
//! container's business; the registry and class-metadata collaborators are
//! reached through the [`TaggedServices`] and [`ClassMetadataProvider`]
//! traits, with in-memory implementations provided.

// Module declarations
pub mod argument;
pub mod collection;
pub mod error;
pub mod metadata;
pub mod reference;
pub mod registry;
pub mod resolver;
pub mod tag;
pub mod value;

// Re-export core types
pub use argument::TaggedCollectionArgument;
pub use collection::{CollectionKey, TaggedCollection};
pub use error::{TagError, TagErrorKind, TagResult};
pub use metadata::{ClassMetadata, ClassMetadataProvider, ClassRegistry, MethodMetadata, Visibility};
pub use reference::ServiceReference;
pub use registry::{ServiceDefinition, ServiceRegistry, TaggedService, TaggedServices};
pub use resolver::resolve_tagged_collection;
pub use tag::{TagAttributes, PRIORITY_ATTRIBUTE};
pub use value::Value;
