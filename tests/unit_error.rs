/// Unit tests for TagError display and classification

use ferrous_tags::{TagError, TagErrorKind};
use std::error::Error;

#[test]
fn test_display_index_method_without_attribute() {
    let error = TagError::IndexMethodWithoutAttribute { tag: "app.handler".to_string() };
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "Tag \"app.handler\": a default index method requires an index attribute"
    );

    assert!(display_str.contains("app.handler"));
    assert!(display_str.contains("index attribute"));
}

#[test]
fn test_display_missing_index_attribute() {
    let error = TagError::MissingIndexAttribute {
        tag: "app.handler".to_string(),
        service_id: "app.checkout".to_string(),
        attribute: "key".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "Service \"app.checkout\" tagged \"app.handler\" is missing index attribute \"key\""
    );
}

#[test]
fn test_display_invalid_priority() {
    let error = TagError::InvalidPriority {
        tag: "app.handler".to_string(),
        service_id: "app.checkout".to_string(),
        found: "string",
    };
    assert_eq!(
        format!("{}", error),
        "Service \"app.checkout\" tagged \"app.handler\" declares a non-integer priority (string)"
    );
}

#[test]
fn test_display_invalid_index_attribute() {
    let error = TagError::InvalidIndexAttribute {
        tag: "app.handler".to_string(),
        service_id: "app.checkout".to_string(),
        attribute: "key".to_string(),
        found: "boolean",
    };
    assert_eq!(
        format!("{}", error),
        "Service \"app.checkout\" tagged \"app.handler\" declares a non-string value (boolean) for index attribute \"key\""
    );
}

#[test]
fn test_display_definition_not_found() {
    let error = TagError::DefinitionNotFound { service_id: "app.ghost".to_string() };
    assert_eq!(format!("{}", error), "No definition registered for service \"app.ghost\"");
}

#[test]
fn test_display_class_not_found() {
    let error = TagError::ClassNotFound {
        service_id: "app.checkout".to_string(),
        class: "app::Checkout".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "No class metadata for \"app::Checkout\" while indexing service \"app.checkout\""
    );
}

#[test]
fn test_display_method_not_found() {
    let error = TagError::MethodNotFound {
        service_id: "app.checkout".to_string(),
        class: "app::Checkout".to_string(),
        method: "index".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "Class \"app::Checkout\" of service \"app.checkout\" has no method \"index\""
    );
}

#[test]
fn test_display_method_not_static() {
    let error = TagError::MethodNotStatic {
        service_id: "app.checkout".to_string(),
        class: "app::Checkout".to_string(),
        method: "index".to_string(),
    };
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "Method \"app::Checkout::index\" indexing service \"app.checkout\" must be static"
    );
    assert!(display_str.contains("static"));
}

#[test]
fn test_display_method_not_public() {
    let error = TagError::MethodNotPublic {
        service_id: "app.checkout".to_string(),
        class: "app::Checkout".to_string(),
        method: "index".to_string(),
    };
    assert_eq!(
        format!("{}", error),
        "Method \"app::Checkout::index\" indexing service \"app.checkout\" must be public"
    );
}

#[test]
fn test_display_non_string_index() {
    let error = TagError::NonStringIndex {
        service_id: "app.checkout".to_string(),
        class: "app::Checkout".to_string(),
        method: "index".to_string(),
        found: "integer",
    };
    assert_eq!(
        format!("{}", error),
        "Method \"app::Checkout::index\" indexing service \"app.checkout\" must return a string, got integer"
    );
}

#[test]
fn test_configuration_kind_classification() {
    let errors = [
        TagError::IndexMethodWithoutAttribute { tag: "t".to_string() },
        TagError::MissingIndexAttribute {
            tag: "t".to_string(),
            service_id: "s".to_string(),
            attribute: "key".to_string(),
        },
        TagError::InvalidPriority { tag: "t".to_string(), service_id: "s".to_string(), found: "string" },
        TagError::InvalidIndexAttribute {
            tag: "t".to_string(),
            service_id: "s".to_string(),
            attribute: "key".to_string(),
            found: "integer",
        },
    ];

    for error in errors {
        assert_eq!(error.kind(), TagErrorKind::Configuration, "{}", error);
        assert!(error.is_configuration());
        assert!(!error.is_resolution());
    }
}

#[test]
fn test_resolution_kind_classification() {
    let errors = [
        TagError::DefinitionNotFound { service_id: "s".to_string() },
        TagError::ClassNotFound { service_id: "s".to_string(), class: "C".to_string() },
        TagError::MethodNotFound {
            service_id: "s".to_string(),
            class: "C".to_string(),
            method: "m".to_string(),
        },
        TagError::MethodNotStatic {
            service_id: "s".to_string(),
            class: "C".to_string(),
            method: "m".to_string(),
        },
        TagError::MethodNotPublic {
            service_id: "s".to_string(),
            class: "C".to_string(),
            method: "m".to_string(),
        },
        TagError::NonStringIndex {
            service_id: "s".to_string(),
            class: "C".to_string(),
            method: "m".to_string(),
            found: "boolean",
        },
    ];

    for error in errors {
        assert_eq!(error.kind(), TagErrorKind::Resolution, "{}", error);
        assert!(error.is_resolution());
        assert!(!error.is_configuration());
    }
}

#[test]
fn test_error_trait_impl() {
    let error = TagError::DefinitionNotFound { service_id: "s".to_string() };
    let source: &dyn Error = &error;
    assert!(source.source().is_none());
    assert!(!source.to_string().is_empty());
}

#[test]
fn test_error_equality_and_clone() {
    let error = TagError::MethodNotStatic {
        service_id: "s".to_string(),
        class: "C".to_string(),
        method: "m".to_string(),
    };
    let cloned = error.clone();
    assert_eq!(error, cloned);

    let other = TagError::MethodNotPublic {
        service_id: "s".to_string(),
        class: "C".to_string(),
        method: "m".to_string(),
    };
    assert_ne!(error, other);
}
