/// Property-based tests for tagged-collection resolution
///
/// These tests use proptest to generate random registries and verify the
/// ordering laws that must hold for every resolve call.

use ferrous_tags::{
    resolve_tagged_collection, ClassRegistry, ServiceDefinition, ServiceRegistry, TagAttributes,
    TaggedCollection,
};
use proptest::prelude::*;

const TAG: &str = "app.handler";

fn registry_of(priorities: &[i64]) -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    for (index, priority) in priorities.iter().enumerate() {
        registry.register(
            format!("svc_{:03}", index),
            ServiceDefinition::new(format!("app::Service{}", index))
                .with_tag(TAG, TagAttributes::new().with("priority", *priority)),
        );
    }
    registry
}

fn resolved_ids(collection: &TaggedCollection) -> Vec<String> {
    collection.references().map(|r| r.id().to_string()).collect()
}

fn registration_index(id: &str) -> usize {
    id.trim_start_matches("svc_").parse().unwrap()
}

proptest! {
    #[test]
    fn priorities_are_non_increasing(priorities in prop::collection::vec(-1000i64..1000, 0..40)) {
        let registry = registry_of(&priorities);
        let collection =
            resolve_tagged_collection(TAG, &registry, &ClassRegistry::new(), None, None).unwrap();

        let resolved: Vec<i64> = resolved_ids(&collection)
            .iter()
            .map(|id| priorities[registration_index(id)])
            .collect();

        for pair in resolved.windows(2) {
            prop_assert!(pair[0] >= pair[1], "priority order violated: {:?}", resolved);
        }
    }

    #[test]
    fn equal_priorities_preserve_registration_order(
        priorities in prop::collection::vec(-3i64..3, 0..40),
    ) {
        // A narrow priority range forces plenty of collisions.
        let registry = registry_of(&priorities);
        let collection =
            resolve_tagged_collection(TAG, &registry, &ClassRegistry::new(), None, None).unwrap();

        let ids = resolved_ids(&collection);
        for (left, right) in ids.iter().zip(ids.iter().skip(1)) {
            let (i, j) = (registration_index(left), registration_index(right));
            if priorities[i] == priorities[j] {
                prop_assert!(i < j, "stability violated between {} and {}", left, right);
            }
        }
    }

    #[test]
    fn every_tagged_service_appears_exactly_once(
        priorities in prop::collection::vec(-1000i64..1000, 0..40),
    ) {
        let registry = registry_of(&priorities);
        let collection =
            resolve_tagged_collection(TAG, &registry, &ClassRegistry::new(), None, None).unwrap();

        let mut ids = resolved_ids(&collection);
        prop_assert_eq!(ids.len(), priorities.len());
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), priorities.len());
    }

    #[test]
    fn unkeyed_slots_are_consecutive_positions(
        priorities in prop::collection::vec(-10i64..10, 0..40),
    ) {
        let registry = registry_of(&priorities);
        let collection =
            resolve_tagged_collection(TAG, &registry, &ClassRegistry::new(), None, None).unwrap();

        let positions: Vec<usize> = collection.keys().map(|k| k.as_position().unwrap()).collect();
        let expected: Vec<usize> = (0..priorities.len()).collect();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn resolution_is_idempotent(priorities in prop::collection::vec(-1000i64..1000, 0..40)) {
        let registry = registry_of(&priorities);
        let classes = ClassRegistry::new();

        let first = resolve_tagged_collection(TAG, &registry, &classes, None, None).unwrap();
        let second = resolve_tagged_collection(TAG, &registry, &classes, None, None).unwrap();

        let left: Vec<(String, String)> =
            first.iter().map(|(k, r)| (k.to_string(), r.id().to_string())).collect();
        let right: Vec<(String, String)> =
            second.iter().map(|(k, r)| (k.to_string(), r.id().to_string())).collect();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn distinct_keys_index_every_service(
        priorities in prop::collection::vec(-1000i64..1000, 0..40),
    ) {
        let mut registry = ServiceRegistry::new();
        for (index, priority) in priorities.iter().enumerate() {
            registry.register(
                format!("svc_{:03}", index),
                ServiceDefinition::new(format!("app::Service{}", index)).with_tag(
                    TAG,
                    TagAttributes::new()
                        .with("priority", *priority)
                        .with("key", format!("key_{:03}", index)),
                ),
            );
        }

        let collection =
            resolve_tagged_collection(TAG, &registry, &ClassRegistry::new(), Some("key"), None)
                .unwrap();

        prop_assert_eq!(collection.len(), priorities.len());
        for index in 0..priorities.len() {
            let id = collection
                .get(&format!("key_{:03}", index))
                .map(|r| r.id().to_string());
            prop_assert_eq!(id, Some(format!("svc_{:03}", index)));
        }
    }
}
