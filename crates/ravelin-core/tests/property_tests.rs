//! Property-based tests for identifier validation and the value map.

use proptest::prelude::*;
use ravelin_core::identifiers::{IdValidator, MAX_ID_LENGTH};
use ravelin_core::{Value, ValueMap};

proptest! {
    #[test]
    fn sanitized_identifiers_always_validate(input in "[ -~]{0,200}") {
        let sanitized = IdValidator::sanitize(&input);
        prop_assert!(IdValidator::validate(&sanitized).is_ok());
        prop_assert!(sanitized.len() <= MAX_ID_LENGTH);
    }

    #[test]
    fn valid_identifiers_survive_validation_unchanged(id in "[a-z][a-z0-9_-]{0,63}") {
        prop_assert_eq!(IdValidator::validate(&id), Ok(id.as_str()));
    }

    #[test]
    fn value_map_keeps_first_position_on_replacement(
        keys in proptest::collection::vec("[a-z]{1,8}", 1..20),
        replacement in any::<i64>(),
    ) {
        let mut map: ValueMap = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), Value::Integer(i as i64)))
            .collect();

        let order_before: Vec<String> = map.keys().map(str::to_string).collect();
        map.insert(keys[0].clone(), replacement);
        let order_after: Vec<String> = map.keys().map(str::to_string).collect();

        prop_assert_eq!(order_before, order_after);
        prop_assert_eq!(map.get(&keys[0]).and_then(Value::as_i64), Some(replacement));
    }

    #[test]
    fn value_map_round_trips_through_json(
        entries in proptest::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..10),
    ) {
        let map: ValueMap = entries
            .into_iter()
            .map(|(k, v)| (k, Value::Integer(v)))
            .collect();

        let json = serde_json::to_string(&map).unwrap();
        let back: ValueMap = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, map);
    }
}
