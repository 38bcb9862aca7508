//! Property-based tests for classification, routing and rendering.

use logtint_render::{
    render_message, route, Channel, ClassifiedMessage, Record, APPLICATION_KEY, DATA_KEY, INDENT,
    LEVEL_KEY, MESSAGE_KEY,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

// ============================================================================
// Strategies
// ============================================================================

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(APPLICATION_KEY.to_string()),
        Just(LEVEL_KEY.to_string()),
        Just(MESSAGE_KEY.to_string()),
        "[a-z_]{1,10}",
    ]
}

fn record() -> impl Strategy<Value = Record> {
    prop::collection::btree_map(key(), json_value(), 0..8)
        .prop_map(|m| m.into_iter().collect::<Map<String, Value>>())
}

const KNOWN_LEVELS: [&str; 6] = ["error", "fatal", "warn", "warning", "info", "debug"];

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Classifying the same record twice yields the same message.
    #[test]
    fn classification_is_idempotent(rec in record()) {
        let first = ClassifiedMessage::classify(rec.clone());
        let second = ClassifiedMessage::classify(rec);
        prop_assert_eq!(first, second);
    }

    /// Every unrecognized key lands in `data` with its original value.
    #[test]
    fn residual_data_round_trips(rec in record()) {
        let msg = ClassifiedMessage::classify(rec.clone());
        for (k, v) in &rec {
            if k != APPLICATION_KEY && k != LEVEL_KEY && k != MESSAGE_KEY {
                prop_assert_eq!(msg.data.get(k), Some(v));
            }
        }
    }

    /// Recognized fields and `data` partition the record's keys exactly.
    #[test]
    fn keys_are_partitioned(rec in record()) {
        let msg = ClassifiedMessage::classify(rec.clone());
        let extracted = [
            (APPLICATION_KEY, &msg.application),
            (LEVEL_KEY, &msg.level),
            (MESSAGE_KEY, &msg.message),
        ];
        let mut seen = msg.data.len();
        for (k, field) in extracted {
            if let Some(value) = field {
                seen += 1;
                prop_assert!(!msg.data.contains_key(k));
                prop_assert_eq!(rec.get(k), Some(&Value::String(value.clone())));
            }
        }
        prop_assert_eq!(seen, rec.len());
    }

    /// Levels outside the known set never route to a channel.
    #[test]
    fn unknown_levels_route_nowhere(level in "\\PC{0,12}") {
        prop_assume!(!KNOWN_LEVELS.contains(&level.as_str()));
        prop_assert_eq!(route(Some(level.as_str())), None);
    }

    /// Known levels always route to exactly the table's channel.
    #[test]
    fn known_levels_route(index in 0usize..KNOWN_LEVELS.len()) {
        let expected = [
            Channel::Error, Channel::Error,
            Channel::Warning, Channel::Warning,
            Channel::Info,
            Channel::Debug,
        ];
        prop_assert_eq!(route(Some(KNOWN_LEVELS[index])), Some(expected[index]));
    }

    /// Rendering never panics and always ends with the data block.
    #[test]
    fn rendering_is_total(rec in record()) {
        let text = render_message(&ClassifiedMessage::classify(rec));
        prop_assert!(text.ends_with('\n'));
        let header = format!("{DATA_KEY} :");
        prop_assert!(text.lines().any(|line| line == header));
    }

    /// Every top-level residual key appears on its own line at depth one.
    #[test]
    fn residual_keys_are_rendered(rec in record()) {
        let msg = ClassifiedMessage::classify(rec);
        let text = render_message(&msg);
        for k in msg.data.keys() {
            let prefix = format!("{INDENT}{k} :");
            prop_assert!(text.lines().any(|line| line.starts_with(&prefix)), "missing {}", k);
        }
    }
}
