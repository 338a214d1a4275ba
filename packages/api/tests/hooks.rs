//! Conversion hook integration tests
//!
//! Hooks let a caller traverse into foreign value encodings the
//! engine does not know about. Here the foreign type is a string of
//! `key=value` pairs.

use serde_json::{json, Map as JsonMap, Value};

use pathmap::{ConversionHook, Map};

fn pair_hook() -> ConversionHook {
    ConversionHook::new(
        |node| node.as_str().is_some_and(|s| s.contains('=')),
        |node| {
            let mut map = JsonMap::new();
            if let Some(text) = node.as_str() {
                for pair in text.split(';') {
                    if let Some((key, value)) = pair.split_once('=') {
                        map.insert(key.to_string(), Value::String(value.to_string()));
                    }
                }
            }
            map
        },
    )
}

#[test]
fn hook_enables_reads_into_foreign_values() {
    let map = Map::from_value(json!({"profile": "name=ada;lang=rust"})).unwrap();
    assert_eq!(map.get_with("profile.name", &[pair_hook()]).str_or(""), "ada");
    // Without the hook, the same path is absent.
    assert!(map.get("profile.name").is_nil());
}

#[test]
fn hook_enables_writes_into_foreign_values() {
    let mut map = Map::from_value(json!({"profile": "name=ada;lang=rust"})).unwrap();
    map.set_with("profile.lang", "go", &[pair_hook()]);
    assert_eq!(map.get("profile.lang").str_or(""), "go");
    assert_eq!(map.get("profile.name").str_or(""), "ada");
}

#[test]
fn unmatched_foreign_value_stays_opaque() {
    let map = Map::from_value(json!({"profile": 42})).unwrap();
    assert!(map.get_with("profile.name", &[pair_hook()]).is_nil());
    assert_eq!(map.get("profile").i64_or(0), 42);
}

#[test]
fn hooks_are_consulted_in_registration_order() {
    let first = ConversionHook::new(
        |node| node.is_string(),
        |_| {
            let mut map = JsonMap::new();
            map.insert("from".to_string(), Value::String("first".to_string()));
            map
        },
    );
    let map = Map::from_value(json!({"a": "k=v"})).unwrap();
    let value = map.get_with("a.from", &[first, pair_hook()]);
    assert_eq!(value.str_or(""), "first");
}
