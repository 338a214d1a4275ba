//! Tree walker
//!
//! Resolves lexed path segments against a JSON object tree, one
//! segment per recursion step. Reads follow a safe-navigation policy:
//! missing keys, wrong container kinds and out-of-range indices all
//! degenerate to an absent result instead of an error. Writes create
//! intermediate objects on descent and mutate the caller's tree in
//! place.

use serde_json::{Map, Value};

use crate::hooks::ConversionHook;
use crate::lexer::{next_segment, Segment};

/// Reads the value at `path` inside `root`.
///
/// Never fails: a path that does not resolve yields `None`. Hooks are
/// consulted, in order, whenever descent reaches a non-container node.
pub fn get(root: &Map<String, Value>, path: &str, hooks: &[ConversionHook]) -> Option<Value> {
    read_map(root, path, hooks)
}

/// Writes `value` at `path` inside `root`, mutating it in place.
///
/// Intermediate objects are created as needed so a longer path can be
/// satisfied. The one indexed write allowed to grow a sequence is the
/// exact append position (`index == len`); any index past that is a
/// silent no-op, as is any write through a node that cannot be
/// descended into.
pub fn set(root: &mut Map<String, Value>, path: &str, value: Value, hooks: &[ConversionHook]) {
    write_map(root, path, &value, hooks);
}

fn read_map(map: &Map<String, Value>, path: &str, hooks: &[ConversionHook]) -> Option<Value> {
    let Segment { key, index, rest } = next_segment(path);

    let mut node = map.get(key);
    if let Some(i) = index {
        node = node.and_then(Value::as_array).and_then(|items| items.get(i));
    }

    match node {
        Some(node) if rest.is_empty() => Some(node.clone()),
        Some(node) => read_value(node, rest, hooks),
        None => None,
    }
}

fn read_value(node: &Value, path: &str, hooks: &[ConversionHook]) -> Option<Value> {
    match node {
        Value::Object(map) => read_map(map, path, hooks),
        // Sequences are only addressable through `key[N]`, never keyed
        // into directly.
        Value::Array(_) => None,
        scalar => convert(scalar, hooks).and_then(|view| read_map(&view, path, hooks)),
    }
}

fn write_map(map: &mut Map<String, Value>, path: &str, value: &Value, hooks: &[ConversionHook]) {
    let Segment { key, index, rest } = next_segment(path);

    match index {
        None => {
            if rest.is_empty() {
                // Terminal leaf write replaces whatever was there.
                map.insert(key.to_string(), value.clone());
                return;
            }
            let descendable = map
                .get(key)
                .is_some_and(|child| child.is_object() || hooks.iter().any(|h| h.matches(child)));
            if !descendable {
                map.insert(key.to_string(), Value::Object(Map::new()));
            }
            if let Some(child) = map.get_mut(key) {
                write_value(child, rest, value, hooks);
            }
        }
        Some(i) => {
            let Some(Value::Array(items)) = map.get_mut(key) else {
                return;
            };
            if rest.is_empty() {
                if i < items.len() {
                    items[i] = value.clone();
                } else if i == items.len() {
                    items.push(value.clone());
                }
                // Past the append position: leave the sequence alone.
            } else if let Some(element) = items.get_mut(i) {
                write_value(element, rest, value, hooks);
            }
        }
    }
}

fn write_value(node: &mut Value, path: &str, value: &Value, hooks: &[ConversionHook]) {
    if !node.is_object() && !node.is_array() {
        if let Some(converted) = convert(node, hooks) {
            // Store the converted mapping back so the write lands in
            // the caller's tree rather than a temporary.
            *node = Value::Object(converted);
        }
    }
    if let Value::Object(map) = node {
        write_map(map, path, value, hooks);
    }
    // Anything else cannot be descended into; the write is a no-op.
}

fn convert(node: &Value, hooks: &[ConversionHook]) -> Option<Map<String, Value>> {
    hooks.iter().find(|h| h.matches(node)).map(|h| h.convert(node))
}
