//! The `Map` container and its path accessors

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use pathmap_core as engine;
use pathmap_core::ConversionHook;

use crate::Value;

/// Inner tree representation: a string-keyed object of JSON values.
pub type JsonMap = serde_json::Map<String, Json>;

/// String-keyed tree of JSON values with path-based accessors.
///
/// `Map` owns its tree; `set` mutates it in place. Nothing here is
/// synchronized — concurrent writes (or a write racing reads) on a
/// shared `Map` need external locking by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Map(JsonMap);

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(JsonMap::new())
    }

    /// Wraps an object value; anything other than an object is `None`.
    #[must_use]
    pub fn from_value(value: Json) -> Option<Self> {
        match value {
            Json::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> JsonMap {
        self.0
    }

    #[must_use]
    pub fn inner(&self) -> &JsonMap {
        &self.0
    }

    pub fn inner_mut(&mut self) -> &mut JsonMap {
        &mut self.0
    }

    /// Reads the value at `path`.
    ///
    /// Never fails: an unresolved path yields a nil [`Value`].
    ///
    /// ```rust
    /// # use pathmap::Map;
    /// let map = Map::must_from_json(r#"{"a": {"b": [1, 2]}}"#);
    /// assert_eq!(map.get("a.b[1]").i64_or(0), 2);
    /// assert!(map.get("a.missing").is_nil());
    /// ```
    #[must_use]
    pub fn get(&self, path: &str) -> Value {
        self.get_with(path, &[])
    }

    /// Like [`Map::get`], consulting `hooks` for foreign value types.
    #[must_use]
    pub fn get_with(&self, path: &str, hooks: &[ConversionHook]) -> Value {
        Value::new(engine::get(&self.0, path, hooks))
    }

    /// Writes `value` at `path`, creating intermediate objects as
    /// needed. Mutates in place and returns `self` for chaining.
    pub fn set(&mut self, path: &str, value: impl Into<Json>) -> &mut Self {
        self.set_with(path, value, &[])
    }

    /// Like [`Map::set`], consulting `hooks` for foreign value types.
    pub fn set_with(
        &mut self,
        path: &str,
        value: impl Into<Json>,
        hooks: &[ConversionHook],
    ) -> &mut Self {
        engine::set(&mut self.0, path, value.into(), hooks);
        self
    }

    /// Shallow merge: a copy of `self` where top-level keys from
    /// `other` win over keys already present.
    #[must_use]
    pub fn merge(&self, other: &Map) -> Map {
        let mut merged = self.clone();
        for (key, value) in other.inner() {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Copy of `self` without the named top-level keys.
    #[must_use]
    pub fn exclude(&self, keys: &[&str]) -> Map {
        let mut kept = self.clone();
        for key in keys {
            kept.0.remove(*key);
        }
        kept
    }
}

impl Deref for Map {
    type Target = JsonMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<JsonMap> for Map {
    fn from(map: JsonMap) -> Self {
        Self(map)
    }
}

impl From<Map> for Json {
    fn from(map: Map) -> Self {
        Json::Object(map.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Map;

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Map::from_value(json!([1, 2])).is_none());
        assert!(Map::from_value(json!({"a": 1})).is_some());
    }

    #[test]
    fn merge_prefers_other() {
        let base = Map::from_value(json!({"a": 1, "b": 1})).unwrap();
        let overlay = Map::from_value(json!({"b": 2, "c": 2})).unwrap();
        let merged = base.merge(&overlay);
        assert_eq!(merged.get("a").i64_or(0), 1);
        assert_eq!(merged.get("b").i64_or(0), 2);
        assert_eq!(merged.get("c").i64_or(0), 2);
        // Non-destructive.
        assert_eq!(base.get("b").i64_or(0), 1);
    }

    #[test]
    fn exclude_drops_top_level_keys_only() {
        let map = Map::from_value(json!({"a": 1, "b": {"a": 2}})).unwrap();
        let kept = map.exclude(&["a"]);
        assert!(kept.get("a").is_nil());
        assert_eq!(kept.get("b.a").i64_or(0), 2);
    }

    #[test]
    fn map_nests_as_a_value() {
        let inner = Map::from_value(json!({"n": 1})).unwrap();
        let mut outer = Map::new();
        outer.set("child", inner);
        assert_eq!(outer.get("child.n").i64_or(0), 1);
    }
}
