//! Typed result wrapper for path reads

use serde_json::Value as Json;

use crate::Map;

/// Result of a path read.
///
/// Wraps the resolved tree value, or nothing when the path did not
/// resolve. Every extraction accepts an absent value without failing;
/// type-mismatch decisions stay with the caller, either as an `Option`
/// or through the `*_or` default fallbacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    data: Option<Json>,
}

impl Value {
    pub(crate) fn new(data: Option<Json>) -> Self {
        Self { data }
    }

    /// True when the path did not resolve, or resolved to JSON null.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.data, None | Some(Json::Null))
    }

    /// The raw tree value, if any.
    #[must_use]
    pub fn data(&self) -> Option<&Json> {
        self.data.as_ref()
    }

    /// Consumes the wrapper, yielding the raw tree value.
    #[must_use]
    pub fn into_data(self) -> Option<Json> {
        self.data
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.data.as_ref().and_then(Json::as_str)
    }

    #[must_use]
    pub fn str_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.as_str().unwrap_or(default)
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.data.as_ref().and_then(Json::as_i64)
    }

    #[must_use]
    pub fn i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.data.as_ref().and_then(Json::as_u64)
    }

    #[must_use]
    pub fn u64_or(&self, default: u64) -> u64 {
        self.as_u64().unwrap_or(default)
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.data.as_ref().and_then(Json::as_f64)
    }

    #[must_use]
    pub fn f64_or(&self, default: f64) -> f64 {
        self.as_f64().unwrap_or(default)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.data.as_ref().and_then(Json::as_bool)
    }

    #[must_use]
    pub fn bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&serde_json::Map<String, Json>> {
        self.data.as_ref().and_then(Json::as_object)
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Json>> {
        self.data.as_ref().and_then(Json::as_array)
    }

    /// Clones the resolved object into a [`Map`] so path accessors can
    /// chain from it.
    #[must_use]
    pub fn as_map(&self) -> Option<Map> {
        self.as_object().map(|map| Map::from(map.clone()))
    }
}
