//! Conversion hooks
//!
//! A hook teaches the walker how to treat a foreign value as an
//! object so traversal can continue into types the engine does not
//! know about. Hooks are consulted in registration order when descent
//! reaches a non-container node; the first hook whose matcher accepts
//! the node converts it, and an unmatched node stays opaque.

use std::fmt;

use serde_json::{Map, Value};

type Matcher = dyn Fn(&Value) -> bool + Send + Sync;
type Converter = dyn Fn(&Value) -> Map<String, Value> + Send + Sync;

/// Caller-supplied adapter from a foreign value to an object.
pub struct ConversionHook {
    matcher: Box<Matcher>,
    converter: Box<Converter>,
}

impl ConversionHook {
    /// Pairs a matcher with a converter. The converter is only ever
    /// invoked on nodes the matcher accepted.
    pub fn new<M, C>(matcher: M, converter: C) -> Self
    where
        M: Fn(&Value) -> bool + Send + Sync + 'static,
        C: Fn(&Value) -> Map<String, Value> + Send + Sync + 'static,
    {
        Self {
            matcher: Box::new(matcher),
            converter: Box::new(converter),
        }
    }

    /// Whether this hook knows how to view `node` as an object.
    pub fn matches(&self, node: &Value) -> bool {
        (self.matcher)(node)
    }

    /// Converts `node` into an object view.
    pub fn convert(&self, node: &Value) -> Map<String, Value> {
        (self.converter)(node)
    }
}

impl fmt::Debug for ConversionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionHook").finish_non_exhaustive()
    }
}
