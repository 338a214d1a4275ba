//! Pathmap public API
//!
//! Path-based access into loosely-typed JSON trees. A single delimited
//! path expression reads or writes a deeply nested value without
//! manual type checks at every level:
//!
//! ```rust
//! use pathmap::Map;
//!
//! let mut map = Map::must_from_json(
//!     r#"{"books": [{"title": "first"}, {"title": "second"}]}"#,
//! );
//!
//! assert_eq!(map.get("books[1].title").str_or(""), "second");
//!
//! map.set("books[2].title", "third"); // no-op: index 2 holds no object
//! map.set("authors.primary", "ada"); // auto-creates the "authors" object
//! assert_eq!(map.get("authors.primary").str_or(""), "ada");
//! ```
//!
//! Reads never fail: an unresolved path comes back as a nil [`Value`].
//! The only fallible operations are the encode/decode conversions on
//! [`Map`], each of which also has a panicking `must_*` variant.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod conversion;
pub mod error;
pub mod map;
pub mod value;

pub use conversion::SIGNATURE_SEPARATOR;
pub use error::{Error, Result};
pub use map::Map;
// Re-export the engine's extension surface so callers never need a
// direct pathmap_core dependency.
pub use pathmap_core::{ConversionHook, PATH_SEPARATOR};
pub use value::Value;
