//! Path lexer and tree walker for JSON value trees
//!
//! This crate is the traversal engine behind the `pathmap` public API.
//! It resolves dot-delimited path expressions like
//! `books[1].chapters[2].title` against `serde_json::Value` trees, one
//! segment at a time, and performs in-place writes with
//! auto-vivification of intermediate objects.
//!
//! Both entry points are total: an unresolvable path reads as `None`
//! and writes as a no-op. The engine never returns an error and never
//! panics on path input.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod hooks;
pub mod lexer;
pub mod walker;

pub use hooks::ConversionHook;
pub use lexer::{next_segment, Segment, PATH_SEPARATOR};
pub use walker::{get, set};
