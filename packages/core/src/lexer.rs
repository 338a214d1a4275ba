//! Path segment lexer
//!
//! Splits a path expression into its first segment and the remaining
//! path. A segment is a key with an optional array index: `items[2]`
//! targets element 2 of the sequence stored under `items`. Keys that
//! contain the separator (or other special characters) can be written
//! in bracket form, standalone or prefixed: `[a.b].c` addresses the
//! literal key `a.b`, then `c`.
//!
//! The lexer is total. Malformed brackets never fail to lex; they
//! simply fail to match and the literal text becomes the key.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character that separates the elements of a path.
///
/// For example, `location.address.city`.
pub const PATH_SEPARATOR: char = '.';

/// Matches a trailing `[N]` array access at the end of a key.
static ARRAY_ACCESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)\[([0-9]+)\]$").expect("array access pattern compiles"));

/// Matches a bracketed key anywhere in the remaining path.
static MAP_ACCESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\[]*)\[([^\]]+)\](.*)$").expect("map access pattern compiles"));

/// One decomposed path segment plus the unconsumed remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Key to look up in the current object.
    pub key: &'a str,
    /// Array index, when the segment ends in `[N]`.
    pub index: Option<usize>,
    /// Path still to walk after this segment; empty at the terminal.
    pub rest: &'a str,
}

/// Lexes the first segment off `path`.
///
/// The separator split and the bracket match can disagree on where the
/// segment boundary falls when the key itself is supplied in brackets
/// (`[key1].key2` has no separator inside the key). When the bracket
/// content is not a plain index, the bracket match wins and the
/// segment is re-derived from it.
pub fn next_segment(path: &str) -> Segment<'_> {
    let (mut key, mut rest) = match path.split_once(PATH_SEPARATOR) {
        Some((head, tail)) => (head, tail),
        None => (path, ""),
    };

    if let Some(caps) = MAP_ACCESS_RE.captures(path) {
        let content = caps.get(2).map_or("", |m| m.as_str());
        if !is_index(content) {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            if prefix.is_empty() {
                key = content;
                rest = caps.get(3).map_or("", |m| m.as_str());
            } else {
                // Keep the brackets in the remainder so the next call
                // re-lexes them as a standalone bracketed key.
                key = prefix;
                rest = &path[prefix.len()..];
            }
            rest = rest.strip_prefix(PATH_SEPARATOR).unwrap_or(rest);
        }
    }

    let mut index = None;
    if key.contains('[') {
        if let Some(caps) = ARRAY_ACCESS_RE.captures(key) {
            if let Ok(parsed) = caps.get(2).map_or("", |m| m.as_str()).parse::<usize>() {
                index = Some(parsed);
                key = caps.get(1).map_or("", |m| m.as_str());
            }
        }
    }

    Segment { key, index, rest }
}

/// Bracket content counts as an array index only when it is a bare
/// run of ASCII digits; no sign, no whitespace.
fn is_index(content: &str) -> bool {
    !content.is_empty() && content.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg<'a>(key: &'a str, index: Option<usize>, rest: &'a str) -> Segment<'a> {
        Segment { key, index, rest }
    }

    #[test]
    fn plain_key() {
        assert_eq!(next_segment("name"), seg("name", None, ""));
    }

    #[test]
    fn dotted_path_yields_head_and_rest() {
        assert_eq!(next_segment("a.b.c"), seg("a", None, "b.c"));
    }

    #[test]
    fn array_index_is_extracted() {
        assert_eq!(next_segment("items[2]"), seg("items", Some(2), ""));
        assert_eq!(
            next_segment("books[1].chapters[2].title"),
            seg("books", Some(1), "chapters[2].title")
        );
    }

    #[test]
    fn standalone_bracketed_key() {
        assert_eq!(next_segment("[a.b]"), seg("a.b", None, ""));
        assert_eq!(next_segment("[a.b].c"), seg("a.b", None, "c"));
    }

    #[test]
    fn prefixed_bracketed_key_stays_in_rest() {
        assert_eq!(next_segment("user[first.name]"), seg("user", None, "[first.name]"));
        assert_eq!(
            next_segment("user[first.name].len"),
            seg("user", None, "[first.name].len")
        );
    }

    #[test]
    fn numeric_bracket_content_is_not_a_map_key() {
        // `[1]` is an index, so the separator split stands.
        assert_eq!(next_segment("a[1].b"), seg("a", Some(1), "b"));
    }

    #[test]
    fn signed_bracket_content_is_a_map_key() {
        assert_eq!(next_segment("[-1]"), seg("-1", None, ""));
        assert_eq!(next_segment("[+1]"), seg("+1", None, ""));
    }

    #[test]
    fn bare_index_bracket_is_a_literal_key() {
        // No key before `[3]`, so the array pattern cannot match.
        assert_eq!(next_segment("[3]"), seg("[3]", None, ""));
    }

    #[test]
    fn unterminated_bracket_is_literal() {
        assert_eq!(next_segment("a[2"), seg("a[2", None, ""));
    }

    #[test]
    fn index_overflow_falls_back_to_literal_key() {
        let path = "a[99999999999999999999999999]";
        assert_eq!(next_segment(path), seg(path, None, ""));
    }

    #[test]
    fn empty_path_is_an_empty_key() {
        assert_eq!(next_segment(""), seg("", None, ""));
    }

    #[test]
    fn only_trailing_index_is_extracted() {
        // A second bracket pair stays in the key.
        assert_eq!(next_segment("a[1][2]"), seg("a[1]", Some(2), ""));
    }
}
