//! # Route Patterns
//!
//! Registration strings are regular expressions with optional named
//! placeholders. Compilation is two textual passes followed by validation:
//!
//! 1. Each placeholder in [`PLACEHOLDERS`] is replaced, first occurrence only.
//! 2. An end-of-input anchor is appended unless the string already ends in one.
//!
//! The result is only anchored at the end. Matching looks for the pattern
//! anywhere in the token, so `items/:id` matches `#/app/items/42`.
//!
//! | Placeholder | Expansion |
//! |-------------|-----------|
//! | `:id` | `[0-9]+` |
//! | `:guid` | `(\w+-?)+` |
//! | `:string` | `[A-Za-z]+` |
//! | `:query` | `[?](.*&?)+` |

use hashroute_core::PatternError;
use regex::Regex;
use std::fmt;

/// Placeholder table, applied in this order.
pub const PLACEHOLDERS: [(&str, &str); 4] = [
    (":id", "[0-9]+"),
    (":guid", r"(\w+-?)+"),
    (":string", "[A-Za-z]+"),
    (":query", r"[?](.*&?)+"),
];

/// The end-of-input anchor every compiled pattern ends with.
pub const END_ANCHOR: char = '$';

/// Substitute placeholders and anchor the end, without validating.
///
/// The returned string is the canonical key of the route.
pub fn expand(pattern: &str) -> String {
    let mut expanded = PLACEHOLDERS
        .iter()
        .fold(pattern.to_string(), |acc, (placeholder, expansion)| {
            acc.replacen(placeholder, expansion, 1)
        });
    if !expanded.ends_with(END_ANCHOR) {
        expanded.push(END_ANCHOR);
    }
    expanded
}

/// A compiled, end-anchored route pattern.
#[derive(Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
}

impl RoutePattern {
    /// Compile a registration string.
    ///
    /// Fails with [`PatternError::Invalid`] if the expanded string is not a
    /// valid regular expression.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let expanded = expand(pattern);
        let regex = Regex::new(&expanded).map_err(|e| PatternError::Invalid {
            pattern: pattern.to_string(),
            expanded: expanded.clone(),
            source: Box::new(e),
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The canonical (expanded, anchored) form. Registry keys use this.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The registration string this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches a tail of `token`.
    pub fn is_match(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RoutePattern {}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePattern")
            .field("source", &self.source)
            .field("compiled", &self.as_str())
            .finish()
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
