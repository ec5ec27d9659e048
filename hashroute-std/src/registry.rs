//! Route table keyed by compiled pattern.
//!
//! Every registered route is tested on every dispatch; there is no
//! first-match-wins. Iteration follows insertion order, and overwriting a key
//! keeps its original position.

use crate::pattern::RoutePattern;
use hashroute_core::{HandlerRef, PatternError};
use indexmap::IndexMap;

/// A compiled pattern and the handler it triggers.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: RoutePattern,
    handler: HandlerRef,
}

impl RouteEntry {
    /// Compile `pattern` and pair it with `handler`.
    pub fn new(pattern: &str, handler: impl Into<HandlerRef>) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: RoutePattern::compile(pattern)?,
            handler: handler.into(),
        })
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The handler.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }
}

/// The set of registered routes.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = PatternRegistry::new();
/// registry.register("items/:id", HandlerRef::callback(show_item))?;
/// registry.register("save", HandlerRef::notify_target("saved", "#panel"))?;
///
/// for entry in registry.match_all("#/app/items/42") {
///     println!("{}", entry.pattern());
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct PatternRegistry {
    routes: IndexMap<String, RouteEntry>,
}

impl PatternRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` and insert it, replacing any route with the same
    /// compiled form.
    pub fn register(
        &mut self,
        pattern: &str,
        handler: impl Into<HandlerRef>,
    ) -> Result<(), PatternError> {
        let entry = RouteEntry::new(pattern, handler)?;
        self.insert(entry);
        Ok(())
    }

    /// Register a collection of routes in iteration order.
    ///
    /// All patterns are compiled before anything is inserted: if one fails,
    /// the registry is left untouched and the first failure is returned.
    /// Later entries overwrite earlier ones that compile to the same key.
    pub fn register_many<I, P, H>(&mut self, routes: I) -> Result<(), PatternError>
    where
        I: IntoIterator<Item = (P, H)>,
        P: AsRef<str>,
        H: Into<HandlerRef>,
    {
        let entries = routes
            .into_iter()
            .map(|(pattern, handler)| RouteEntry::new(pattern.as_ref(), handler))
            .collect::<Result<Vec<_>, _>>()?;
        for entry in entries {
            self.insert(entry);
        }
        Ok(())
    }

    fn insert(&mut self, entry: RouteEntry) {
        let key = entry.pattern.as_str().to_string();
        #[cfg(feature = "tracing")]
        let source = entry.pattern.source().to_string();
        let replaced = self.routes.insert(key, entry).is_some();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(pattern = %source, replaced, "Registered route");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = replaced;
        }
    }

    /// Every entry whose pattern matches `token`, in registry order.
    ///
    /// The iterator is lazy; clone it to restart the evaluation.
    pub fn match_all<'r, 't>(&'r self, token: &'t str) -> Matches<'r, 't> {
        Matches {
            entries: self.routes.values(),
            token,
        }
    }

    /// Look up a route by its compiled form.
    pub fn get(&self, compiled: &str) -> Option<&RouteEntry> {
        self.routes.get(compiled)
    }

    /// Whether a route with this compiled form exists.
    pub fn contains(&self, compiled: &str) -> bool {
        self.routes.contains_key(compiled)
    }

    /// All entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.values()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Lazy iterator over the routes matching a token.
#[derive(Clone)]
pub struct Matches<'r, 't> {
    entries: indexmap::map::Values<'r, String, RouteEntry>,
    token: &'t str,
}

impl<'r> Iterator for Matches<'r, '_> {
    type Item = &'r RouteEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.token;
        self.entries.find(|entry| entry.pattern.is_match(token))
    }
}

impl std::fmt::Debug for Matches<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matches")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
