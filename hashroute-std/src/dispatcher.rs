//! # Navigation Dispatch
//!
//! [`Dispatcher`] ties the route table, the cancellation pools and the
//! notification sink together. A dispatch runs in a fixed order:
//!
//! 1. Every tracked pool is drained and each handle cancelled.
//! 2. The token is resolved: the argument if non-empty, else the configured
//!    default, else `""`.
//! 3. Every route whose pattern matches the token runs, in registry order.
//!
//! Step 1 finishes completely before any handler starts. Handlers are not
//! awaited; anything async they start should be tracked in a pool so the
//! next dispatch can cancel it.

use crate::{
    cancel::{CancellablePool, CancellationCoordinator},
    config::RouterConfig,
    registry::{PatternRegistry, RouteEntry},
};
use hashroute_core::{DispatchError, HandlerRef, NoopNotifier, Notifier, PatternError};

/// Routes navigation tokens to handlers, cancelling stale work first.
///
/// Each dispatcher owns its routes and pools; separate instances never
/// interfere.
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = Dispatcher::new(bus);
/// let xhr = dispatcher.pool("xhr");
///
/// dispatcher.register("items/:id", HandlerRef::callback(move |token: &str| {
///     xhr.push(load_item(token));
/// }))?;
/// dispatcher.register("save", HandlerRef::notify_target("saved", "#panel"))?;
///
/// dispatcher.dispatch("#/app/items/42")?;
/// ```
#[derive(Debug)]
pub struct Dispatcher<N = NoopNotifier> {
    registry: PatternRegistry,
    coordinator: CancellationCoordinator,
    notifier: N,
    config: RouterConfig,
}

impl Dispatcher<NoopNotifier> {
    /// Start building a dispatcher.
    pub fn builder() -> DispatcherBuilder<NoopNotifier> {
        DispatcherBuilder::new()
    }
}

impl Default for Dispatcher<NoopNotifier> {
    fn default() -> Self {
        Self::new(NoopNotifier)
    }
}

impl<N: Notifier> Dispatcher<N> {
    /// An empty dispatcher sending notifications to `notifier`.
    pub fn new(notifier: N) -> Self {
        Self::with_config(notifier, RouterConfig::default())
    }

    /// An empty dispatcher with explicit configuration.
    pub fn with_config(notifier: N, config: RouterConfig) -> Self {
        Self {
            registry: PatternRegistry::new(),
            coordinator: CancellationCoordinator::new(),
            notifier,
            config,
        }
    }

    /// Register a route. See [`PatternRegistry::register`].
    pub fn register(
        &mut self,
        pattern: &str,
        handler: impl Into<HandlerRef>,
    ) -> Result<(), PatternError> {
        self.registry.register(pattern, handler)
    }

    /// Register a route collection. See [`PatternRegistry::register_many`].
    pub fn register_many<I, P, H>(&mut self, routes: I) -> Result<(), PatternError>
    where
        I: IntoIterator<Item = (P, H)>,
        P: AsRef<str>,
        H: Into<HandlerRef>,
    {
        self.registry.register_many(routes)
    }

    /// Track a pool so its handles are cancelled on every dispatch.
    pub fn register_pool(&mut self, pool: CancellablePool) {
        self.coordinator.register_pool(pool);
    }

    /// The tracked pool named `name`, created on first use.
    pub fn pool(&mut self, name: &str) -> CancellablePool {
        self.coordinator.pool(name)
    }

    /// Route a navigation token.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` and `""` fall back to the
    /// configured default token. The first handler error stops the dispatch
    /// and is returned. Zero matches is not an error.
    pub fn dispatch<'t>(&self, token: impl Into<Option<&'t str>>) -> Result<(), DispatchError> {
        let _report = self.coordinator.cancel_all();
        let token = self.config.resolve(token.into());

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                token,
                cancelled = _report.cancelled,
                cancel_failed = _report.failed,
                "Dispatching navigation"
            );
        }

        let mut _matched = 0usize;
        for entry in self.registry.match_all(token) {
            _matched += 1;
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(pattern = %entry.pattern(), "Route matched");
            }
            self.invoke(entry, token)?;
        }

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(token, matched = _matched, "Navigation dispatched");
        }
        Ok(())
    }

    fn invoke(&self, entry: &RouteEntry, token: &str) -> Result<(), DispatchError> {
        match entry.handler() {
            HandlerRef::Callback(callback) => {
                callback
                    .call(token)
                    .map_err(|source| DispatchError::Handler {
                        pattern: entry.pattern().as_str().to_string(),
                        source,
                    })
            }
            HandlerRef::Notify(descriptor) => self
                .notifier
                .notify(descriptor.topic(), descriptor.scope(), token)
                .map_err(|source| DispatchError::Notify {
                    topic: descriptor.topic().to_string(),
                    source,
                }),
        }
    }

    /// The route table.
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// The pool coordinator.
    pub fn coordinator(&self) -> &CancellationCoordinator {
        &self.coordinator
    }

    /// The notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The active configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Builder for [`Dispatcher`].
///
/// Routes added here are compiled by [`build`](Self::build), so a whole
/// route collection can be declared up front.
///
/// ```rust,ignore
/// let dispatcher = Dispatcher::builder()
///     .notifier(bus)
///     .default_token("#/home")
///     .route("items/:id", HandlerRef::callback(show_item))
///     .route("save", HandlerRef::notify_target("saved", "#panel"))
///     .pool(xhr_pool)
///     .build()?;
/// ```
pub struct DispatcherBuilder<N> {
    notifier: N,
    config: RouterConfig,
    routes: Vec<(String, HandlerRef)>,
    pools: Vec<CancellablePool>,
}

impl DispatcherBuilder<NoopNotifier> {
    /// A builder with no routes, no pools and a discarding notifier.
    pub fn new() -> Self {
        Self {
            notifier: NoopNotifier,
            config: RouterConfig::default(),
            routes: Vec::new(),
            pools: Vec::new(),
        }
    }
}

impl Default for DispatcherBuilder<NoopNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DispatcherBuilder<N> {
    /// Use `notifier` for descriptor routes.
    pub fn notifier<M: Notifier>(self, notifier: M) -> DispatcherBuilder<M> {
        DispatcherBuilder {
            notifier,
            config: self.config,
            routes: self.routes,
            pools: self.pools,
        }
    }

    /// Replace the configuration.
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default token.
    pub fn default_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.with_default_token(token);
        self
    }

    /// Queue a route.
    pub fn route(mut self, pattern: impl Into<String>, handler: impl Into<HandlerRef>) -> Self {
        self.routes.push((pattern.into(), handler.into()));
        self
    }

    /// Queue a route collection, in iteration order.
    pub fn routes<I, P, H>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (P, H)>,
        P: Into<String>,
        H: Into<HandlerRef>,
    {
        self.routes.extend(
            routes
                .into_iter()
                .map(|(pattern, handler)| (pattern.into(), handler.into())),
        );
        self
    }

    /// Track a pool.
    pub fn pool(mut self, pool: CancellablePool) -> Self {
        self.pools.push(pool);
        self
    }

    /// Compile every queued route and build the dispatcher.
    pub fn build(self) -> Result<Dispatcher<N>, PatternError>
    where
        N: Notifier,
    {
        let mut dispatcher = Dispatcher::with_config(self.notifier, self.config);
        dispatcher.register_many(self.routes)?;
        for pool in self.pools {
            dispatcher.register_pool(pool);
        }
        Ok(dispatcher)
    }
}
