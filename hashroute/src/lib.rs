//! # hashroute - Navigation Dispatch with Cancel-Before-Dispatch
//!
//! `hashroute` routes navigation tokens (URL hash fragments such as
//! `#/app/items/42`) to handlers, and aborts any in-flight work started by the
//! previous navigation before the new handlers run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hashroute::prelude::*;
//!
//! let mut dispatcher = Dispatcher::builder()
//!     .notifier(bus)
//!     .default_token("#/home")
//!     .build()?;
//!
//! // Requests started by handlers go into a pool...
//! let xhr = dispatcher.pool("xhr");
//! dispatcher.register("items/:id", HandlerRef::callback(move |token: &str| {
//!     spawn(track(&xhr, fetch_item(token)));
//! }))?;
//!
//! // ...and a descriptor route publishes to the event bus instead.
//! dispatcher.register("save", HandlerRef::notify_target("saved", "#panel"))?;
//!
//! // Every dispatch cancels the pool first, then runs all matching routes.
//! dispatcher.dispatch("#/app/items/42")?;
//! dispatcher.dispatch(None)?; // "#/home"
//! ```
//!
//! ## Patterns
//!
//! Registration strings are regular expressions anchored at the end only, with
//! the placeholders `:id`, `:guid`, `:string` and `:query`. See
//! [`pattern`] for the expansion table.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hashroute_core::{
    // Error types
    BoxError,
    // Handlers
    Callback,
    // Cancellation
    CancelError,
    CancelFn,
    Cancellable,
    DispatchError,
    // Notification
    GLOBAL_SCOPE,
    HandlerRef,
    HashRouteError,
    IntoOutcome,
    NoopNotifier,
    Notification,
    NotificationDescriptor,
    Notifier,
    PatternError,
    Scope,
};

pub use hashroute_std::{
    CancellablePool, CancellationCoordinator, DEFAULT_TOKEN_ENV, Dispatcher, DispatcherBuilder,
    Matches, PatternRegistry, RouteEntry, RoutePattern, RouterConfig, SweepReport, track,
};

/// Pattern compilation and the placeholder table.
pub mod pattern {
    pub use hashroute_std::pattern::{END_ANCHOR, PLACEHOLDERS, RoutePattern, expand};
}

/// Helpers for tracking async work in pools.
pub mod adapters {
    #[cfg(feature = "tokio")]
    pub use hashroute_std::cancel::adapters::spawn_tracked;
    pub use hashroute_std::cancel::adapters::track;
}

/// Testing utilities.
pub mod testing {
    pub use hashroute_std::testing::{
        CallLog, FailingHandle, RecordingNotifier, Sequence, SpyHandle,
    };
}

/// Prelude module - common imports for hashroute.
///
/// # Usage
///
/// ```rust,ignore
/// use hashroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CancelFn, Cancellable, CancellablePool, DispatchError, Dispatcher, HandlerRef,
        NotificationDescriptor, Notifier, PatternError, RouterConfig, Scope, track,
    };
}
