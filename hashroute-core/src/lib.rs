//! # hashroute-core
//!
//! Core contracts for the hashroute navigation dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by the
//! components that sit around a router without needing the full
//! `hashroute-std` implementation: request layers that hand out cancellable
//! handles, and event buses that receive route notifications.
//!
//! # Contracts
//!
//! ## [`Cancellable`]
//!
//! A single `cancel()` capability. Anything a request layer can abort (an
//! abortable future, a spawned task, a bespoke request object) is tracked by
//! the router through this trait and nothing else.
//!
//! ## [`HandlerRef`]
//!
//! What runs when a route matches. Either a [`Callback`] invoked with the
//! navigation token, or a [`NotificationDescriptor`] that is forwarded to a
//! [`Notifier`]. The variant is fixed at registration time.
//!
//! ## [`Notifier`]
//!
//! The outbound publish/subscribe sink used by descriptor routes.
//!
//! # Error Types
//!
//! - [`HashRouteError`] - Top-level error type
//! - [`PatternError`] - Registration pattern failures
//! - [`DispatchError`] - Handler and notification failures during dispatch
//! - [`CancelError`] - Cancel failures, swallowed by the coordinator

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod cancel;
mod error;
mod handler;
mod notify;
mod outcome;

// Re-exports
pub use cancel::{CancelFn, Cancellable};
pub use error::{BoxError, CancelError, DispatchError, HashRouteError, PatternError};
pub use handler::{Callback, HandlerRef, NotificationDescriptor};
pub use notify::{GLOBAL_SCOPE, Notification, Notifier, NoopNotifier, Scope};
pub use outcome::IntoOutcome;
