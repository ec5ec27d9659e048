//! # hashroute-std
//!
//! Standard implementations for the hashroute navigation dispatcher.
//!
//! This crate provides:
//! - **Pattern compilation**: [`RoutePattern`], placeholder expansion
//! - **Route table**: [`PatternRegistry`], [`RouteEntry`], [`Matches`]
//! - **Cancellation**: [`CancellablePool`], [`CancellationCoordinator`]
//! - **Dispatch**: [`Dispatcher`], [`DispatcherBuilder`], [`RouterConfig`]
//! - **Adapters**: [`track`] and `spawn_tracked` to start async work already
//!   registered in a pool
//! - **Testing**: spies for handles, callbacks and notifications

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core contracts
pub use hashroute_core;

// Modules
pub mod cancel;
pub mod config;
pub mod dispatcher;
pub mod pattern;
pub mod registry;
pub mod testing;

pub use cancel::{CancellablePool, CancellationCoordinator, SweepReport, adapters::track};
pub use config::{DEFAULT_TOKEN_ENV, RouterConfig};
pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use pattern::{END_ANCHOR, PLACEHOLDERS, RoutePattern, expand};
pub use registry::{Matches, PatternRegistry, RouteEntry};
