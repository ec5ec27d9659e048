//! Cancellation of in-flight work between navigations.
//!
//! External components append [`Cancellable`] handles to a
//! [`CancellablePool`]; the [`CancellationCoordinator`] drains and cancels every
//! tracked pool before each dispatch.
//!
//! [`Cancellable`]: hashroute_core::Cancellable

pub mod adapters;
pub mod coordinator;
pub mod pool;

pub use coordinator::{CancellationCoordinator, SweepReport};
pub use pool::CancellablePool;
