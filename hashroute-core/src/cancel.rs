//! # Cancellation Capability
//!
//! The router never inspects what an in-flight operation is. It only needs to
//! be able to abort it on the next navigation, so every tracked handle is
//! reduced to a single capability: [`Cancellable::cancel`].
//!
//! Cancellation is cooperative and best-effort. A successful `cancel` means
//! the abort was requested, not that the underlying work has stopped.

use crate::{error::BoxError, outcome::IntoOutcome};
use std::sync::Arc;

/// A handle to in-flight work that can be aborted.
///
/// # Example
///
/// ```rust,ignore
/// struct Request { id: u64 }
///
/// impl Cancellable for Request {
///     fn cancel(&self) -> Result<(), BoxError> {
///         transport::abort(self.id)?;
///         Ok(())
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be tracked as a cancellable handle",
    label = "missing `Cancellable` implementation",
    note = "Implement `Cancellable` or wrap an abort closure in `CancelFn`."
)]
pub trait Cancellable: Send + 'static {
    /// Request that the underlying operation stop.
    ///
    /// Errors are reported to the coordinator, which logs and discards them.
    fn cancel(&self) -> Result<(), BoxError>;
}

impl<T: Cancellable + ?Sized> Cancellable for Box<T> {
    fn cancel(&self) -> Result<(), BoxError> {
        (**self).cancel()
    }
}

impl<T: Cancellable + Sync + ?Sized> Cancellable for Arc<T> {
    fn cancel(&self) -> Result<(), BoxError> {
        (**self).cancel()
    }
}

/// Adapts an abort closure into a [`Cancellable`].
///
/// The closure may return `()` or a `Result`.
///
/// ```rust,ignore
/// pool.push(CancelFn::new(move || request.abort()));
/// ```
#[derive(Clone)]
pub struct CancelFn<F>(F);

impl<F> CancelFn<F> {
    /// Wrap an abort closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F, R> Cancellable for CancelFn<F>
where
    F: Fn() -> R + Send + 'static,
    R: IntoOutcome,
{
    fn cancel(&self) -> Result<(), BoxError> {
        (self.0)().into_outcome()
    }
}

impl<F> std::fmt::Debug for CancelFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelFn").finish_non_exhaustive()
    }
}

// Integration: abortable futures
#[cfg(feature = "futures")]
impl Cancellable for futures::future::AbortHandle {
    fn cancel(&self) -> Result<(), BoxError> {
        self.abort();
        Ok(())
    }
}

// Integration: spawned tokio tasks
#[cfg(feature = "tokio")]
impl Cancellable for tokio::task::AbortHandle {
    fn cancel(&self) -> Result<(), BoxError> {
        self.abort();
        Ok(())
    }
}

#[cfg(feature = "tokio")]
impl<T: Send + 'static> Cancellable for tokio::task::JoinHandle<T> {
    fn cancel(&self) -> Result<(), BoxError> {
        self.abort();
        Ok(())
    }
}
