//! Helpers that start async work and track it in a pool in one step.

use super::pool::CancellablePool;
use futures::future::{Abortable, abortable};
use std::future::Future;

/// Make `future` abortable and track its handle in `pool`.
///
/// The returned future resolves to `Err(Aborted)` if the next navigation
/// cancels it before it completes.
///
/// ```rust,ignore
/// let pool = dispatcher.pool("xhr");
/// let request = track(&pool, client.get(url).send());
/// executor.spawn(async move {
///     if let Ok(response) = request.await { render(response?) }
/// });
/// ```
pub fn track<F: Future>(pool: &CancellablePool, future: F) -> Abortable<F> {
    let (future, handle) = abortable(future);
    pool.push(handle);
    future
}

/// Spawn `future` on the current tokio runtime and track the task in `pool`.
#[cfg(feature = "tokio")]
pub fn spawn_tracked<F>(pool: &CancellablePool, future: F) -> tokio::task::JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let task = tokio::spawn(future);
    pool.push(task.abort_handle());
    task
}
