//! Cancel-before-dispatch sweep over every tracked pool.

use super::pool::CancellablePool;
use hashroute_core::{CancelError, Cancellable};
use std::panic::{self, AssertUnwindSafe};

/// Counts from one [`CancellationCoordinator::cancel_all`] sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Pools visited.
    pub pools: usize,
    /// Handles whose cancel succeeded.
    pub cancelled: usize,
    /// Handles whose cancel errored or panicked. These errors were discarded.
    pub failed: usize,
}

impl SweepReport {
    /// Total handles drained.
    pub fn drained(&self) -> usize {
        self.cancelled + self.failed
    }
}

/// Owns the set of tracked pools and aborts everything in them on demand.
#[derive(Debug, Default)]
pub struct CancellationCoordinator {
    pools: Vec<CancellablePool>,
}

impl CancellationCoordinator {
    /// Create a coordinator with no pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a pool. Pools are never removed.
    pub fn register_pool(&mut self, pool: CancellablePool) {
        self.pools.push(pool);
    }

    /// The tracked pool named `name`, created and tracked on first use.
    pub fn pool(&mut self, name: &str) -> CancellablePool {
        if let Some(pool) = self.pools.iter().find(|p| p.name() == name) {
            return pool.clone();
        }
        let pool = CancellablePool::new(name);
        self.pools.push(pool.clone());
        pool
    }

    /// All tracked pools, in registration order.
    pub fn pools(&self) -> &[CancellablePool] {
        &self.pools
    }

    /// Drain every pool and cancel each drained handle.
    ///
    /// Pools are processed one at a time in registration order. A failing or
    /// panicking cancel is logged and counted, then discarded, and the sweep
    /// continues with the next handle. This never fails.
    pub fn cancel_all(&self) -> SweepReport {
        let mut report = SweepReport::default();
        for pool in &self.pools {
            report.pools += 1;
            let handles = pool.drain();
            if handles.is_empty() {
                continue;
            }

            #[cfg(feature = "tracing")]
            {
                tracing::debug!(pool = %pool.name(), count = handles.len(), "Cancelling pool");
            }

            for handle in handles {
                match cancel_one(handle.as_ref()) {
                    Ok(()) => report.cancelled += 1,
                    Err(_err) => {
                        #[cfg(feature = "tracing")]
                        {
                            tracing::warn!(pool = %pool.name(), error = %_err, "Cancel failed");
                        }
                        report.failed += 1;
                    }
                }
            }
        }
        report
    }
}

fn cancel_one(handle: &dyn Cancellable) -> Result<(), CancelError> {
    match panic::catch_unwind(AssertUnwindSafe(|| handle.cancel())) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) => Err(CancelError::Failed(err)),
        Err(payload) => Err(CancelError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
