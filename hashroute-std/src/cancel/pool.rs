//! Named, shared sequences of cancellable handles.

use hashroute_core::Cancellable;
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

type Handle = Box<dyn Cancellable>;

/// A named, ordered set of in-flight handles.
///
/// Cloning is cheap and clones share the same handles, so a request layer can
/// keep one clone to push into while the coordinator holds another.
///
/// Lifecycle: `empty → populated (push) → empty (drain)`. Nothing survives a
/// drain.
#[derive(Clone)]
pub struct CancellablePool {
    name: Arc<str>,
    handles: Arc<Mutex<Vec<Handle>>>,
}

impl CancellablePool {
    /// Create an empty pool.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            handles: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The pool's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a handle.
    pub fn push<C: Cancellable>(&self, handle: C) {
        self.lock().push(Box::new(handle));
    }

    /// Insert a handle at the front, so it is cancelled first.
    pub fn push_front<C: Cancellable>(&self, handle: C) {
        self.lock().insert(0, Box::new(handle));
    }

    /// Number of handles currently tracked.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the pool holds no handles.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return every handle in one step.
    ///
    /// The lock is released before the handles are returned, so cancelling
    /// them may push into this pool again.
    pub fn drain(&self) -> Vec<Box<dyn Cancellable>> {
        std::mem::take(&mut *self.lock())
    }

    /// Whether two pool values share the same handles.
    pub fn same_pool(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handles, &other.handles)
    }

    // A handle that panicked while the lock was held must not disable the pool.
    fn lock(&self) -> MutexGuard<'_, Vec<Handle>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for CancellablePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellablePool")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashroute_core::CancelFn;

    #[test]
    fn test_clones_share_handles() {
        let pool = CancellablePool::new("xhr");
        let producer = pool.clone();
        producer.push(CancelFn::new(|| ()));
        producer.push(CancelFn::new(|| ()));

        assert_eq!(pool.len(), 2);
        assert!(pool.same_pool(&producer));
        assert_eq!(pool.name(), "xhr");
    }

    #[test]
    fn test_drain_empties() {
        let pool = CancellablePool::new("xhr");
        pool.push(CancelFn::new(|| ()));

        let drained = pool.drain();
        assert_eq!(drained.len(), 1);
        assert!(pool.is_empty());
        assert!(pool.drain().is_empty());
    }

    #[test]
    fn test_push_front_orders_first() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let pool = CancellablePool::new("xhr");
        let (a, b) = (order.clone(), order.clone());
        pool.push(CancelFn::new(move || a.lock().unwrap().push("back")));
        pool.push_front(CancelFn::new(move || b.lock().unwrap().push("front")));

        for handle in pool.drain() {
            handle.cancel().unwrap();
        }
        assert_eq!(*order.lock().unwrap(), vec!["front", "back"]);
    }
}
