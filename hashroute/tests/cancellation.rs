use hashroute::{
    CancellablePool, CancellationCoordinator, Dispatcher, track,
    testing::{CallLog, FailingHandle, Sequence, SpyHandle},
};

#[test]
fn test_cancellation_isolation() {
    let seq = Sequence::new();
    let mut coordinator = CancellationCoordinator::new();
    let first = coordinator.pool("first");
    let second = coordinator.pool("second");

    let failing = FailingHandle::error();
    let same_pool = SpyHandle::new(&seq);
    let other_pool = SpyHandle::new(&seq);
    first.push(failing.clone());
    first.push(same_pool.clone());
    second.push(other_pool.clone());

    let report = coordinator.cancel_all();

    assert_eq!(failing.attempts(), 1);
    assert!(same_pool.is_cancelled());
    assert!(other_pool.is_cancelled());
    assert_eq!(report.failed, 1);
    assert_eq!(report.cancelled, 2);
}

#[test]
fn test_panicking_cancel_does_not_reach_dispatch() {
    let seq = Sequence::new();
    let log = CallLog::new();
    let pool = CancellablePool::new("xhr");
    let panicking = FailingHandle::panic();
    let spy = SpyHandle::new(&seq);
    pool.push(panicking.clone());
    pool.push(spy.clone());

    let dispatcher = Dispatcher::builder()
        .route("home", log.callback("home"))
        .pool(pool)
        .build()
        .unwrap();

    dispatcher.dispatch("#/home").unwrap();
    assert_eq!(panicking.attempts(), 1);
    assert!(spy.is_cancelled());
    assert_eq!(log.count(), 1);
}

#[test]
fn test_empty_pools_are_a_noop() {
    let mut coordinator = CancellationCoordinator::new();
    coordinator.pool("a");
    coordinator.register_pool(CancellablePool::new("b"));

    let report = coordinator.cancel_all();
    assert_eq!(report.pools, 2);
    assert_eq!(report.drained(), 0);
}

#[test]
fn test_handles_not_retained_after_cancel() {
    let seq = Sequence::new();
    let mut coordinator = CancellationCoordinator::new();
    let pool = coordinator.pool("xhr");
    let spy = SpyHandle::new(&seq);
    pool.push(spy.clone());

    coordinator.cancel_all();
    coordinator.cancel_all();
    assert_eq!(spy.cancel_count(), 1);
}

#[tokio::test]
async fn test_tracked_request_aborted_on_navigation() {
    let mut dispatcher = Dispatcher::default();
    let pool = dispatcher.pool("xhr");
    let request = track(&pool, std::future::pending::<()>());

    dispatcher.dispatch("#/next").unwrap();
    assert_eq!(request.await, Err(futures::future::Aborted));
}
