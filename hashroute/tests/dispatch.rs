mod common;

use common::{failing, item_routes};
use hashroute::{
    CancellablePool, DispatchError, Dispatcher, HandlerRef, RouterConfig, Scope,
    testing::{CallLog, RecordingNotifier, Sequence, SpyHandle},
};

#[test]
fn test_all_matching_handlers_run() {
    let log = CallLog::new();
    let mut dispatcher = Dispatcher::default();
    dispatcher.register("items/:id", log.callback("item")).unwrap();
    dispatcher.register(":id", log.callback("number")).unwrap();
    dispatcher.register("users/:id", log.callback("user")).unwrap();

    dispatcher.dispatch("#/app/items/9").unwrap();
    assert_eq!(log.labels(), vec!["item", "number"]);
}

#[test]
fn test_cancel_before_dispatch() {
    let seq = Sequence::new();
    let log = CallLog::with_sequence(&seq);
    let first = SpyHandle::new(&seq);
    let second = SpyHandle::new(&seq);

    let pool = CancellablePool::new("xhr");
    pool.push(first.clone());
    pool.push(second.clone());

    let dispatcher = Dispatcher::builder()
        .route("home", log.callback("home"))
        .pool(pool.clone())
        .build()
        .unwrap();

    dispatcher.dispatch("#/home").unwrap();

    let handler_at = log.stamps()[0];
    assert!(first.cancelled_at().unwrap() < handler_at);
    assert!(second.cancelled_at().unwrap() < handler_at);
    assert!(pool.is_empty());
}

#[test]
fn test_handler_work_is_cancelled_by_next_dispatch() {
    let seq = Sequence::new();
    let mut dispatcher = Dispatcher::default();
    let pool = dispatcher.pool("xhr");
    let started = SpyHandle::new(&seq);

    let (producer, spy) = (pool.clone(), started.clone());
    dispatcher
        .register(
            "items/:id",
            HandlerRef::callback(move |_: &str| producer.push(spy.clone())),
        )
        .unwrap();

    dispatcher.dispatch("#/items/1").unwrap();
    assert!(!started.is_cancelled());
    assert_eq!(pool.len(), 1);

    // Zero matches still sweeps the pools.
    dispatcher.dispatch("#/elsewhere").unwrap();
    assert_eq!(started.cancel_count(), 1);
    assert!(pool.is_empty());
}

#[test]
fn test_default_token_fallback() {
    let log = CallLog::new();
    let dispatcher = Dispatcher::builder()
        .config(RouterConfig::new().with_default_token("#/home"))
        .route("home", log.callback("home"))
        .route("^$", log.callback("empty"))
        .build()
        .unwrap();

    dispatcher.dispatch(None).unwrap();
    dispatcher.dispatch("").unwrap();
    dispatcher.dispatch("#/home").unwrap();
    assert_eq!(
        log.calls(),
        vec![("home".to_string(), "#/home".to_string()); 3]
    );
}

#[test]
fn test_no_default_token_dispatches_empty_string() {
    let log = CallLog::new();
    let dispatcher = Dispatcher::builder()
        .route("^$", log.callback("empty"))
        .build()
        .unwrap();

    dispatcher.dispatch(None).unwrap();
    dispatcher.dispatch("").unwrap();
    assert_eq!(
        log.calls(),
        vec![("empty".to_string(), String::new()); 2]
    );
}

#[test]
fn test_registration_overwrite() {
    let log = CallLog::new();
    let mut dispatcher = Dispatcher::default();
    dispatcher.register("items/:id", log.callback("first")).unwrap();
    dispatcher.register("items/[0-9]+", log.callback("second")).unwrap();

    dispatcher.dispatch("#/items/3").unwrap();
    assert_eq!(log.labels(), vec!["second"]);
}

#[test]
fn test_id_and_guid_scenario() {
    let log = CallLog::new();
    let dispatcher = item_routes(&log);

    dispatcher.dispatch("#/app/items/ab12-34").unwrap();
    assert_eq!(
        log.calls(),
        vec![("B".to_string(), "#/app/items/ab12-34".to_string())]
    );

    // Digits are word characters, so an all-digit tail is also a valid guid.
    log.clear();
    dispatcher.dispatch("#/app/items/42").unwrap();
    assert_eq!(
        log.calls(),
        vec![
            ("A".to_string(), "#/app/items/42".to_string()),
            ("B".to_string(), "#/app/items/42".to_string()),
        ]
    );
}

#[test]
fn test_notification_scenario() {
    let notifier = RecordingNotifier::new();
    let mut dispatcher = Dispatcher::new(notifier.clone());
    dispatcher
        .register_many([("save", HandlerRef::notify_target("saved", "#panel"))])
        .unwrap();

    dispatcher.dispatch("#/save").unwrap();

    let sent = notifier.notifications();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].topic, "saved");
    assert_eq!(sent[0].scope(), Scope::Target("#panel"));
    assert_eq!(sent[0].payload, "#/save");
}

#[test]
fn test_handler_error_stops_dispatch() {
    let log = CallLog::new();
    let mut dispatcher = Dispatcher::default();
    dispatcher.register("a/b", failing("broken")).unwrap();
    dispatcher.register("b", log.callback("after")).unwrap();

    let err = dispatcher.dispatch("#/a/b").unwrap_err();
    assert!(matches!(err, DispatchError::Handler { .. }));
    assert_eq!(log.count(), 0);

    // The router stays usable.
    dispatcher.dispatch("#/b").unwrap();
    assert_eq!(log.labels(), vec!["after"]);
}

#[test]
fn test_notify_failure_surfaces() {
    let (tx, rx) = futures::channel::mpsc::unbounded::<hashroute::Notification>();
    drop(rx);
    let mut dispatcher = Dispatcher::new(tx);
    dispatcher.register("save", HandlerRef::notify("saved")).unwrap();

    match dispatcher.dispatch("#/save").unwrap_err() {
        DispatchError::Notify { topic, .. } => assert_eq!(topic, "saved"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_channel_notifier_delivers() {
    let (tx, mut rx) = futures::channel::mpsc::unbounded::<hashroute::Notification>();
    let mut dispatcher = Dispatcher::new(tx);
    dispatcher.register("save", HandlerRef::notify("saved")).unwrap();

    dispatcher.dispatch("#/save").unwrap();
    let n = rx.try_next().unwrap().unwrap();
    assert_eq!(n.scope(), Scope::Global);
    assert_eq!(n.payload, "#/save");
}

#[test]
fn test_independent_dispatchers() {
    let seq = Sequence::new();
    let (log_a, log_b) = (CallLog::new(), CallLog::new());

    let mut a = Dispatcher::default();
    let mut b = Dispatcher::default();
    a.register("home", log_a.callback("a")).unwrap();
    b.register("home", log_b.callback("b")).unwrap();
    let spy = SpyHandle::new(&seq);
    b.pool("xhr").push(spy.clone());

    a.dispatch("#/home").unwrap();
    assert_eq!(log_a.count(), 1);
    assert_eq!(log_b.count(), 0);
    assert!(!spy.is_cancelled());
}
