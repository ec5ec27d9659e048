#![allow(dead_code)]

use hashroute::{Dispatcher, HandlerRef, testing::CallLog};

// ============================================================================
// Fixtures
// ============================================================================

/// A dispatcher with an `items` route per numeric and guid placeholder.
pub fn item_routes(log: &CallLog) -> Dispatcher {
    Dispatcher::builder()
        .route("items/:id", log.callback("A"))
        .route("items/:guid", log.callback("B"))
        .build()
        .unwrap()
}

/// A callback that always fails with `message`.
pub fn failing(message: &'static str) -> HandlerRef {
    HandlerRef::callback(move |_: &str| -> Result<(), std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, message))
    })
}
