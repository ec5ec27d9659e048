//! Testing utilities for hashroute.
//!
//! This module provides spies for the three collaborators a dispatcher talks
//! to: cancellable handles, route callbacks and the notification sink.
//!
//! # Features
//!
//! - [`Sequence`]: A shared monotonic counter for ordering assertions
//! - [`SpyHandle`]: A handle that records when it was cancelled
//! - [`FailingHandle`]: A handle whose cancel errors or panics
//! - [`CallLog`]: Builds callbacks that record the tokens they receive
//! - [`RecordingNotifier`]: A notifier that records every notification

use hashroute_core::{BoxError, Cancellable, HandlerRef, Notification, Notifier, Scope};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, AtomicUsize, Ordering},
};

// ============================================================================
// Sequence
// ============================================================================

/// A shared, strictly increasing counter.
///
/// Used instead of wall-clock timestamps so "happened before" assertions are
/// exact.
#[derive(Debug, Clone, Default)]
pub struct Sequence(Arc<AtomicU64>);

impl Sequence {
    /// Start at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next stamp. The first stamp is 1.
    pub fn next_stamp(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// ============================================================================
// Spy Handle
// ============================================================================

/// A handle that records every cancel with a [`Sequence`] stamp.
///
/// # Example
///
/// ```rust,ignore
/// let seq = Sequence::new();
/// let spy = SpyHandle::new(&seq);
/// pool.push(spy.clone());
///
/// dispatcher.dispatch("#/next")?;
/// assert!(spy.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct SpyHandle {
    sequence: Sequence,
    stamps: Arc<Mutex<Vec<u64>>>,
}

impl SpyHandle {
    /// A spy stamping cancels from `sequence`.
    pub fn new(sequence: &Sequence) -> Self {
        Self {
            sequence: sequence.clone(),
            stamps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Whether cancel was called at least once.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_count() > 0
    }

    /// How many times cancel was called.
    pub fn cancel_count(&self) -> usize {
        self.stamps.lock().unwrap().len()
    }

    /// Stamp of the first cancel.
    pub fn cancelled_at(&self) -> Option<u64> {
        self.stamps.lock().unwrap().first().copied()
    }
}

impl Cancellable for SpyHandle {
    fn cancel(&self) -> Result<(), BoxError> {
        let stamp = self.sequence.next_stamp();
        self.stamps.lock().unwrap().push(stamp);
        Ok(())
    }
}

// ============================================================================
// Failing Handle
// ============================================================================

/// A handle whose cancel always fails, either by error or by panic.
#[derive(Debug, Clone)]
pub struct FailingHandle {
    panics: bool,
    attempts: Arc<AtomicUsize>,
}

impl FailingHandle {
    /// Cancel returns an error.
    pub fn error() -> Self {
        Self {
            panics: false,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Cancel panics.
    pub fn panic() -> Self {
        Self {
            panics: true,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times cancel was attempted.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Cancellable for FailingHandle {
    fn cancel(&self) -> Result<(), BoxError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.panics {
            panic!("cancel on a finished request");
        }
        Err("cancel on a finished request".into())
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// Records `(label, token, stamp)` for each callback invocation.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// dispatcher.register("items/:id", log.callback("item"))?;
/// dispatcher.dispatch("#/items/1")?;
/// assert_eq!(log.labels(), vec!["item"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    sequence: Sequence,
    calls: Arc<Mutex<Vec<(String, String, u64)>>>,
}

impl CallLog {
    /// A log with its own sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// A log stamping calls from a shared sequence.
    pub fn with_sequence(sequence: &Sequence) -> Self {
        Self {
            sequence: sequence.clone(),
            calls: Arc::default(),
        }
    }

    /// A callback handler that records under `label`.
    pub fn callback(&self, label: &str) -> HandlerRef {
        let log = self.clone();
        let label = label.to_string();
        HandlerRef::callback(move |token: &str| {
            let stamp = log.sequence.next_stamp();
            log.calls
                .lock()
                .unwrap()
                .push((label.clone(), token.to_string(), stamp));
        })
    }

    /// Recorded `(label, token)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(label, token, _)| (label.clone(), token.clone()))
            .collect()
    }

    /// Recorded labels, in call order.
    pub fn labels(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(label, _, _)| label.clone())
            .collect()
    }

    /// Stamp of each call, in call order.
    pub fn stamps(&self) -> Vec<u64> {
        self.calls.lock().unwrap().iter().map(|c| c.2).collect()
    }

    /// Number of calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Forget all calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Notifier
// ============================================================================

/// A notifier that records every notification.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    /// Topics notified so far.
    pub fn topics(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.topic.clone())
            .collect()
    }

    /// Forget all notifications.
    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, topic: &str, scope: Scope<'_>, payload: &str) -> Result<(), BoxError> {
        self.sent
            .lock()
            .unwrap()
            .push(Notification::new(topic, scope, payload));
        Ok(())
    }
}
