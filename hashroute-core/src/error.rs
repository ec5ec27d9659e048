//! Error types for hashroute.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HashRouteError`] - Top-level error type for all router operations
//! - [`PatternError`] - Errors compiling a registration pattern
//! - [`DispatchError`] - Errors raised by matched handlers during dispatch
//! - [`CancelError`] - Errors from individual cancel operations

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all router operations.
#[derive(Error, Debug)]
pub enum HashRouteError {
    /// A registration pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// A matched handler failed during dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors that can occur while compiling a registration pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    /// The pattern is not a valid regular expression after placeholder
    /// substitution and anchoring.
    #[error("invalid route pattern `{pattern}` (expanded to `{expanded}`)")]
    Invalid {
        /// The pattern as it was passed to registration.
        pattern: String,
        /// The pattern after placeholder substitution and anchoring.
        expanded: String,
        /// The regex engine's diagnostic.
        #[source]
        source: BoxError,
    },
}

impl PatternError {
    /// The registration string that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Invalid { pattern, .. } => pattern,
        }
    }
}

/// Errors that can occur while invoking matched handlers.
///
/// The dispatcher never catches these: the first failing handler stops the
/// dispatch and its error is returned to the caller.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A callback handler returned an error.
    #[error("handler for route `{pattern}` failed")]
    Handler {
        /// Canonical pattern of the route whose handler failed.
        pattern: String,
        /// The handler's error.
        #[source]
        source: BoxError,
    },

    /// The notification sink rejected a descriptor route's notification.
    #[error("notification `{topic}` could not be delivered")]
    Notify {
        /// Topic of the undeliverable notification.
        topic: String,
        /// The sink's error.
        #[source]
        source: BoxError,
    },
}

/// Errors from a single cancel operation.
///
/// The coordinator records and logs these but never returns them.
#[derive(Error, Debug)]
pub enum CancelError {
    /// The handle's cancel operation returned an error.
    #[error("cancel failed: {0}")]
    Failed(#[source] BoxError),

    /// The handle's cancel operation panicked.
    #[error("cancel panicked: {0}")]
    Panicked(String),
}

impl From<BoxError> for CancelError {
    fn from(err: BoxError) -> Self {
        CancelError::Failed(err)
    }
}
