//! # Route Handlers
//!
//! A route's handler is fixed when the route is registered and is one of two
//! shapes:
//!
//! - [`Callback`]: a function invoked with the navigation token.
//! - [`NotificationDescriptor`]: a topic (and optional target scope) that the
//!   dispatcher forwards to its [`Notifier`] with the token as payload.
//!
//! Both are carried by the [`HandlerRef`] enum so dispatch is an exhaustive
//! `match`, never a runtime type check.
//!
//! [`Notifier`]: crate::Notifier

use crate::{error::BoxError, notify::Scope, outcome::IntoOutcome};
use std::{fmt, sync::Arc};

type CallbackFn = dyn Fn(&str) -> Result<(), BoxError> + Send + Sync + 'static;

/// A route callback, invoked with the normalized navigation token.
///
/// Cloning is cheap; clones share the same function.
#[derive(Clone)]
pub struct Callback {
    f: Arc<CallbackFn>,
}

impl Callback {
    /// Wrap a function as a route callback.
    ///
    /// The function may return `()` or any `Result` accepted by [`IntoOutcome`].
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        Self {
            f: Arc::new(move |token: &str| f(token).into_outcome()),
        }
    }

    /// Invoke the callback.
    pub fn call(&self, token: &str) -> Result<(), BoxError> {
        (self.f)(token)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

/// A route that publishes a notification instead of calling a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDescriptor {
    topic: String,
    target: Option<String>,
}

impl NotificationDescriptor {
    /// Notify `topic` on the global scope.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            target: None,
        }
    }

    /// Deliver to the given scope selector instead of the global scope.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// The notification topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The configured target selector, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// The scope the notification is delivered to.
    pub fn scope(&self) -> Scope<'_> {
        Scope::from_target(self.target())
    }
}

/// What runs when a route matches.
#[derive(Debug, Clone)]
pub enum HandlerRef {
    /// Invoke a function with the token.
    Callback(Callback),
    /// Publish a notification with the token as payload.
    Notify(NotificationDescriptor),
}

impl HandlerRef {
    /// Build a callback handler.
    pub fn callback<F, R>(f: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        HandlerRef::Callback(Callback::new(f))
    }

    /// Build a notification handler for the global scope.
    pub fn notify(topic: impl Into<String>) -> Self {
        HandlerRef::Notify(NotificationDescriptor::new(topic))
    }

    /// Build a notification handler for a specific scope.
    pub fn notify_target(topic: impl Into<String>, target: impl Into<String>) -> Self {
        HandlerRef::Notify(NotificationDescriptor::new(topic).with_target(target))
    }
}

impl From<Callback> for HandlerRef {
    fn from(callback: Callback) -> Self {
        HandlerRef::Callback(callback)
    }
}

impl From<NotificationDescriptor> for HandlerRef {
    fn from(descriptor: NotificationDescriptor) -> Self {
        HandlerRef::Notify(descriptor)
    }
}
