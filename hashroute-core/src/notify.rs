//! Outbound notification sink.

use crate::error::BoxError;
use std::sync::Arc;

/// Selector of the scope that receives notifications without a target.
pub const GLOBAL_SCOPE: &str = "document";

/// Where a notification is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// The single well-known global scope.
    Global,
    /// A specific scope selector.
    Target(&'a str),
}

impl<'a> Scope<'a> {
    /// `Target` if a selector is given, otherwise `Global`.
    pub fn from_target(target: Option<&'a str>) -> Self {
        match target {
            Some(selector) => Scope::Target(selector),
            None => Scope::Global,
        }
    }

    /// The selector string, [`GLOBAL_SCOPE`] for the global scope.
    pub fn selector(&self) -> &'a str {
        match self {
            Scope::Global => GLOBAL_SCOPE,
            Scope::Target(selector) => selector,
        }
    }
}

/// A publish/subscribe sink for descriptor routes.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive route notifications",
    label = "missing `Notifier` implementation",
    note = "Implement `Notifier::notify` to forward topics to your event bus."
)]
pub trait Notifier: Send + Sync {
    /// Publish `topic` to `scope` with `payload`.
    fn notify(&self, topic: &str, scope: Scope<'_>, payload: &str) -> Result<(), BoxError>;
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, topic: &str, scope: Scope<'_>, payload: &str) -> Result<(), BoxError> {
        (**self).notify(topic, scope, payload)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, topic: &str, scope: Scope<'_>, payload: &str) -> Result<(), BoxError> {
        (**self).notify(topic, scope, payload)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, topic: &str, scope: Scope<'_>, payload: &str) -> Result<(), BoxError> {
        (**self).notify(topic, scope, payload)
    }
}

/// A notifier that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _topic: &str, _scope: Scope<'_>, _payload: &str) -> Result<(), BoxError> {
        Ok(())
    }
}

/// An owned record of one notification, for sinks that queue them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The topic.
    pub topic: String,
    /// Target selector, `None` for the global scope.
    pub target: Option<String>,
    /// The navigation token.
    pub payload: String,
}

impl Notification {
    /// Capture a notification.
    pub fn new(topic: &str, scope: Scope<'_>, payload: &str) -> Self {
        let target = match scope {
            Scope::Global => None,
            Scope::Target(selector) => Some(selector.to_string()),
        };
        Self {
            topic: topic.to_string(),
            target,
            payload: payload.to_string(),
        }
    }

    /// The scope this notification was delivered to.
    pub fn scope(&self) -> Scope<'_> {
        Scope::from_target(self.target.as_deref())
    }
}

// Integration: queue notifications on an unbounded channel
#[cfg(feature = "futures")]
impl Notifier for futures::channel::mpsc::UnboundedSender<Notification> {
    fn notify(&self, topic: &str, scope: Scope<'_>, payload: &str) -> Result<(), BoxError> {
        self.unbounded_send(Notification::new(topic, scope, payload))
            .map_err(|e| Box::new(e.into_send_error()) as BoxError)
    }
}
