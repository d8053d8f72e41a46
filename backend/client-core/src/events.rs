//! Per-invocation observability events and the sinks that receive them.
//!
//! Exactly one [`InvocationEvent`] is published per remote call, success or
//! failure. Sinks are fire-and-forget: a publish failure is logged by the
//! invoker and never replaces the call's own outcome.

use crate::error::{CreditsafeError, EventSinkError};
use crate::xml::XmlNode;

use std::time::{Duration, SystemTime};

use log::debug;
use tokio::sync::broadcast;

/// Prefix of every event name, e.g. `creditsafe.find_companies`.
pub const EVENT_NAMESPACE: &str = "creditsafe";

const DEFAULT_BROADCAST_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub enum InvocationOutcome {
    Response(XmlNode),
    Error(CreditsafeError),
}

#[derive(Debug, Clone)]
pub struct InvocationPayload {
    pub request: XmlNode,
    pub outcome: InvocationOutcome,
}

impl InvocationPayload {
    pub fn response(&self) -> Option<&XmlNode> {
        match &self.outcome {
            InvocationOutcome::Response(response) => Some(response),
            InvocationOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CreditsafeError> {
        match &self.outcome {
            InvocationOutcome::Error(error) => Some(error),
            InvocationOutcome::Response(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvocationEvent {
    pub name: String,
    pub started_at: SystemTime,
    pub finished_at: SystemTime,
    pub transaction_id: String,
    pub payload: InvocationPayload,
}

impl InvocationEvent {
    pub fn duration(&self) -> Duration {
        self.finished_at
            .duration_since(self.started_at)
            .unwrap_or_default()
    }
}

/// Receiver of invocation events.
pub trait EventSink: Send + Sync {
    /// # Errors
    ///
    /// Returns [`EventSinkError`] if the event could not be delivered.
    fn publish(&self, event: &InvocationEvent) -> Result<(), EventSinkError>;
}

/// Default sink: writes a one-line summary to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn publish(&self, event: &InvocationEvent) -> Result<(), EventSinkError> {
        let outcome = match &event.payload.outcome {
            InvocationOutcome::Response(_) => String::from("ok"),
            InvocationOutcome::Error(error) => format!("{:?}: {}", error.kind(), error.message()),
        };

        debug!(
            "{} [{}] finished in {}ms: {}",
            event.name,
            event.transaction_id,
            event.duration().as_millis(),
            outcome
        );

        Ok(())
    }
}

/// Pub/sub sink; every subscriber receives a clone of each event.
#[derive(Debug, Clone)]
pub struct BroadcastEventSink {
    sender: broadcast::Sender<InvocationEvent>,
}

impl BroadcastEventSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<InvocationEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new(DEFAULT_BROADCAST_CAPACITY)
    }
}

impl EventSink for BroadcastEventSink {
    fn publish(&self, event: &InvocationEvent) -> Result<(), EventSinkError> {
        self.sender
            .send(event.clone())
            .map(|_| ())
            .map_err(|_| EventSinkError::publish(format!("no subscribers for {}", event.name)))
    }
}
