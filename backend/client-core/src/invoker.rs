//! Orchestration of a single remote call.
//!
//! ```text
//! Started -> TransportCalled -> Classified-OK    -> Completed
//!                            -> Classified-Error -> Failed
//!                            -> TransportFailed  -> Translated -> Failed
//! ```
//!
//! The observability event is published from [`InvocationGuard`]'s `Drop`, so
//! it fires exactly once on every exit path, including a dropped future.

use crate::classifier;
use crate::error::CreditsafeError;
use crate::events::{
    EVENT_NAMESPACE, EventSink, InvocationEvent, InvocationOutcome, InvocationPayload,
};
use crate::operation::Operation;
use crate::transport::SoapTransport;
use crate::translator;
use crate::xml::XmlNode;

use std::time::SystemTime;

use log::{debug, info, warn};
use uuid::Uuid;

pub const TRANSACTION_ID_LENGTH: usize = 20;

const ABANDONED_MESSAGE: &str = "Invocation abandoned before completion";

/// Fresh random token identifying one invocation.
pub fn transaction_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(TRANSACTION_ID_LENGTH);
    id
}

pub struct OperationInvoker<'a, T> {
    transport: &'a T,
    sink: &'a dyn EventSink,
}

impl<'a, T: SoapTransport> OperationInvoker<'a, T> {
    pub fn new(transport: &'a T, sink: &'a dyn EventSink) -> Self {
        Self { transport, sink }
    }

    /// Send `request`, classify the answer, and return the response body.
    ///
    /// Never retries.
    ///
    /// # Errors
    ///
    /// Returns the classified vendor error, or the translated transport fault.
    pub async fn invoke(
        &self,
        operation: Operation,
        request: XmlNode,
    ) -> Result<XmlNode, CreditsafeError> {
        let mut guard = InvocationGuard::start(self.sink, operation, request.clone());
        debug!("Invoking {operation} [{}]", guard.transaction_id);

        let result = match self.transport.call(operation, &request).await {
            Ok(response) => classifier::classify(&response).map(|()| response),
            Err(fault) => Err(translator::translate(fault)),
        };

        match &result {
            Ok(_) => info!("{operation} [{}] completed", guard.transaction_id),
            Err(error) => warn!("{operation} [{}] failed: {error}", guard.transaction_id),
        }

        guard.finish(&result);
        result
    }
}

/// Publishes the invocation event when dropped.
struct InvocationGuard<'a> {
    sink: &'a dyn EventSink,
    name: String,
    started_at: SystemTime,
    transaction_id: String,
    request: Option<XmlNode>,
    outcome: Option<InvocationOutcome>,
}

impl<'a> InvocationGuard<'a> {
    fn start(sink: &'a dyn EventSink, operation: Operation, request: XmlNode) -> Self {
        Self {
            sink,
            name: format!("{EVENT_NAMESPACE}.{}", operation.key()),
            started_at: SystemTime::now(),
            transaction_id: transaction_id(),
            request: Some(request),
            outcome: None,
        }
    }

    fn finish(&mut self, result: &Result<XmlNode, CreditsafeError>) {
        self.outcome = Some(match result {
            Ok(response) => InvocationOutcome::Response(response.clone()),
            Err(error) => InvocationOutcome::Error(error.clone()),
        });
    }
}

impl Drop for InvocationGuard<'_> {
    fn drop(&mut self) {
        let outcome = self
            .outcome
            .take()
            .unwrap_or_else(|| InvocationOutcome::Error(CreditsafeError::http(ABANDONED_MESSAGE)));

        let event = InvocationEvent {
            name: std::mem::take(&mut self.name),
            started_at: self.started_at,
            finished_at: SystemTime::now(),
            transaction_id: std::mem::take(&mut self.transaction_id),
            payload: InvocationPayload {
                request: self.request.take().unwrap_or_default(),
                outcome,
            },
        };

        if let Err(e) = self.sink.publish(&event) {
            warn!("Failed to publish {} [{}]: {e}", event.name, event.transaction_id);
        }
    }
}
