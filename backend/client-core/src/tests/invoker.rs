use crate::error::{CreditsafeError, ErrorKind, EventSinkError, TransportFault};
use crate::events::{EventSink, InvocationEvent};
use crate::invoker::{OperationInvoker, TRANSACTION_ID_LENGTH, transaction_id};
use crate::operation::Operation;
use crate::transport::SoapTransport;
use crate::xml::XmlNode;

use std::sync::Mutex;
use std::time::Duration;

enum Reply {
    Body(XmlNode),
    Fault(TransportFault),
    Hang,
}

struct StubTransport {
    reply: Reply,
}

impl SoapTransport for StubTransport {
    async fn call(
        &self,
        _operation: Operation,
        _message: &XmlNode,
    ) -> Result<XmlNode, TransportFault> {
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Fault(fault) => Err(fault.clone()),
            Reply::Hang => std::future::pending().await,
        }
    }
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<InvocationEvent>>,
    fail: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn events(&self) -> Vec<InvocationEvent> {
        self.events.lock().expect("sink lock").clone()
    }
}

impl EventSink for RecordingSink {
    fn publish(&self, event: &InvocationEvent) -> Result<(), EventSinkError> {
        self.events.lock().expect("sink lock").push(event.clone());
        if self.fail {
            return Err(EventSinkError::publish("sink unavailable"));
        }
        Ok(())
    }
}

fn request() -> XmlNode {
    XmlNode::new("oper:FindCompanies").with_child(XmlNode::leaf("oper:countries", "GB"))
}

fn body_with_message(code: &str) -> XmlNode {
    XmlNode::new("s:Body").with_child(
        XmlNode::new("FindCompaniesResponse").with_child(
            XmlNode::new("FindCompaniesResult").with_child(
                XmlNode::new("Messages")
                    .with_child(XmlNode::new("Message").with_attribute("Code", code)),
            ),
        ),
    )
}

/// **VALUE**: Verifies a successful call returns the body and emits one event.
///
/// **WHY THIS MATTERS**: Every invocation must be observable exactly once, with
/// the request and the response in the payload.
///
/// **BUG THIS CATCHES**: Would catch a missing event, a duplicate event, or a
/// wrong event name.
#[tokio::test]
async fn given_successful_transport_when_invoked_then_returns_body_and_publishes_once() {
    // GIVEN: A transport answering with an informational message only
    let body = body_with_message("010101");
    let transport = StubTransport {
        reply: Reply::Body(body.clone()),
    };
    let sink = RecordingSink::default();

    // WHEN: Invoking
    let result = OperationInvoker::new(&transport, &sink)
        .invoke(Operation::FindCompanies, request())
        .await;

    // THEN: The body comes back and one event is recorded
    assert_eq!(result.expect("should succeed"), body);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.name, "creditsafe.find_companies");
    assert_eq!(event.transaction_id.len(), TRANSACTION_ID_LENGTH);
    assert_eq!(event.payload.request, request());
    assert_eq!(event.payload.response(), Some(&body));
    assert!(event.payload.error().is_none());
    assert!(event.finished_at >= event.started_at);
}

/// **VALUE**: Verifies a classified vendor error is returned and recorded.
///
/// **BUG THIS CATCHES**: Would catch the event carrying the raw response instead
/// of the error the caller actually received.
#[tokio::test]
async fn given_error_message_when_invoked_then_returns_error_and_records_it() {
    let transport = StubTransport {
        reply: Reply::Body(body_with_message("010103")),
    };
    let sink = RecordingSink::default();

    let error = OperationInvoker::new(&transport, &sink)
        .invoke(Operation::RetrieveCompanyOnlineReport, request())
        .await
        .expect_err("should fail");

    assert_eq!(error.kind(), ErrorKind::Data);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "creditsafe.retrieve_company_online_report");
    let recorded = events[0].payload.error().expect("error recorded");
    assert_eq!(recorded.kind(), ErrorKind::Data);
    assert_eq!(recorded.message(), error.message());
    assert!(events[0].payload.response().is_none());
}

#[tokio::test]
async fn given_transport_fault_when_invoked_then_translated_error_recorded() {
    let transport = StubTransport {
        reply: Reply::Fault(TransportFault::from_http_response(401, "denied")),
    };
    let sink = RecordingSink::default();

    let error = OperationInvoker::new(&transport, &sink)
        .invoke(Operation::GetPortfolios, request())
        .await
        .expect_err("should fail");

    assert_eq!(error.kind(), ErrorKind::Account);
    assert_eq!(sink.events().len(), 1);
    assert_eq!(
        sink.events()[0].payload.error().map(CreditsafeError::kind),
        Some(ErrorKind::Account)
    );
}

/// **VALUE**: Verifies a failing sink never changes the call's outcome.
///
/// **WHY THIS MATTERS**: Observability is best effort. A broken subscriber must
/// not turn a successful credit check into a failure.
#[tokio::test]
async fn given_failing_sink_when_invoked_then_outcome_unchanged() {
    let transport = StubTransport {
        reply: Reply::Body(body_with_message("010101")),
    };
    let sink = RecordingSink::failing();

    let result = OperationInvoker::new(&transport, &sink)
        .invoke(Operation::FindCompanies, request())
        .await;

    assert!(result.is_ok());
    assert_eq!(sink.events().len(), 1);
}

/// **VALUE**: Verifies a cancelled invocation still publishes its event.
///
/// **WHY THIS MATTERS**: Callers wrap calls in their own timeouts. Dropping the
/// future is an exit path too, and must be as observable as the others.
///
/// **BUG THIS CATCHES**: Would catch event emission moved out of the drop guard.
#[tokio::test]
async fn given_cancelled_invocation_when_dropped_then_publishes_abandoned_event() {
    // GIVEN: A transport that never answers
    let transport = StubTransport { reply: Reply::Hang };
    let sink = RecordingSink::default();
    let invoker = OperationInvoker::new(&transport, &sink);

    // WHEN: The caller gives up
    let outcome = tokio::time::timeout(
        Duration::from_millis(20),
        invoker.invoke(Operation::ListMonitoredCompanies, request()),
    )
    .await;

    // THEN: One event recording an HTTP-family error
    assert!(outcome.is_err(), "invocation should have been cancelled");
    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "creditsafe.list_monitored_companies");
    assert_eq!(
        events[0].payload.error().map(CreditsafeError::kind),
        Some(ErrorKind::Http)
    );
}

#[test]
fn given_many_transaction_ids_when_generated_then_fixed_length_and_distinct() {
    let first = transaction_id();
    let second = transaction_id();

    assert_eq!(first.len(), TRANSACTION_ID_LENGTH);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(first, second);
}
