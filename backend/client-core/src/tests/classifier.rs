use crate::classifier::{classify, observed_messages};
use crate::error::ErrorKind;
use crate::xml::{self, XmlNode};

fn result_with_messages(messages: &str) -> XmlNode {
    let body = format!(
        r#"<soap:Body xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
             <FindCompaniesResponse xmlns="http://www.creditsafe.com/globaldata/operations">
               <FindCompaniesResult>
                 <Messages>{messages}</Messages>
               </FindCompaniesResult>
             </FindCompaniesResponse>
           </soap:Body>"#
    );
    xml::parse(&body).expect("fixture should parse")
}

/// **VALUE**: Verifies that an error-level message becomes its category's error
/// with the detail text appended.
///
/// **WHY THIS MATTERS**: The service answers HTTP 200 for business failures. The
/// message element is the only signal, and its text is the only explanation.
///
/// **BUG THIS CATCHES**: Would catch a classifier that ignores messages, picks the
/// wrong category, or drops the detail.
#[test]
fn given_error_message_with_detail_when_classified_then_request_error() {
    // GIVEN: A response carrying 030102 with detail text
    let response = result_with_messages(
        r#"<Message Type="Error" Code="030102">Invalid countries list specified.</Message>"#,
    );

    // WHEN: Classifying
    let error = classify(&response).expect_err("should fail");

    // THEN: A request error with the exact message
    assert_eq!(error.kind(), ErrorKind::Request);
    assert_eq!(
        error.message(),
        "Invalid operation parameters (Invalid countries list specified.)"
    );
}

#[test]
fn given_error_message_without_detail_when_classified_then_catalog_text_only() {
    let response = result_with_messages(r#"<Message Type="Error" Code="030102"/>"#);

    let error = classify(&response).expect_err("should fail");

    assert_eq!(error.message(), "Invalid operation parameters");
}

/// **VALUE**: Verifies informational messages never fail the call.
///
/// **BUG THIS CATCHES**: Would catch "No results" being raised as an error, which
/// would turn every empty search into a failure.
#[test]
fn given_only_informational_messages_when_classified_then_ok() {
    let response = result_with_messages(
        r#"<Message Type="Information" Code="010101">There are no results matching specified criteria.</Message>
           <Message Type="Information" Code="10106">Legal notice</Message>"#,
    );

    assert!(classify(&response).is_ok());
    assert_eq!(observed_messages(&response).len(), 2);
}

#[test]
fn given_response_without_messages_when_classified_then_ok() {
    let response = result_with_messages("");

    assert!(classify(&response).is_ok());
    assert!(observed_messages(&response).is_empty());
}

/// **VALUE**: Verifies the first error in document order decides the outcome.
///
/// **BUG THIS CATCHES**: Would catch a classifier that reports the last error, or
/// stops at the first message even when it is informational.
#[test]
fn given_info_then_two_errors_when_classified_then_first_error_wins() {
    let response = result_with_messages(
        r#"<Message Code="010102">Too many results</Message>
           <Message Code="010103"/>
           <Message Code="020101"/>"#,
    );

    let error = classify(&response).expect_err("should fail");

    assert_eq!(error.kind(), ErrorKind::Data);
    assert_eq!(error.message(), "Report unavailable");
}

/// **VALUE**: Verifies both message spellings are recognised.
///
/// **WHY THIS MATTERS**: Some operations bind messages to a `q1` prefix instead
/// of the default namespace; missing those would let failures pass as success.
#[test]
fn given_q1_prefixed_message_when_classified_then_detected() {
    let response = xml::parse(
        r#"<s:Body xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
             <GetPortfoliosResponse xmlns:q1="http://www.creditsafe.com/globaldata/datatypes">
               <GetPortfoliosResult>
                 <q1:Messages><q1:Message Code="030102">Invalid portfolio list</q1:Message></q1:Messages>
               </GetPortfoliosResult>
             </GetPortfoliosResponse>
           </s:Body>"#,
    )
    .expect("fixture should parse");

    let error = classify(&response).expect_err("should fail");

    assert_eq!(error.kind(), ErrorKind::Request);
    assert_eq!(error.message(), "Invalid operation parameters (Invalid portfolio list)");
}

#[test]
fn given_other_prefix_when_scanned_then_ignored() {
    let response = XmlNode::new("Body").with_child(
        XmlNode::new("x:Message").with_attribute("Code", "030102"),
    );

    assert!(observed_messages(&response).is_empty());
    assert!(classify(&response).is_ok());
}

#[test]
fn given_unknown_code_when_classified_then_unknown_api_error() {
    let response = result_with_messages(r#"<Message Code="010199">odd</Message>"#);

    let error = classify(&response).expect_err("should fail");

    assert_eq!(error.kind(), ErrorKind::UnknownApi);
    assert_eq!(error.message(), "Unknown error (odd)");
}

#[test]
fn given_message_without_code_when_scanned_then_skipped() {
    let response = result_with_messages(r#"<Message>no code here</Message>"#);

    assert!(observed_messages(&response).is_empty());
    assert!(classify(&response).is_ok());
}

#[test]
fn given_account_error_when_classified_then_account_error() {
    let response = result_with_messages(r#"<Message Code="20101"/>"#);

    let error = classify(&response).expect_err("should fail");

    assert_eq!(error.kind(), ErrorKind::Account);
    assert!(error.is_api_error());
    assert!(!error.is_http_error());
}
