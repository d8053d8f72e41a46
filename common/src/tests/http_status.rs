use crate::HttpStatusCode;

/// **VALUE**: Verifies the two status codes the client special-cases.
///
/// **WHY THIS MATTERS**: The vendor reports bad credentials as a bare 401 and
/// upstream failures as 502; both map to dedicated error kinds.
///
/// **BUG THIS CATCHES**: Would catch if the constants drift or comparisons invert.
#[test]
fn given_special_status_codes_when_checked_then_detected() {
    assert!(HttpStatusCode(401).is_unauthorized());
    assert!(!HttpStatusCode(403).is_unauthorized());
    assert!(HttpStatusCode::from(502).is_bad_gateway());
    assert!(!HttpStatusCode(503).is_bad_gateway());
}

#[test]
fn given_status_ranges_when_checked_then_categorized() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert_eq!(HttpStatusCode(418).to_string(), "418");
}
