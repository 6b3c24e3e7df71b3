use reqwest::StatusCode;
use spotop::spotify::FetchError;
use spotop::types::RawPage;

#[test]
fn test_rejected_credential_is_auth_error() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
        match FetchError::from_status(status, "{\"error\":\"expired\"}") {
            FetchError::Auth(msg) => assert!(msg.contains(&status.as_u16().to_string())),
            other => panic!("unexpected error {:?}", other),
        }
    }
}

#[test]
fn test_other_statuses_are_network_errors() {
    for status in [
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::BAD_GATEWAY,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::NOT_FOUND,
    ] {
        assert!(matches!(
            FetchError::from_status(status, ""),
            FetchError::Network(_)
        ));
    }
}

#[test]
fn test_status_message_keeps_trimmed_body() {
    let err = FetchError::from_status(StatusCode::SERVICE_UNAVAILABLE, "  try later \n");
    assert_eq!(
        err,
        FetchError::Network("503 Service Unavailable: try later".to_string())
    );
    assert_eq!(
        err.to_string(),
        "network error: 503 Service Unavailable: try later"
    );
}

#[test]
fn test_undecodable_body_is_malformed_response() {
    let decode_err = serde_json::from_str::<RawPage>("{\"error\":{\"status\":500}}").unwrap_err();
    assert!(matches!(
        FetchError::from(decode_err),
        FetchError::MalformedResponse(_)
    ));

    let truncated = serde_json::from_str::<RawPage>("{\"items\": [").unwrap_err();
    let err = FetchError::from(truncated);
    assert!(err.to_string().starts_with("malformed response: "));
}
