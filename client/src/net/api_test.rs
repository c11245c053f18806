use super::*;

#[test]
fn messages_endpoint_formats_expected_path() {
    assert_eq!(messages_endpoint(42), "/api/messages/42");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("fetch rooms", 401), "fetch rooms failed: 401");
}

#[test]
fn error_text_prefers_server_body() {
    assert_eq!(
        error_text(Some("Not a participant".to_owned()), "send message", 403),
        "Not a participant"
    );
}

#[test]
fn error_text_falls_back_to_status_when_body_missing_or_blank() {
    assert_eq!(error_text(None, "login", 500), "login failed: 500");
    assert_eq!(error_text(Some("  ".to_owned()), "login", 502), "login failed: 502");
}

#[test]
fn user_id_header_matches_server() {
    assert_eq!(USER_ID_HEADER, "x-user-id");
}
