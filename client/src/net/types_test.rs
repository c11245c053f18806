use super::*;

#[test]
fn room_deserializes_server_row() {
    let json = r#"{
        "id": 5,
        "name": "Orders",
        "image_url": "/img/orders.png",
        "participants": [{"id": "u1", "name": "Alice", "role": 2}],
        "last_message": "hi",
        "last_message_time": "2024-06-01T08:00:00Z"
    }"#;
    let room: Room = serde_json::from_str(json).unwrap();
    assert_eq!(room.id, 5);
    assert_eq!(room.participants.len(), 1);
    assert_eq!(room.participants[0].role, 2);
    assert_eq!(room.last_message.as_deref(), Some("hi"));
}

#[test]
fn room_without_messages_has_no_preview() {
    let json = r#"{"id": 9, "name": "Billing", "image_url": "", "participants": [],
                   "last_message": null, "last_message_time": null}"#;
    let room: Room = serde_json::from_str(json).unwrap();
    assert!(room.last_message.is_none());
    assert!(room.last_message_time.is_none());
}

#[test]
fn message_reads_type_field() {
    let json = r#"{"id": 1, "type": "media", "message": "", "sender": "u1",
                   "sender_name": "Alice", "created_at": "2024-06-01T08:00:00Z",
                   "media_url": "/uploads/a.png", "media_type": "image/png",
                   "file_name": "a.png", "file_size": 10}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg.kind, MEDIA_MESSAGE);
    assert!(msg.is_media());
    assert_eq!(msg.file_size, Some(10));
}

#[test]
fn message_without_type_defaults_to_text() {
    let json = r#"{"id": 2, "message": "yo", "sender": "u2", "sender_name": null,
                   "created_at": "2024-06-01T08:00:00Z", "media_url": null,
                   "media_type": null, "file_name": null, "file_size": null}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg.kind, TEXT_MESSAGE);
    assert!(!msg.is_media());
}

#[test]
fn text_send_request_uses_camel_case_and_omits_media() {
    let body = serde_json::to_value(SendMessageRequest::text(5, "hello")).unwrap();
    assert_eq!(body, serde_json::json!({ "roomId": 5, "message": "hello", "type": "text" }));
}

#[test]
fn media_send_request_copies_upload_fields() {
    let upload = UploadResponse {
        url: "/uploads/x.pdf".to_owned(),
        file_type: "application/pdf".to_owned(),
        file_name: "report.pdf".to_owned(),
        file_size: 2048,
    };
    let body = serde_json::to_value(SendMessageRequest::media(9, &upload)).unwrap();
    assert_eq!(body["type"], "media");
    assert_eq!(body["mediaUrl"], "/uploads/x.pdf");
    assert_eq!(body["mediaType"], "application/pdf");
    assert_eq!(body["fileName"], "report.pdf");
    assert_eq!(body["fileSize"], 2048);
}

#[test]
fn upload_response_reads_camel_case() {
    let json = r#"{"url": "/uploads/a.png", "fileType": "image/png", "fileName": "a.png", "fileSize": 3}"#;
    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    assert_eq!(upload.file_type, "image/png");
    assert_eq!(upload.file_size, 3);
}
