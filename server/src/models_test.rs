use super::*;
use time::macros::datetime;

#[test]
fn message_serializes_kind_as_type() {
    let msg = Message {
        id: 7,
        kind: TEXT_MESSAGE_TYPE.to_owned(),
        message: "hello".to_owned(),
        sender: "u1".to_owned(),
        sender_name: Some("Alice".to_owned()),
        created_at: datetime!(2024-05-01 10:00:00 UTC),
        media_url: None,
        media_type: None,
        file_name: None,
        file_size: None,
    };
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["type"], "text");
    assert!(json.get("kind").is_none());
    assert_eq!(json["sender_name"], "Alice");
    assert_eq!(json["created_at"], "2024-05-01T10:00:00Z");
    assert!(json["media_url"].is_null());
    assert!(json["file_size"].is_null());
}

#[test]
fn room_summary_without_messages_serializes_nulls() {
    let room = RoomSummary {
        id: 9,
        name: "Support".to_owned(),
        image_url: "/img/support.png".to_owned(),
        participants: vec![User { id: "u1".to_owned(), name: "Alice".to_owned(), role: 2 }],
        last_message: None,
        last_message_time: None,
    };
    let json = serde_json::to_value(&room).unwrap();
    assert!(json["last_message"].is_null());
    assert!(json["last_message_time"].is_null());
    assert_eq!(json["participants"][0]["role"], 2);
}

#[test]
fn new_text_message_defaults_media_fields() {
    let msg = NewMessage::text(5, "u1", "hi");
    assert_eq!(msg.kind, "text");
    assert_eq!(msg.room_id, 5);
    assert!(msg.media_url.is_none());
    assert!(msg.file_size.is_none());
}

#[test]
fn message_without_sender_name_omits_key() {
    let msg = Message {
        id: 8,
        kind: "media".to_owned(),
        message: String::new(),
        sender: "u2".to_owned(),
        sender_name: None,
        created_at: datetime!(2024-05-01 10:00:00 UTC),
        media_url: Some("/uploads/a.png".to_owned()),
        media_type: Some("image/png".to_owned()),
        file_name: Some("a.png".to_owned()),
        file_size: Some(3),
    };
    let json = serde_json::to_value(&msg).unwrap();
    assert!(json.get("sender_name").is_none());
    assert_eq!(json["type"], "media");
}
