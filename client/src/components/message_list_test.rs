use super::*;

fn document(file_name: Option<&str>, file_size: Option<i64>) -> Message {
    Message {
        id: 1,
        kind: "media".to_owned(),
        message: String::new(),
        sender: "u1".to_owned(),
        sender_name: None,
        created_at: "2024-06-01T08:05:00Z".to_owned(),
        media_url: Some("/uploads/a.pdf".to_owned()),
        media_type: Some("application/pdf".to_owned()),
        file_name: file_name.map(str::to_owned),
        file_size,
    }
}

#[test]
fn short_time_extracts_hours_and_minutes() {
    assert_eq!(short_time("2024-06-01T08:05:00Z"), "08:05");
    assert_eq!(short_time("bad"), "bad");
}

#[test]
fn document_label_includes_readable_size() {
    assert_eq!(document_label(&document(Some("report.pdf"), Some(2048))), "report.pdf (2.0 KB)");
}

#[test]
fn document_label_without_size_or_name() {
    assert_eq!(document_label(&document(Some("report.pdf"), None)), "report.pdf");
    assert_eq!(document_label(&document(None, None)), "Download");
}
