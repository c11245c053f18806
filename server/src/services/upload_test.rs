use super::*;

const MIB: usize = 1024 * 1024;

#[test]
fn allowed_types_cover_images_videos_and_pdf() {
    assert!(is_allowed_type("image/png"));
    assert!(is_allowed_type("image/jpeg"));
    assert!(is_allowed_type("video/mp4"));
    assert!(is_allowed_type("application/pdf"));
}

#[test]
fn disallowed_types_are_rejected() {
    assert!(!is_allowed_type("application/zip"));
    assert!(!is_allowed_type("text/plain"));
    assert!(!is_allowed_type(""));
    assert!(!is_allowed_type("application/pdfx"));
}

#[test]
fn check_upload_accepts_exact_limit() {
    assert!(check_upload("image/png", 10 * MIB, 10 * MIB).is_ok());
}

#[test]
fn check_upload_rejects_twelve_megabytes() {
    let err = check_upload("image/png", 12 * MIB, 10 * MIB).unwrap_err();
    assert!(matches!(err, UploadError::TooLarge { size, max } if size == 12 * MIB && max == 10 * MIB));
    assert!(err.to_string().contains("Maximum size is 10 MB"));
}

#[test]
fn check_upload_reports_size_before_type() {
    let err = check_upload("application/zip", 11 * MIB, 10 * MIB).unwrap_err();
    assert!(matches!(err, UploadError::TooLarge { .. }));
}

#[test]
fn stored_name_takes_extension_from_mime_type() {
    let name = stored_name("image/JPEG");
    assert!(name.ends_with(".jpg"), "got {name}");
    assert_eq!(name.len(), 32 + 4);
    assert!(stored_name("application/pdf").ends_with(".pdf"));
    assert!(stored_name("video/mp4; codecs=avc1").ends_with(".mp4"));
}

#[test]
fn stored_name_is_bare_for_unmapped_types() {
    assert!(!stored_name("image/svg+xml").contains('.'));
    assert!(!stored_name("image/x-unknown").contains('.'));
    assert!(!stored_name("text/html").contains('.'));
}

#[tokio::test]
async fn store_upload_ignores_client_file_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config = UploadConfig { dir: dir.path().to_path_buf(), max_bytes: MIB };

    let stored = store_upload(&config, "evil.html", "image/png", b"<script></script>")
        .await
        .unwrap();

    assert!(stored.url.ends_with(".png"), "got {}", stored.url);
    assert_eq!(stored.file_name, "evil.html");
}

#[test]
fn stored_names_are_unique() {
    assert_ne!(stored_name("image/png"), stored_name("image/png"));
}

#[tokio::test]
async fn store_upload_writes_file_and_returns_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let config = UploadConfig { dir: dir.path().join("media"), max_bytes: MIB };

    let stored = store_upload(&config, "photo.png", "image/png", b"not-really-a-png")
        .await
        .unwrap();

    assert!(stored.url.starts_with("/uploads/"));
    assert_eq!(stored.file_type, "image/png");
    assert_eq!(stored.file_name, "photo.png");
    assert_eq!(stored.file_size, 16);

    let on_disk = stored.url.trim_start_matches("/uploads/");
    let bytes = std::fs::read(config.dir.join(on_disk)).unwrap();
    assert_eq!(bytes, b"not-really-a-png");
}

#[tokio::test]
async fn store_upload_rejects_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = UploadConfig { dir: dir.path().join("media"), max_bytes: 4 };

    let err = store_upload(&config, "big.png", "image/png", b"12345").await.unwrap_err();
    assert!(matches!(err, UploadError::TooLarge { .. }));
    assert!(!config.dir.exists());
}

#[test]
fn stored_upload_serializes_camel_case() {
    let stored = StoredUpload {
        url: "/uploads/x.pdf".into(),
        file_type: "application/pdf".into(),
        file_name: "x.pdf".into(),
        file_size: 10,
    };
    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["fileType"], "application/pdf");
    assert_eq!(json["fileName"], "x.pdf");
    assert_eq!(json["fileSize"], 10);
}
