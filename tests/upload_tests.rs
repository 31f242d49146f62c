//! Integration tests for image upload and removal.

use lottery_admin::{AdminConfig, BaseUrl, HttpError, ImageUpload, ResourceClient};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ResourceClient {
    let config = AdminConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    ResourceClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_upload_sends_single_image_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/upload-image"))
        .and(header_regex("content-type", "^multipart/form-data; boundary=.+$"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"banner.png\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"filename": "1700000000-banner.png"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let upload = ImageUpload::new("banner.png", b"not really a png".to_vec());
    let result = client.upload_image(upload).await.unwrap();

    assert_eq!(result["filename"], "1700000000-banner.png");
    assert_eq!(
        client.image_url(result["filename"].as_str().unwrap()),
        format!("{}/uploads/1700000000-banner.png", server.uri())
    );

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body).to_ascii_lowercase();
    assert!(body.contains("content-type: image/png"));
    assert!(body.contains("not really a png"));
}

#[tokio::test]
async fn test_upload_missing_file_records_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = client
        .upload_image_file("/definitely/not/here/banner.png")
        .await;

    assert!(matches!(result, Err(HttpError::Upload(_))));
    assert!(client
        .error()
        .unwrap()
        .starts_with("Failed to read upload"));
    assert!(!client.loading());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_rejected_by_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/upload-image"))
        .respond_with(ResponseTemplate::new(413).set_body_json(json!({"error": "File too large"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .upload_image(ImageUpload::new("huge.jpg", vec![0_u8; 64]))
        .await;

    match result {
        Err(HttpError::Response(err)) => {
            assert_eq!(err.code, 413);
            assert_eq!(err.server_message(), Some("File too large"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
    assert_eq!(
        client.error().as_deref(),
        Some("Request failed with status code 413")
    );
}

#[tokio::test]
async fn test_delete_image_puts_filename_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/delete-image/banner.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": "banner.png"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.delete_image("banner.png").await.unwrap();

    assert_eq!(result, json!({"deleted": "banner.png"}));
}

#[tokio::test]
async fn test_delete_image_name_is_not_escaped() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/delete-image/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": "a"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.delete_image("a#b.png").await.unwrap();

    assert_eq!(result, json!({"deleted": "a"}));
}
