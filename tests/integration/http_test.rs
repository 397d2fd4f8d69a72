//! HttpApi against a canned HTTP server on localhost.
//!
//! Each test serves exactly one response and hands back the raw request it
//! received, so both halves of the exchange can be checked.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use wcgen::api::{ApiError, HttpApi, WordCloudApi};
use wcgen::input::{FileUpload, TextExtractor};
use wcgen::orchestrator::prepare;
use wcgen::settings::RawOptions;

use crate::helpers::png_base64;

/// Serve one canned response; the handle yields the raw request text.
async fn serve_once(status: &str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let status = status.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });
    (base, handle)
}

/// Read headers, then as much body as Content-Length announces (or up to
/// the chunked terminator).
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        if request_complete(&raw) {
            break;
        }
    }
    String::from_utf8_lossy(&raw).into_owned()
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let headers = text[..header_end].to_ascii_lowercase();
    let body_len = raw.len() - (header_end + 4);
    if let Some(line) = headers
        .lines()
        .find(|l| l.starts_with("content-length:"))
    {
        let expected: usize = line["content-length:".len()..].trim().parse().unwrap_or(0);
        return body_len >= expected;
    }
    if headers.contains("transfer-encoding: chunked") {
        return text.ends_with("0\r\n\r\n");
    }
    true
}

fn api(base: &str) -> HttpApi {
    HttpApi::new(base, Duration::from_secs(5), "wcgen-test").unwrap()
}

fn request(text: &str) -> wcgen::GenerationRequest {
    prepare(text, &RawOptions::default()).unwrap()
}

#[tokio::test]
async fn generate_posts_json_and_decodes_artifact() {
    let body = serde_json::json!({
        "success": true,
        "image_base64": png_base64(),
        "word_frequencies": {"fox": 2, "dog": 1},
        "text_statistics": {"total_words": 9}
    })
    .to_string();
    let (base, server) = serve_once("200 OK", body).await;

    let artifact = api(&base)
        .generate(&request("the quick brown fox jumps over the lazy dog"))
        .await
        .unwrap();
    assert_eq!(artifact.word_frequencies.get("fox"), Some(&2));

    let seen = server.await.unwrap();
    assert!(seen.starts_with("POST /api/generate_wordcloud HTTP/1.1"), "{seen}");
    assert!(seen.contains("\"text\":\"the quick brown fox jumps over the lazy dog\""));
    assert!(seen.contains("\"settings\""));
}

#[tokio::test]
async fn generate_error_body_on_400_is_rejected_verbatim() {
    let body = r#"{"success": false, "error": "Text too short"}"#.to_string();
    let (base, server) = serve_once("400 Bad Request", body).await;

    let err = api(&base)
        .generate(&request("some text worth sending"))
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Rejected("Text too short".into()));
    server.await.unwrap();
}

#[tokio::test]
async fn non_json_error_status_is_a_transport_failure() {
    let (base, server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>".into()).await;

    let err = api(&base)
        .generate(&request("some text worth sending"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(msg) if msg.contains("502")));
    server.await.unwrap();
}

#[tokio::test]
async fn permalink_requests_json_format_and_maps_404() {
    let (base, server) = serve_once("404 Not Found", r#"{"error": "gone"}"#.into()).await;

    let err = api(&base).fetch_permalink("42").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("42".into()));

    let seen = server.await.unwrap();
    assert!(seen.starts_with("GET /api/export/42?format=json HTTP/1.1"), "{seen}");
}

#[tokio::test]
async fn unsuccessful_permalink_body_is_not_found() {
    let (base, server) = serve_once("200 OK", r#"{"success": false}"#.into()).await;

    let err = api(&base).fetch_permalink("7").await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("7".into()));
    server.await.unwrap();
}

#[tokio::test]
async fn file_upload_is_multipart_field_named_file() {
    let body = r#"{"success": true, "text": "extracted words", "file_type": "txt"}"#.to_string();
    let (base, server) = serve_once("200 OK", body).await;

    let upload = FileUpload::new("notes.txt", b"raw file bytes".to_vec());
    let extracted = api(&base).extract_file(&upload).await.unwrap();
    assert_eq!(extracted.text, "extracted words");

    let seen = server.await.unwrap();
    assert!(seen.starts_with("POST /api/upload_file HTTP/1.1"), "{seen}");
    assert!(seen.to_ascii_lowercase().contains("content-type: multipart/form-data; boundary="));
    assert!(seen.contains("name=\"file\""));
    assert!(seen.contains("filename=\"notes.txt\""));
    assert!(seen.contains("raw file bytes"));
}

#[tokio::test]
async fn url_extraction_failure_keeps_backend_message() {
    let body = r#"{"success": false, "error": "Could not fetch page"}"#.to_string();
    let (base, server) = serve_once("500 Internal Server Error", body).await;

    let err = api(&base)
        .extract_url("https://example.com/post")
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Rejected("Could not fetch page".into()));

    let seen = server.await.unwrap();
    assert!(seen.starts_with("POST /api/process_url HTTP/1.1"), "{seen}");
    assert!(seen.contains("\"url\":\"https://example.com/post\""));
}

#[tokio::test]
async fn dashboard_statistics_are_read() {
    let body = r#"{"statistics": {"total_users": 5, "total_wordclouds": 12}}"#.to_string();
    let (base, server) = serve_once("200 OK", body).await;

    let stats = api(&base).dashboard_statistics().await.unwrap();
    assert_eq!(stats.total_wordclouds, Some(12));

    let seen = server.await.unwrap();
    assert!(seen.starts_with("GET /api/analytics/dashboard HTTP/1.1"), "{seen}");
}
