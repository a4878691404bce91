//! Tests for Gemini request building, response parsing, and error mapping.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::*;
use crate::{compose, CompletionClient, CompletionError};

fn client_with(config: GeminiConfig) -> GeminiClient {
    GeminiClient::new(config).unwrap()
}

/// Accept one HTTP request on a local port, answer with a canned response,
/// and hand back the raw request text.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&request[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

#[test]
fn default_config_targets_flash_model() {
    let config = GeminiConfig::default();
    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.api_key_env, "API_KEY");
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.request_timeout, Duration::from_secs(120));
}

#[test]
fn api_url_joins_base_and_model() {
    let client = client_with(
        GeminiConfig::new()
            .with_base_url("https://example.test/v1beta/models/")
            .with_model("gemini-2.0-flash"),
    );
    assert_eq!(
        client.api_url(),
        "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
    );
}

#[test]
fn request_body_has_single_user_content_block() {
    let client = client_with(GeminiConfig::new());
    let prompt = compose(&[], "hello", Some("PERSONA")).unwrap();
    let body = client.build_request_body(&prompt);

    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(
        contents[0]["parts"][0]["text"],
        "PERSONA\n\nUser Input: hello"
    );
    assert!(body.get("systemInstruction").is_none());
}

#[test]
fn parse_response_concatenates_text_parts() {
    let client = client_with(GeminiConfig::new());
    let json = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Hi " }, { "text": "there" }] }
        }]
    });
    assert_eq!(client.parse_response(&json), "Hi there");
}

#[test]
fn parse_response_without_candidates_is_empty() {
    let client = client_with(GeminiConfig::new());
    assert_eq!(client.parse_response(&serde_json::json!({})), "");
    assert_eq!(
        client.parse_response(&serde_json::json!({ "candidates": [] })),
        ""
    );
    assert_eq!(
        client.parse_response(&serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })),
        ""
    );
}

#[tokio::test]
async fn missing_credential_short_circuits() {
    // Port 9 would refuse the connection; reaching it would be a Transport error.
    let client = client_with(
        GeminiConfig::new()
            .with_api_key_env("WINTER_TEST_UNSET_KEY_7F3A")
            .with_base_url("http://127.0.0.1:9"),
    );
    let prompt = compose(&[], "ping", Some("P")).unwrap();

    let err = client.complete(&prompt).await.unwrap_err();
    assert!(
        matches!(err, CompletionError::MissingCredential(ref name) if name == "WINTER_TEST_UNSET_KEY_7F3A")
    );
}

#[tokio::test]
async fn blank_credential_counts_as_missing() {
    std::env::set_var("WINTER_TEST_BLANK_KEY_19C2", "   ");
    let client = client_with(GeminiConfig::new().with_api_key_env("WINTER_TEST_BLANK_KEY_19C2"));
    let prompt = compose(&[], "ping", Some("P")).unwrap();

    let err = client.complete(&prompt).await.unwrap_err();
    assert!(matches!(err, CompletionError::MissingCredential(_)));
}

#[tokio::test]
async fn refused_connection_is_transport_error() {
    std::env::set_var("WINTER_TEST_KEY_TRANSPORT", "test-key");
    let client = client_with(
        GeminiConfig::new()
            .with_api_key_env("WINTER_TEST_KEY_TRANSPORT")
            .with_base_url("http://127.0.0.1:1")
            .with_timeouts(Duration::from_secs(2), Duration::from_secs(5)),
    );
    let prompt = compose(&[], "ping", Some("P")).unwrap();

    let err = client.complete(&prompt).await.unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn successful_response_returns_text_and_sends_key_header() {
    std::env::set_var("WINTER_TEST_KEY_SUCCESS", "secret-123");
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi there"}]}}]}"#,
    )
    .await;
    let client = client_with(
        GeminiConfig::new()
            .with_api_key_env("WINTER_TEST_KEY_SUCCESS")
            .with_base_url(base_url),
    );
    let prompt = compose(&[], "hello", Some("PERSONA")).unwrap();

    let reply = client.complete(&prompt).await.unwrap();
    assert_eq!(reply, "Hi there");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /gemini-2.5-flash:generateContent"));
    assert!(request.to_lowercase().contains("x-goog-api-key: secret-123"));
    assert!(request.contains("PERSONA\\n\\nUser Input: hello"));
}

#[tokio::test]
async fn empty_candidate_text_is_empty_reply_not_error() {
    std::env::set_var("WINTER_TEST_KEY_EMPTY", "k");
    let (base_url, server) = serve_once("200 OK", r#"{"candidates":[]}"#).await;
    let client = client_with(
        GeminiConfig::new()
            .with_api_key_env("WINTER_TEST_KEY_EMPTY")
            .with_base_url(base_url),
    );
    let prompt = compose(&[], "hello", Some("P")).unwrap();

    assert_eq!(client.complete(&prompt).await.unwrap(), "");
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_remote_error() {
    std::env::set_var("WINTER_TEST_KEY_REMOTE", "k");
    let (base_url, server) = serve_once(
        "500 Internal Server Error",
        r#"{"error":{"message":"backend unavailable"}}"#,
    )
    .await;
    let client = client_with(
        GeminiConfig::new()
            .with_api_key_env("WINTER_TEST_KEY_REMOTE")
            .with_base_url(base_url),
    );
    let prompt = compose(&[], "hello", Some("P")).unwrap();

    let err = client.complete(&prompt).await.unwrap_err();
    match err {
        CompletionError::Remote(msg) => {
            assert!(msg.contains("500"));
            assert!(msg.contains("backend unavailable"));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_remote_error() {
    std::env::set_var("WINTER_TEST_KEY_MALFORMED", "k");
    let (base_url, server) = serve_once("200 OK", "not json").await;
    let client = client_with(
        GeminiConfig::new()
            .with_api_key_env("WINTER_TEST_KEY_MALFORMED")
            .with_base_url(base_url),
    );
    let prompt = compose(&[], "hello", Some("P")).unwrap();

    let err = client.complete(&prompt).await.unwrap_err();
    assert!(matches!(err, CompletionError::Remote(_)));
    server.await.unwrap();
}
