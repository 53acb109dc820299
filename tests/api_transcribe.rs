use async_trait::async_trait;
use axum::{ body::Body, http::{ Request, StatusCode } };
use serde_json::{ json, Value };
use std::sync::{ Arc, Mutex };
use std::time::Duration;
use tower::ServiceExt;
use voice_portfolio::server::api::{ app, AppState };
use voice_portfolio::transcription::{ Transcriber, TranscriptionError };

#[derive(Default)]
struct StubTranscriber {
    seen: Mutex<Vec<(Vec<u8>, String)>>,
}

#[async_trait]
impl Transcriber for StubTranscriber {
    async fn transcribe(&self, audio: Vec<u8>, model: &str) -> Result<String, TranscriptionError> {
        self.seen.lock().unwrap().push((audio, model.to_string()));
        Ok("What are his skills?".to_string())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

struct BrokenTranscriber;

#[async_trait]
impl Transcriber for BrokenTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>, _model: &str) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::Upstream("Invalid file format.".to_string()))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

fn state(transcriber: Option<Arc<dyn Transcriber>>) -> AppState {
    AppState {
        transcriber,
        default_model: "whisper-1".to_string(),
        fallback_delay: Duration::ZERO,
        fallback_transcript: "Tell me about Alex".to_string(),
        quick_questions: Arc::new(vec!["Tell me about Alex".to_string()]),
        max_body_bytes: 1024,
    }
}

async fn send(router: axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) =>
            request
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

async fn send_raw(router: axum::Router, uri: &str, content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut request = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    let response = router.oneshot(request.body(Body::from(body.to_string())).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_reports_liveness() {
    let (status, body) = send(app(state(None)), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Voice AI API is running");
}

#[tokio::test]
async fn missing_audio_is_client_error() {
    let (status, body) = send(app(state(None)), "POST", "/api/transcribe", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Audio data is required");

    let (status, _) = send(
        app(state(None)),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": "" }))
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_credential_is_server_error_with_guidance() {
    let (status, body) = send(
        app(state(None)),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": "aGVsbG8=" }))
    ).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OpenAI API key not configured");
    assert!(body["message"].as_str().unwrap().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn forwards_decoded_audio_and_default_model() {
    let stub = Arc::new(StubTranscriber::default());
    let (status, body) = send(
        app(state(Some(stub.clone()))),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": "aGVsbG8=" }))
    ).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "What are his skills?");
    assert_eq!(body["model"], "whisper-1");
    assert_eq!(body["success"], true);
    assert!(body.get("fallback").is_none());

    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, b"hello");
    assert_eq!(seen[0].1, "whisper-1");
}

#[tokio::test]
async fn honours_requested_model() {
    let stub = Arc::new(StubTranscriber::default());
    let (status, body) = send(
        app(state(Some(stub.clone()))),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": "aGVsbG8=", "model": "gpt-4o-transcribe" }))
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "gpt-4o-transcribe");
    assert_eq!(stub.seen.lock().unwrap()[0].1, "gpt-4o-transcribe");
}

#[tokio::test]
async fn upstream_failure_echoes_reason() {
    let (status, body) = send(
        app(state(Some(Arc::new(BrokenTranscriber)))),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": "aGVsbG8=" }))
    ).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to transcribe audio");
    assert_eq!(body["message"], "Invalid file format.");
}

#[tokio::test]
async fn undecodable_audio_is_client_error() {
    let stub = Arc::new(StubTranscriber::default());
    let (status, _) = send(
        app(state(Some(stub.clone()))),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": "%%%" }))
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(stub.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn fallback_returns_fixed_transcript() {
    let (status, body) = send(
        app(state(None)),
        "POST",
        "/api/transcribe-fallback",
        Some(json!({ "audio": "anything" }))
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "Tell me about Alex");
    assert_eq!(body["model"], "whisper-1");
    assert_eq!(body["success"], true);
    assert_eq!(body["fallback"], true);

    let (status, body) = send(
        app(state(None)),
        "POST",
        "/api/transcribe-fallback",
        Some(json!({}))
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Audio data is required");
}

#[tokio::test]
async fn lists_quick_questions() {
    let (status, body) = send(app(state(None)), "GET", "/api/quick-questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"], json!(["Tell me about Alex"]));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let audio = "A".repeat(4096);
    let (status, body) = send(
        app(state(None)),
        "POST",
        "/api/transcribe",
        Some(json!({ "audio": audio }))
    ).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Request body is too large");
}

#[tokio::test]
async fn unreadable_bodies_answer_with_json_error() {
    let stub = Arc::new(StubTranscriber::default());
    for uri in ["/api/transcribe", "/api/transcribe-fallback"] {
        let cases = [
            (None, ""),
            (Some("application/json"), ""),
            (Some("application/json"), "{\"audio\":123}"),
            (Some("application/json"), "{not json"),
            (Some("text/plain"), "aGVsbG8="),
        ];
        for (content_type, raw) in cases {
            let (status, body) = send_raw(app(state(Some(stub.clone()))), uri, content_type, raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {content_type:?} {raw}");
            assert_eq!(body["error"], "Audio data is required", "{uri} {content_type:?} {raw}");
        }
    }
    assert!(stub.seen.lock().unwrap().is_empty());
}
