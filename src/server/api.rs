use crate::models::transcription::{
    ErrorBody,
    HealthResponse,
    QuickQuestionsResponse,
    TranscribeRequest,
    TranscribeResponse,
};
use crate::transcription::Transcriber;
use axum::{
    extract::{ rejection::JsonRejection, DefaultBodyLimit, State },
    http::StatusCode,
    response::{ IntoResponse, Response },
    routing::{ get, post },
    Json,
    Router,
};
use base64::{
    alphabet,
    engine::{ DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig },
    Engine as _,
};
use log::{ debug, error, info };
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::cors::{ Any, CorsLayer };

/// Accepts padded and unpadded standard base64.
const AUDIO_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent)
);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Audio data is required")]
    MissingAudio,
    #[error("Audio data is not valid base64: {0}")]
    InvalidAudio(String),
    #[error("OpenAI API key not configured")]
    MissingCredential,
    #[error("Failed to transcribe audio: {0}")]
    Upstream(String),
    #[error("Request body exceeds the size limit")]
    PayloadTooLarge,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAudio | ApiError::InvalidAudio(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MissingCredential | ApiError::Upstream(_) =>
                StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::MissingAudio =>
                ErrorBody {
                    error: "Audio data is required".into(),
                    message: None,
                },
            ApiError::InvalidAudio(reason) =>
                ErrorBody {
                    error: "Audio data must be base64 encoded".into(),
                    message: Some(reason.clone()),
                },
            ApiError::MissingCredential =>
                ErrorBody {
                    error: "OpenAI API key not configured".into(),
                    message: Some("Please set OPENAI_API_KEY environment variable".into()),
                },
            ApiError::Upstream(reason) =>
                ErrorBody {
                    error: "Failed to transcribe audio".into(),
                    message: Some(reason.clone()),
                },
            ApiError::PayloadTooLarge =>
                ErrorBody {
                    error: "Request body is too large".into(),
                    message: None,
                },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[derive(Clone)]
pub struct AppState {
    /// `None` while no upstream credential is configured.
    pub transcriber: Option<Arc<dyn Transcriber>>,
    pub default_model: String,
    pub fallback_delay: Duration,
    pub fallback_transcript: String,
    pub quick_questions: Arc<Vec<String>>,
    pub max_body_bytes: usize,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let max_body_bytes = state.max_body_bytes;

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/transcribe", post(transcribe_handler))
        .route("/api/transcribe-fallback", post(transcribe_fallback_handler))
        .route("/api/quick-questions", get(quick_questions_handler))
        .layer(ServiceBuilder::new().layer(cors).layer(DefaultBodyLimit::max(max_body_bytes)))
        .with_state(state)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".into(),
        message: "Voice AI API is running".into(),
    })
}

/// An unreadable body counts as a request without audio. Only the size
/// limit keeps its own status.
fn request_body(
    body: Result<Json<TranscribeRequest>, JsonRejection>
) -> Result<TranscribeRequest, ApiError> {
    match body {
        Ok(Json(req)) => Ok(req),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(ApiError::PayloadTooLarge)
        }
        Err(rejection) => {
            debug!("Rejected transcription body: {}", rejection.body_text());
            Err(ApiError::MissingAudio)
        }
    }
}

fn require_audio(req: &TranscribeRequest) -> Result<&str, ApiError> {
    req.audio
        .as_deref()
        .filter(|audio| !audio.trim().is_empty())
        .ok_or(ApiError::MissingAudio)
}

/// Strips an optional `data:<mime>;base64,` prefix and any whitespace.
fn decode_audio(audio: &str) -> Result<Vec<u8>, ApiError> {
    let payload = match audio.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => audio,
    };
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    AUDIO_BASE64.decode(compact.as_bytes()).map_err(|e| ApiError::InvalidAudio(e.to_string()))
}

async fn transcribe_handler(
    State(state): State<AppState>,
    body: Result<Json<TranscribeRequest>, JsonRejection>
) -> Result<Json<TranscribeResponse>, ApiError> {
    let req = request_body(body)?;
    let audio = require_audio(&req)?;
    let transcriber = state.transcriber.clone().ok_or_else(|| {
        error!("Transcription requested but no API key is configured");
        ApiError::MissingCredential
    })?;
    let bytes = decode_audio(audio)?;
    let model = req.model
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| state.default_model.clone());

    info!("Transcribing {} bytes with {} ({})", bytes.len(), transcriber.name(), model);
    let text = transcriber.transcribe(bytes, &model).await.map_err(|e| {
        error!("Transcription error: {}", e);
        ApiError::Upstream(e.to_string())
    })?;

    Ok(
        Json(TranscribeResponse {
            text,
            model,
            success: true,
            fallback: None,
        })
    )
}

/// Simulates a successful transcription so clients can be exercised
/// without an upstream provider.
async fn transcribe_fallback_handler(
    State(state): State<AppState>,
    body: Result<Json<TranscribeRequest>, JsonRejection>
) -> Result<Json<TranscribeResponse>, ApiError> {
    require_audio(&request_body(body)?)?;
    tokio::time::sleep(state.fallback_delay).await;

    Ok(
        Json(TranscribeResponse {
            text: state.fallback_transcript.clone(),
            model: state.default_model.clone(),
            success: true,
            fallback: Some(true),
        })
    )
}

async fn quick_questions_handler(State(state): State<AppState>) -> Json<QuickQuestionsResponse> {
    Json(QuickQuestionsResponse {
        questions: state.quick_questions.as_ref().clone(),
    })
}
