use serde::{ Serialize, Deserialize };

pub const DEFAULT_TRANSCRIBE_MODEL: &str = "whisper-1";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TranscribeRequest {
    /// Base64-encoded audio bytes.
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranscribeResponse {
    pub text: String,
    pub model: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuickQuestionsResponse {
    pub questions: Vec<String>,
}
