use async_trait::async_trait;
use log::{ error, info };
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, AUTHORIZATION } };
use reqwest::multipart::{ Form, Part };
use serde::Deserialize;

use super::{ Transcriber, TranscriptionError };

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiTranscriber {
    http: HttpClient,
    base_url: String,
}

#[derive(Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

impl OpenAiTranscriber {
    pub fn new(api_key: String, base_url: String) -> Result<Self, TranscriptionError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e|
                TranscriptionError::Config(format!("Invalid API key format: {}", e))
            )?
        );

        let http = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, audio: Vec<u8>, model: &str) -> Result<String, TranscriptionError> {
        let file = Part::bytes(audio).file_name("audio.wav").mime_str("audio/wav")?;
        let form = Form::new()
            .part("file", file)
            .text("model", model.to_string())
            .text("response_format", "text");

        info!("Forwarding audio to {} (model {})", self.endpoint(), model);
        let resp = self.http.post(self.endpoint()).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json
                ::from_str::<OpenAiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("Upstream returned {}: {}", status, body.trim()));
            error!("OpenAI transcription failed: {}", message);
            return Err(TranscriptionError::Upstream(message));
        }

        Ok(body.trim().to_string())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
