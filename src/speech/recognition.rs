use crate::models::transcription::{ ErrorBody, TranscribeRequest, TranscribeResponse };
use base64::{ engine::general_purpose::STANDARD, Engine as _ };
use log::{ info, warn };
use reqwest::Client as HttpClient;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("Failed to read audio file '{path}': {source}")]
    Audio {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Transcription request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Transcription rejected ({status}): {error}")]
    Rejected {
        status: u16,
        error: String,
        message: Option<String>,
    },
}

/// Sends recorded audio to the transcription proxy and returns the text.
#[derive(Debug, Clone)]
pub struct ProxyTranscriptionClient {
    http: HttpClient,
    endpoint: String,
    model: Option<String>,
}

impl ProxyTranscriptionClient {
    pub fn new(endpoint: impl Into<String>, model: Option<String>) -> Result<Self, RecognitionError> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            model,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn transcribe_file<P: AsRef<Path>>(&self, path: P) -> Result<String, RecognitionError> {
        let path = path.as_ref();
        let audio = tokio::fs::read(path).await.map_err(|source| RecognitionError::Audio {
            path: path.display().to_string(),
            source,
        })?;
        self.transcribe(&audio).await
    }

    pub async fn transcribe(&self, audio: &[u8]) -> Result<String, RecognitionError> {
        let request = TranscribeRequest {
            audio: Some(STANDARD.encode(audio)),
            model: self.model.clone(),
        };
        info!("Sending {} bytes of audio to {}", audio.len(), self.endpoint);

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_else(|e| {
                warn!("Unreadable error body from transcription proxy: {}", e);
                ErrorBody {
                    error: status.canonical_reason().unwrap_or("Unknown error").to_string(),
                    message: None,
                }
            });
            return Err(RecognitionError::Rejected {
                status: status.as_u16(),
                error: body.error,
                message: body.message,
            });
        }

        let body: TranscribeResponse = response.json().await?;
        Ok(body.text.trim().to_string())
    }
}
