pub mod openai;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use self::openai::OpenAiTranscriber;

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("{0}")]
    Upstream(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Invalid transcription client configuration: {0}")]
    Config(String),
}

/// A speech-to-text backend the proxy forwards audio to.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Vec<u8>, model: &str) -> Result<String, TranscriptionError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct TranscriberConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// Builds the upstream client, or `None` when no credential is configured.
pub fn new_transcriber(
    config: &TranscriberConfig
) -> Result<Option<Arc<dyn Transcriber>>, TranscriptionError> {
    match config.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => {
            let client = OpenAiTranscriber::new(key.to_string(), config.base_url.clone())?;
            Ok(Some(Arc::new(client)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_means_no_transcriber() {
        for api_key in [None, Some(String::new()), Some("   ".to_string())] {
            let config = TranscriberConfig {
                api_key,
                base_url: openai::DEFAULT_BASE_URL.to_string(),
            };
            assert!(new_transcriber(&config).unwrap().is_none());
        }
    }

    #[test]
    fn key_builds_openai_transcriber() {
        let config = TranscriberConfig {
            api_key: Some("sk-test".to_string()),
            base_url: openai::DEFAULT_BASE_URL.to_string(),
        };
        let transcriber = new_transcriber(&config).unwrap().unwrap();
        assert_eq!(transcriber.name(), "openai");
    }
}
