pub mod recognition;

use async_trait::async_trait;
use log::info;
use thiserror::Error;

/// Voice name fragments tried when picking a synthesis voice.
pub const PREFERRED_VOICE_FRAGMENTS: &[&str] = &[
    "David",
    "Alex",
    "James",
    "Mark",
    "John",
    "Michael",
    "Google",
    "Microsoft",
];

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech synthesis is not supported on this device")]
    Unsupported,
    #[error("speech playback failed: {0}")]
    Playback(String),
}

/// Tone parameters handed to the synthesizer with every utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub lang: String,
    pub voice: Option<String>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 0.85,
            pitch: 0.9,
            volume: 1.0,
            lang: "en-US".to_string(),
            voice: None,
        }
    }
}

impl VoiceSettings {
    pub fn with_voice_from(mut self, available: &[String]) -> Self {
        self.voice = select_voice(available).map(str::to_string);
        self
    }
}

/// First available voice whose name contains any preferred fragment.
pub fn select_voice(available: &[String]) -> Option<&str> {
    available
        .iter()
        .find(|name| PREFERRED_VOICE_FRAGMENTS.iter().any(|fragment| name.contains(fragment)))
        .map(String::as_str)
}

#[async_trait]
pub trait SpeechPlayback: Send + Sync {
    /// Resolves once the utterance has finished or failed.
    async fn speak(&self, text: &str, settings: &VoiceSettings) -> Result<(), SpeechError>;
}

/// Announces utterances through the logger; used where no audio device exists.
#[derive(Debug, Default, Clone)]
pub struct LogPlayback;

#[async_trait]
impl SpeechPlayback for LogPlayback {
    async fn speak(&self, text: &str, settings: &VoiceSettings) -> Result<(), SpeechError> {
        info!(
            "🔊 Speaking ({}, rate={}, pitch={}, volume={}, voice={}): {}",
            settings.lang,
            settings.rate,
            settings.pitch,
            settings.volume,
            settings.voice.as_deref().unwrap_or("default"),
            text
        );
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MutedPlayback;

#[async_trait]
impl SpeechPlayback for MutedPlayback {
    async fn speak(&self, _text: &str, _settings: &VoiceSettings) -> Result<(), SpeechError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voices(names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn picks_first_available_preferred_voice() {
        let available = voices(&["Samantha", "Google UK English Male", "Microsoft David"]);
        assert_eq!(select_voice(&available), Some("Google UK English Male"));
    }

    #[test]
    fn no_preferred_voice_means_default() {
        let available = voices(&["Samantha", "Victoria"]);
        assert_eq!(select_voice(&available), None);
        assert_eq!(VoiceSettings::default().with_voice_from(&available).voice, None);
    }

    #[test]
    fn default_tone_parameters() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.rate, 0.85);
        assert_eq!(settings.pitch, 0.9);
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.lang, "en-US");
    }
}
