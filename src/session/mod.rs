pub mod welcome;

use crate::history::ConversationLog;
use crate::intent::Responder;
use crate::models::chat::ConversationMessage;
use crate::speech::{ SpeechPlayback, VoiceSettings };
use log::{ debug, info, warn };
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnavailableReason {
    PermissionDenied,
    Unsupported,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Initializing,
    Ready,
    Unavailable(UnavailableReason),
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::Initializing => write!(f, "Initializing voice assistant..."),
            SessionStatus::Ready => write!(f, "Ready to assist you!"),
            SessionStatus::Unavailable(UnavailableReason::PermissionDenied) =>
                write!(f, "Microphone access was denied. You can still type your questions."),
            SessionStatus::Unavailable(UnavailableReason::Unsupported) =>
                write!(f, "Voice input is not supported here. You can still type your questions."),
        }
    }
}

/// Owns the conversation log and sequences each exchange:
/// user message, reply, assistant message, then speech.
///
/// `submit` takes `&mut self`, so two submissions can never be in flight on
/// the same controller at once.
pub struct SessionController {
    responder: Arc<dyn Responder>,
    playback: Arc<dyn SpeechPlayback>,
    voice: VoiceSettings,
    log: ConversationLog,
    status: SessionStatus,
    speech_enabled: bool,
    speaking: Option<JoinHandle<()>>,
}

impl SessionController {
    pub fn new(responder: Arc<dyn Responder>, playback: Arc<dyn SpeechPlayback>) -> Self {
        Self {
            responder,
            playback,
            voice: VoiceSettings::default(),
            log: ConversationLog::new(),
            status: SessionStatus::Initializing,
            speech_enabled: true,
            speaking: None,
        }
    }

    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voice = voice;
        self
    }

    /// Handles one utterance. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank input");
            return None;
        }

        self.log.append(ConversationMessage::user(text));
        let reply = self.responder.respond(text);
        self.log.append(ConversationMessage::assistant(reply.clone()));
        self.speak(&reply);
        Some(reply)
    }

    /// Speaks `text` without recording it in the log.
    pub fn announce(&mut self, text: &str) {
        self.speak(text);
    }

    pub fn clear(&mut self) {
        self.log.clear();
        info!("Conversation history cleared");
    }

    pub fn history(&self) -> Vec<ConversationMessage> {
        self.log.snapshot()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Starts a fresh session: empty log, initializing status.
    pub fn begin_initialization(&mut self) {
        self.cancel_speech();
        self.log.clear();
        self.status = SessionStatus::Initializing;
    }

    pub fn mark_ready(&mut self) {
        self.status = SessionStatus::Ready;
    }

    pub fn mark_unavailable(&mut self, reason: UnavailableReason) {
        warn!("Voice input unavailable: {:?}", reason);
        self.status = SessionStatus::Unavailable(reason);
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech_enabled
    }

    pub fn set_speech_enabled(&mut self, enabled: bool) {
        self.speech_enabled = enabled;
        if !enabled {
            self.cancel_speech();
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel_speech(&mut self) {
        if let Some(handle) = self.speaking.take() {
            if !handle.is_finished() {
                debug!("Cancelling speech playback");
            }
            handle.abort();
        }
    }

    /// Waits for the current utterance, if any, to finish.
    pub async fn finish_speaking(&mut self) {
        if let Some(handle) = self.speaking.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!("Speech playback task failed: {}", e);
                }
            }
        }
    }

    fn speak(&mut self, text: &str) {
        if !self.speech_enabled {
            return;
        }
        self.cancel_speech();

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                debug!("No async runtime available, skipping speech playback");
                return;
            }
        };
        let playback = Arc::clone(&self.playback);
        let settings = self.voice.clone();
        let text = text.to_string();
        self.speaking = Some(
            runtime.spawn(async move {
                if let Err(e) = playback.speak(&text, &settings).await {
                    warn!("Speech playback failed: {}", e);
                }
            })
        );
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.cancel_speech();
    }
}
