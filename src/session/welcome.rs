use super::SessionController;
use crate::models::profile::Profile;
use log::info;
use std::time::Duration;

pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_millis(1000);

/// Status lines shown while a session starts, in display order.
pub fn welcome_sequence(profile: &Profile) -> Vec<String> {
    let first = profile.first_name();
    vec![
        "Initializing voice assistant...".to_string(),
        "Requesting microphone permission...".to_string(),
        "Permission granted!".to_string(),
        format!("Hello! I'm your AI assistant for {}.", profile.personal.name),
        format!("I can help you learn about {}'s background, experience, and projects.", first),
        format!(
            "Try asking: 'Tell me about {}', 'What's {}'s experience?', or 'What are {}'s skills?'",
            first,
            first,
            first
        ),
        "Ready to assist you!".to_string()
    ]
}

/// Spoken once the session is ready.
pub fn spoken_introduction(profile: &Profile) -> String {
    let first = profile.first_name();
    format!(
        "Hello! I'm your AI assistant for {}. I can help you learn about {}'s background, experience, and projects. Try asking me about {}'s experience, skills, or projects.",
        profile.personal.name,
        first,
        first
    )
}

/// Resets the session, then emits each status line one `interval` apart
/// before marking the session ready. Purely cosmetic pacing.
pub async fn run_welcome_sequence<F>(
    session: &mut SessionController,
    profile: &Profile,
    interval: Duration,
    mut on_status: F
)
    where F: FnMut(&str)
{
    session.begin_initialization();
    for line in welcome_sequence(profile) {
        on_status(&line);
        tokio::time::sleep(interval).await;
    }
    session.mark_ready();
    info!("Session ready");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentClassifier;
    use crate::session::SessionStatus;
    use crate::speech::MutedPlayback;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn emits_every_line_then_becomes_ready() {
        let profile = Arc::new(Profile::builtin());
        let mut session = SessionController::new(
            Arc::new(IntentClassifier::new(profile.clone())),
            Arc::new(MutedPlayback)
        );
        session.submit("left over from an earlier session");

        let mut seen = Vec::new();
        let started = tokio::time::Instant::now();
        run_welcome_sequence(&mut session, &profile, DEFAULT_STATUS_INTERVAL, |line| {
            seen.push(line.to_string())
        }).await;

        assert_eq!(seen, welcome_sequence(&profile));
        assert_eq!(seen.first().map(String::as_str), Some("Initializing voice assistant..."));
        assert_eq!(seen.last().map(String::as_str), Some("Ready to assist you!"));
        assert!(started.elapsed() >= DEFAULT_STATUS_INTERVAL * (seen.len() as u32));
        assert_eq!(session.status(), SessionStatus::Ready);
        assert!(session.is_empty());
    }
}
