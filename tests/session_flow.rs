use std::sync::Arc;
use voice_portfolio::chat::run_loop;
use voice_portfolio::intent::{ Intent, IntentClassifier };
use voice_portfolio::models::chat::Role;
use voice_portfolio::models::profile::Profile;
use voice_portfolio::session::SessionController;
use voice_portfolio::speech::MutedPlayback;

fn session() -> (SessionController, Arc<IntentClassifier>) {
    let classifier = Arc::new(IntentClassifier::new(Arc::new(Profile::builtin())));
    let controller = SessionController::new(classifier.clone(), Arc::new(MutedPlayback));
    (controller, classifier)
}

#[test]
fn hello_round_trip_adds_two_messages() {
    let (mut session, classifier) = session();
    let before = session.history().len();
    let reply = session.submit("hello").unwrap();
    let history = session.history();

    assert_eq!(history.len(), before + 2);
    assert_eq!(history[0].role(), Role::User);
    assert_eq!(history[1].role(), Role::Assistant);
    assert_eq!(classifier.classify("hello"), Some(Intent::Greeting));
    assert_eq!(history[1].content(), reply);
}

#[test]
fn about_reply_carries_bio() {
    let (mut session, classifier) = session();
    let reply = session.submit("Tell me about Alex").unwrap();
    assert!(reply.contains(&classifier.profile().personal.bio));
}

#[test]
fn repeated_blank_submissions_never_grow_log() {
    let (mut session, _) = session();
    session.submit("what's his experience?");
    for _ in 0..5 {
        assert!(session.submit("   ").is_none());
    }
    assert_eq!(session.history().len(), 2);
}

#[test]
fn clear_then_history_is_empty() {
    let (mut session, _) = session();
    session.submit("skills");
    session.submit("projects");
    session.clear();
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn scripted_terminal_session() {
    let (mut session, classifier) = session();
    let script = "hello\n\n/history\nwhat's his experience?\n/clear\n/history\n/quit\nnever read\n";
    let mut out = Vec::new();

    run_loop(&mut session, &classifier, None, script.as_bytes(), &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Hello! I'm your AI assistant for Alex Njoya."));
    assert!(printed.contains("User: hello"));
    assert!(printed.contains("• Co-Founder at FineTun-ai (Apr 2025 – Present)"));
    assert!(printed.contains("Conversation cleared."));
    assert!(printed.contains("No messages yet."));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn audio_without_recognizer_reports_status() {
    let (mut session, classifier) = session();
    let mut out = Vec::new();
    run_loop(&mut session, &classifier, None, "/audio clip.wav\n".as_bytes(), &mut out).await.unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Voice input is not supported here."));
    assert!(session.history().is_empty());
}
