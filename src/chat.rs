use crate::cli::ChatArgs;
use crate::intent::IntentClassifier;
use crate::session::welcome::{ run_welcome_sequence, spoken_introduction };
use crate::session::{ SessionController, SessionStatus, UnavailableReason };
use crate::speech::recognition::ProxyTranscriptionClient;
use crate::speech::{ LogPlayback, SpeechPlayback };
use crate::history::format_transcript;
use log::{ info, warn };
use std::error::Error;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{ AsyncBufRead, AsyncBufReadExt, BufReader };

#[derive(Debug, PartialEq, Eq)]
pub enum ChatCommand<'a> {
    Say(&'a str),
    Audio(&'a str),
    History,
    Clear,
    Mute,
    Help,
    Quit,
    Unknown(&'a str),
}

pub fn parse_command(line: &str) -> ChatCommand<'_> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return ChatCommand::Say(line);
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name {
        "audio" if !arg.is_empty() => ChatCommand::Audio(arg),
        "history" => ChatCommand::History,
        "clear" => ChatCommand::Clear,
        "mute" => ChatCommand::Mute,
        "help" => ChatCommand::Help,
        "quit" | "exit" => ChatCommand::Quit,
        _ => ChatCommand::Unknown(line),
    }
}

pub async fn run(args: ChatArgs, classifier: Arc<IntentClassifier>) -> Result<(), Box<dyn Error + Send + Sync>> {
    let profile = Arc::clone(classifier.profile());
    let playback: Arc<dyn SpeechPlayback> = Arc::new(LogPlayback);
    let mut session = SessionController::new(classifier.clone(), playback);
    session.set_speech_enabled(!args.mute);

    let mut out = std::io::stdout();
    run_welcome_sequence(
        &mut session,
        &profile,
        Duration::from_millis(args.welcome_interval_ms),
        |line| println!("  {}", line)
    ).await;

    let recognizer = match ProxyTranscriptionClient::new(args.transcribe_url.clone(), None) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("Audio input disabled: {}", e);
            session.mark_unavailable(UnavailableReason::Unsupported);
            None
        }
    };

    session.announce(&spoken_introduction(&profile));
    print_quick_questions(&mut out, &classifier)?;

    let stdin = BufReader::new(tokio::io::stdin());
    run_loop(&mut session, &classifier, recognizer.as_ref(), stdin, &mut out).await?;
    session.finish_speaking().await;
    info!("Chat session ended");
    Ok(())
}

fn print_quick_questions<W: Write>(out: &mut W, classifier: &IntentClassifier) -> std::io::Result<()> {
    writeln!(out, "\nTry asking:")?;
    for question in classifier.quick_questions() {
        writeln!(out, "  • {}", question)?;
    }
    writeln!(out, "Commands: /audio <file>, /history, /clear, /mute, /help, /quit\n")
}

/// Reads commands until end of input or `/quit`.
pub async fn run_loop<R, W>(
    session: &mut SessionController,
    classifier: &IntentClassifier,
    recognizer: Option<&ProxyTranscriptionClient>,
    reader: R,
    out: &mut W
) -> Result<(), Box<dyn Error + Send + Sync>>
    where R: AsyncBufRead + Unpin, W: Write
{
    let mut lines = reader.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            ChatCommand::Say(text) => {
                if let Some(reply) = session.submit(text) {
                    writeln!(out, "{}\n", reply)?;
                }
            }
            ChatCommand::Audio(path) => {
                let Some(recognizer) = recognizer else {
                    writeln!(out, "{}", SessionStatus::Unavailable(UnavailableReason::Unsupported))?;
                    continue;
                };
                match recognizer.transcribe_file(path).await {
                    Ok(text) if text.trim().is_empty() => {
                        writeln!(out, "I couldn't hear anything in that recording. Please try again.")?;
                    }
                    Ok(text) => {
                        writeln!(out, "🎤 You said: {}", text)?;
                        if let Some(reply) = session.submit(&text) {
                            writeln!(out, "{}\n", reply)?;
                        }
                    }
                    Err(e) => {
                        warn!("Audio transcription failed: {}", e);
                        writeln!(out, "Sorry, I couldn't transcribe that audio ({}). Please try again or type your question.", e)?;
                    }
                }
            }
            ChatCommand::History => {
                let history = session.history();
                if history.is_empty() {
                    writeln!(out, "No messages yet.")?;
                } else {
                    write!(out, "{}", format_transcript(&history))?;
                }
            }
            ChatCommand::Clear => {
                session.clear();
                writeln!(out, "Conversation cleared.")?;
            }
            ChatCommand::Mute => {
                let enabled = !session.speech_enabled();
                session.set_speech_enabled(enabled);
                writeln!(out, "Speech {}.", if enabled { "on" } else { "off" })?;
            }
            ChatCommand::Help => print_quick_questions(out, classifier)?,
            ChatCommand::Quit => {
                break;
            }
            ChatCommand::Unknown(command) => {
                writeln!(out, "Unknown command: {}", command)?;
            }
        }
    }
    Ok(())
}
