use clap::{ Parser, Subcommand };

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON profile document. The built-in profile is used when unset.
    #[arg(long, env = "PROFILE_PATH", global = true)]
    pub profile_path: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the speech-to-text proxy server.
    Serve(ServeArgs),
    /// Chat with the portfolio assistant in the terminal.
    Chat(ChatArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface the server binds to.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the server listens on.
    #[arg(long, env = "PORT", default_value = "3001")]
    pub port: u16,

    /// API key for the upstream transcription provider. Requests to
    /// /api/transcribe fail with a configuration error while unset.
    #[arg(long, env = "OPENAI_API_KEY")]
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub openai_base_url: String,

    /// Model used when a request does not name one.
    #[arg(long, env = "TRANSCRIBE_MODEL", default_value = "whisper-1")]
    pub default_model: String,

    /// Simulated processing time of /api/transcribe-fallback, in milliseconds.
    #[arg(long, env = "FALLBACK_DELAY_MS", default_value = "1000")]
    pub fallback_delay_ms: u64,

    /// Largest accepted JSON body, in bytes.
    #[arg(long, env = "MAX_BODY_BYTES", default_value = "10485760")]
    pub max_body_bytes: usize,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,

    /// Optional path to the TLS certificate file (PEM format). Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format). Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ChatArgs {
    /// Delay between start-up status lines, in milliseconds.
    #[arg(long, env = "WELCOME_INTERVAL_MS", default_value = "1000")]
    pub welcome_interval_ms: u64,

    /// Transcription endpoint used by the /audio command.
    #[arg(long, env = "TRANSCRIBE_URL", default_value = "http://localhost:3001/api/transcribe")]
    pub transcribe_url: String,

    /// Start with speech playback turned off.
    #[arg(long, default_value = "false")]
    pub mute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let args = Args::try_parse_from(["voice-portfolio", "serve"]).unwrap();
        let Command::Serve(serve) = args.command else {
            panic!("expected serve");
        };
        assert_eq!(serve.default_model, "whisper-1");
        assert_eq!(serve.fallback_delay_ms, 1000);
        assert_eq!(serve.max_body_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn chat_flags() {
        let args = Args::try_parse_from([
            "voice-portfolio",
            "chat",
            "--mute",
            "--welcome-interval-ms",
            "0",
            "--profile-path",
            "me.json",
        ]).unwrap();
        assert_eq!(args.profile_path.as_deref(), Some("me.json"));
        let Command::Chat(chat) = args.command else {
            panic!("expected chat");
        };
        assert!(chat.mute);
        assert_eq!(chat.welcome_interval_ms, 0);
    }

    #[test]
    fn command_is_required() {
        assert!(Args::try_parse_from(["voice-portfolio"]).is_err());
    }
}
