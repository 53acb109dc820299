pub mod chat;
pub mod cli;
pub mod config;
pub mod history;
pub mod intent;
pub mod models;
pub mod server;
pub mod session;
pub mod speech;
pub mod transcription;

use cli::{ Args, Command };
use config::profile::resolve_profile;
use intent::IntentClassifier;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let profile = resolve_profile(args.profile_path.as_deref())?;
    let classifier = Arc::new(IntentClassifier::new(profile));

    match args.command {
        Command::Serve(serve) => {
            info!("--- Core Configuration ---");
            info!("Server Address: {}:{}", serve.host, serve.port);
            info!("Upstream Base URL: {}", serve.openai_base_url);
            info!("API Key Configured: {}", serve.openai_api_key.is_some());
            info!("Default Model: {}", serve.default_model);
            info!("Fallback Delay: {}ms", serve.fallback_delay_ms);
            info!("Max Body Size: {} bytes", serve.max_body_bytes);
            info!("TLS Enabled: {}", serve.enable_tls);
            info!("-------------------------");

            let server = Server::new(serve, &classifier)?;
            server.run().await?;
        }
        Command::Chat(chat_args) => {
            info!("Starting terminal chat (speech {})", if chat_args.mute { "off" } else { "on" });
            chat::run(chat_args, classifier).await?;
        }
    }

    Ok(())
}
