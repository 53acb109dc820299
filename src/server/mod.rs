pub mod api;

use crate::cli::ServeArgs;
use crate::intent::IntentClassifier;
use crate::transcription::{ new_transcriber, TranscriberConfig };
use api::AppState;
use log::{ error, info, warn };
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub struct Server {
    addr: SocketAddr,
    state: AppState,
    args: ServeArgs,
}

impl Server {
    pub fn new(args: ServeArgs, classifier: &IntentClassifier) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let addr = format!("{}:{}", args.host, args.port).parse::<SocketAddr>()?;
        let transcriber = new_transcriber(
            &(TranscriberConfig {
                api_key: args.openai_api_key.clone(),
                base_url: args.openai_base_url.clone(),
            })
        )?;

        if transcriber.is_some() {
            info!("Upstream transcription configured at {}", args.openai_base_url);
        } else {
            warn!("OPENAI_API_KEY is not set. /api/transcribe will report a configuration error.");
        }

        let profile = classifier.profile();
        let state = AppState {
            transcriber,
            default_model: args.default_model.clone(),
            fallback_delay: Duration::from_millis(args.fallback_delay_ms),
            fallback_transcript: format!("Tell me about {}", profile.first_name()),
            quick_questions: Arc::new(classifier.quick_questions()),
            max_body_bytes: args.max_body_bytes,
        };

        Ok(Self { addr, state, args })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::app(self.state);
        let addr = self.addr;
        let tls_paths = match (&self.args.tls_cert_path, &self.args.tls_key_path) {
            (Some(cert), Some(key)) if self.args.enable_tls => Some((cert.clone(), key.clone())),
            (None, None) if self.args.enable_tls => {
                error!("--enable-tls was set but no certificate/key paths provided.");
                return Err("TLS enabled without cert/key".into());
            }
            (Some(_), None) | (None, Some(_)) if self.args.enable_tls => {
                error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                return Err("Missing TLS certificate or key path".into());
            }
            _ => None,
        };
        let scheme = if tls_paths.is_some() { "https" } else { "http" };

        info!("🎤 Voice AI API server running on {}://{}", scheme, addr);
        info!("📝 Health check: {}://{}/api/health", scheme, addr);
        info!("🎯 Transcribe: {}://{}/api/transcribe", scheme, addr);

        if let Some((cert_path, key_path)) = tls_paths {
            let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
                cert_path,
                key_path
            ).await?;
            let handle = axum_server::Handle::new();
            let shutdown_handle = handle.clone();
            tokio::spawn(async move {
                shutdown_signal().await;
                shutdown_handle.graceful_shutdown(Some(Duration::from_secs(5)));
            });
            axum_server::bind_rustls(addr, tls_config)
                .handle(handle)
                .serve(app.into_make_service()).await?;
        } else {
            let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
                error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
                e
            })?;
            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal()).await?;
        }

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
