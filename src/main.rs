//! OpenAI relay server.
//!
//! ```text
//!   Client ──POST /openai {message}──▶ relay ──POST + Bearer key──▶ Upstream
//!          ◀──── {reply} / {error} ───       ◀──── choices[0] ─────
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use openai_relay::config::loader;
use openai_relay::lifecycle::{signals, Shutdown};
use openai_relay::observability::logging;
use openai_relay::RelayServer;

#[derive(Parser, Debug)]
#[command(name = "openai-relay", version)]
#[command(about = "Relay chat messages to an OpenAI-compatible API without exposing the key")]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file.
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overriding PORT and the config file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = loader::load_config(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.listener.host = host;
    }
    if let Some(port) = args.port {
        config.listener.port = port;
    }
    loader::validate(&config)?;

    logging::init(&config.observability)?;

    tracing::info!("openai-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.bind_address(),
        upstream = %config.upstream.url,
        model = %config.upstream.model,
        timeout_ms = ?config.upstream.request_timeout_ms,
        require_message = config.relay.require_message,
        "Configuration loaded"
    );
    if config.upstream.api_key.is_empty() {
        tracing::warn!(
            "{} is not set; upstream requests will be rejected",
            loader::ENV_API_KEY
        );
    }

    let listener = TcpListener::bind((config.listener.host.as_str(), config.listener.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    let server = RelayServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
