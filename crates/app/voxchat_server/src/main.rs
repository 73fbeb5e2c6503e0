//! Voxchat API server binary.
//!
//! Serves `/api/chat`, `/api/health` and the frontend assets on one port.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use voxchat_api::config::{self, ApiConfig};
use voxchat_core::completion::config::CompletionConfig;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "voxchat_server", about = "Voice chatbot API server", version)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Include error details in 500 responses.
    ///
    /// Also enabled by `DEBUG` or `FLASK_DEBUG` set to a truthy value.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Directory for the daily conversation logs.
    #[arg(long, env = "VOXCHAT_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Frontend asset directory. Repeat (or comma-separate) to search several.
    #[arg(
        long = "static-dir",
        env = "VOXCHAT_STATIC_DIR",
        default_value = "frontend",
        value_delimiter = ','
    )]
    static_dirs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,voxchat_api=debug,voxchat_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let completion = CompletionConfig::from_env();
    match completion.masked_key() {
        Some(key) => info!(api_key = %key, "completion credential loaded"),
        None => warn!("OPENAI_API_KEY is not set; chat will reply with an apology"),
    }
    info!(api_base = %completion.api_base, model = %completion.model, "completion API");

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        debug: args.debug || config::debug_from_env(),
        log_dir: args.log_dir,
        static_dirs: args.static_dirs,
        completion,
    };

    info!(
        debug = config.debug,
        log_dir = %config.log_dir.display(),
        static_dirs = ?config.static_dirs,
        "starting voxchat_server"
    );

    let state = voxchat_api::AppState::new(config.clone())?;
    let app = voxchat_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
