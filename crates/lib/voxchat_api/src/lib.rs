//! # voxchat_api
//!
//! HTTP API library for Voxchat.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use voxchat_core::assets::AssetRoots;
use voxchat_core::completion::{CompletionClient, CompletionError};
use voxchat_core::conversation_log::ConversationLog;

use crate::config::ApiConfig;
use crate::handlers::{assets, chat, health};

/// Route paths.
pub mod routes {
    pub const POST_API_CHAT: &str = "/api/chat";
    pub const GET_API_HEALTH: &str = "/api/health";
    pub const GET_INDEX: &str = "/";
    pub const GET_ASSET: &str = "/{*path}";
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Outbound chat-completion client.
    pub completion: Arc<CompletionClient>,
    /// Daily conversation log.
    pub conversation_log: ConversationLog,
    /// Frontend asset directories.
    pub assets: AssetRoots,
}

impl AppState {
    /// Builds state from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, CompletionError> {
        let completion = CompletionClient::new(config.completion.clone())?;
        Ok(Self {
            conversation_log: ConversationLog::new(config.log_dir.clone()),
            assets: AssetRoots::new(config.static_dirs.iter().cloned()),
            completion: Arc::new(completion),
            config,
        })
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let debug = state.config.debug;

    let api = Router::new()
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .route(routes::GET_API_HEALTH, get(health::health_handler));

    let frontend = Router::new()
        .route(routes::GET_INDEX, get(assets::index_handler))
        .route(routes::GET_ASSET, get(assets::asset_handler));

    Router::new()
        .merge(api)
        .merge(frontend)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn std::any::Any + Send + 'static>| error::panic_response(panic, debug),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
