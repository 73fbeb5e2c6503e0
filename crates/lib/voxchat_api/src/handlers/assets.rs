//! Frontend asset serving.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::warn;
use voxchat_core::assets::{self, AssetError};

use crate::AppState;

/// `GET /` — the frontend entry document.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    serve(&state, "").await
}

/// `GET /{*path}` — any other frontend file.
pub async fn asset_handler(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    serve(&state, &path).await
}

async fn serve(state: &AppState, path: &str) -> Response {
    let file = match state.assets.resolve(path).await {
        Ok(file) => file,
        Err(AssetError::Forbidden(p)) => {
            warn!(path = %p, "rejected asset path");
            return (StatusCode::FORBIDDEN, "Access denied").into_response();
        }
        Err(AssetError::NotFound(_)) => {
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, assets::content_type(&file))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            warn!(path = %file.display(), error = %e, "failed to read asset");
            (StatusCode::NOT_FOUND, "File not found").into_response()
        }
    }
}
