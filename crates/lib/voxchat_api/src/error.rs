//! Application error types.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

/// Body of the 400 returned for a missing or blank chat message.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// `details` is only populated in debug mode.
    #[error("Internal server error")]
    Internal { details: Option<String> },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(m) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: m,
                    details: None,
                },
            ),
            AppError::Internal { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    details,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Converts a handler panic into a 500.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %message, "handler panicked");

    AppError::Internal {
        details: debug.then_some(message),
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let resp = AppError::Validation(MESSAGE_REQUIRED.into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json, serde_json::json!({"error": "Message is required"}));
    }

    #[tokio::test]
    async fn panic_hides_details_unless_debug() {
        let resp = panic_response(Box::new("boom"), false);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "Internal server error");
        assert!(json.get("details").is_none());

        let resp = panic_response(Box::new(String::from("boom")), true);
        let json = body_json(resp).await;
        assert_eq!(json["details"], "boom");
    }
}
