//! Chat endpoint — one persona reply per message.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult, MESSAGE_REQUIRED};
use crate::models::{ChatRequest, ChatResponse};

/// `POST /api/chat` — answer `message` as the persona.
///
/// Upstream failures still produce a 200: the reply text becomes a fixed
/// apology so the voice client always has something to speak. Only
/// successful completions are written to the conversation log.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let message = match body {
        Ok(Json(req)) => req.message.unwrap_or_default(),
        Err(rejection) => {
            debug!(%rejection, "unreadable chat body");
            String::new()
        }
    };

    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::Validation(MESSAGE_REQUIRED.into()));
    }

    let response = match state.completion.complete(message).await {
        Ok(reply) => {
            state.conversation_log.record(message, &reply).await;
            reply
        }
        Err(e) => {
            e.report();
            e.apology().to_string()
        }
    };

    Ok(Json(ChatResponse::success(response)))
}
