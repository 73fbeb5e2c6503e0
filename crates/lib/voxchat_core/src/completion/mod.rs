//! Completion module — one chat-completion call per user message.
//!
//! # Public API
//!
//! - [`CompletionClient::complete`] — call the API, surfacing failures as
//!   [`CompletionError`]
//! - [`CompletionClient::get_response`] — same call, but failures collapse
//!   into a fixed apology string so callers always get something speakable
//! - [`config::CompletionConfig`] — credential, endpoint, model and limits
//!
//! There is no retry: a failed call produces exactly one apology.

pub mod config;
mod openai;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use crate::prompt;
use config::CompletionConfig;
use openai::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Reply when no credential is configured.
pub const APOLOGY_NOT_CONFIGURED: &str =
    "Sorry, I'm not able to answer right now because the AI service isn't configured.";
/// Reply when the API answers with a non-success status.
pub const APOLOGY_AUTHORIZATION: &str =
    "Sorry, I'm unable to process your request at the moment due to an authorization issue.";
/// Reply for transport, timeout and decoding failures.
pub const APOLOGY_GENERIC: &str = "Something went wrong. Please try again later.";

/// Errors that can occur while requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Invalid API base URL: {0}")]
    InvalidApiBase(String),

    #[error("Completion API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed completion response: {0}")]
    Malformed(String),
}

impl CompletionError {
    /// Fixed user-facing text for this failure. Never includes upstream
    /// content.
    pub fn apology(&self) -> &'static str {
        match self {
            CompletionError::MissingApiKey | CompletionError::InvalidApiBase(_) => {
                APOLOGY_NOT_CONFIGURED
            }
            CompletionError::Upstream { .. } => APOLOGY_AUTHORIZATION,
            CompletionError::Transport(_) | CompletionError::Malformed(_) => APOLOGY_GENERIC,
        }
    }

    /// Log the failure with full detail.
    pub fn report(&self) {
        match self {
            CompletionError::Upstream { status, body } => {
                error!(status, body = %body, "completion API error");
            }
            other => error!(error = %other, "completion failed"),
        }
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: Client,
    config: CompletionConfig,
    endpoint: String,
}

impl CompletionClient {
    /// Build a client. The HTTP timeout comes from the config and is always
    /// finite.
    pub fn new(config: CompletionConfig) -> Result<Self, CompletionError> {
        let base = url::Url::parse(config.api_base.trim())
            .map_err(|e| CompletionError::InvalidApiBase(format!("{}: {e}", config.api_base)))?;
        let endpoint = format!("{}/chat/completions", base.as_str().trim_end_matches('/'));
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            config,
            endpoint,
        })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a completion for `user_message` under the persona prompt.
    ///
    /// Returns the first choice's content, trimmed and non-empty.
    pub async fn complete(&self, user_message: &str) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage::system(prompt::system_prompt()),
                ChatMessage::user(user_message),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(endpoint = %self.endpoint, model = %self.config.model, "requesting completion");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Malformed(format!("response parse error: {e}")))?;

        parsed
            .first_content()
            .ok_or_else(|| CompletionError::Malformed("response contained no content".into()))
    }

    /// Like [`complete`](Self::complete), but never fails: errors are logged
    /// and replaced by their apology.
    pub async fn get_response(&self, user_message: &str) -> String {
        match self.complete(user_message).await {
            Ok(text) => text,
            Err(e) => {
                e.report();
                e.apology().to_string()
            }
        }
    }
}
