//! Completion client configuration.
//!
//! Resolved once at startup and handed to [`super::CompletionClient`]; the
//! client never reads the environment itself.

use std::env;
use std::time::Duration;

/// Default chat-completion API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Upper bound on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 150;
/// Bound on a single outbound call, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const KEY_PREFIX_LEN: usize = 10;

/// Settings for the outbound chat-completion API.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Bearer credential. `None` when unset or blank.
    pub api_key: Option<String>,
    /// API base, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
    /// Model identifier.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl CompletionConfig {
    /// Reads configuration from environment variables with defaults.
    ///
    /// | Variable          | Default                     |
    /// |-------------------|-----------------------------|
    /// | `OPENAI_API_KEY`  | none                        |
    /// | `OPENAI_API_BASE` | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`    | `gpt-3.5-turbo`             |
    pub fn from_env() -> Self {
        Self::new(env::var("OPENAI_API_KEY").ok())
            .with_api_base(env_or("OPENAI_API_BASE", DEFAULT_API_BASE))
            .with_model(env_or("OPENAI_MODEL", DEFAULT_MODEL))
    }

    /// Default settings with the given credential.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Credential prefix safe for logs. Short keys reveal at most half their
    /// characters.
    pub fn masked_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let len = key.chars().count();
            let shown: String = key.chars().take(KEY_PREFIX_LEN.min(len / 2)).collect();
            format!("{shown}...")
        })
    }
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.masked_key())
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CompletionConfig::new(Some("sk-test".into()));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn blank_key_is_treated_as_missing() {
        assert!(CompletionConfig::new(Some("   ".into())).api_key.is_none());
        assert!(CompletionConfig::new(Some(String::new())).api_key.is_none());
        assert!(CompletionConfig::new(None).api_key.is_none());
    }

    #[test]
    fn key_is_trimmed() {
        let config = CompletionConfig::new(Some("  sk-abc  ".into()));
        assert_eq!(config.api_key.as_deref(), Some("sk-abc"));
    }

    #[test]
    fn masked_key_shows_ten_character_prefix() {
        let config = CompletionConfig::new(Some("sk-or-v1-0123456789abcdef".into()));
        assert_eq!(config.masked_key().as_deref(), Some("sk-or-v1-0..."));
    }

    #[test]
    fn masked_key_never_reveals_short_key() {
        let config = CompletionConfig::new(Some("sk-short".into()));
        let masked = config.masked_key().expect("masked");
        assert_eq!(masked, "sk-s...");
        assert!(!masked.contains("sk-short"));
    }

    #[test]
    fn debug_output_hides_key() {
        let config = CompletionConfig::new(Some("sk-or-v1-0123456789abcdef".into()));
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("0123456789abcdef"));
    }
}
