//! API server configuration.

use std::env;
use std::path::PathBuf;

use voxchat_core::completion::config::CompletionConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
    /// Include error details in 500 responses.
    pub debug: bool,
    /// Directory holding the daily conversation logs.
    pub log_dir: PathBuf,
    /// Frontend asset directories, searched in order.
    pub static_dirs: Vec<PathBuf>,
    /// Outbound completion API settings.
    pub completion: CompletionConfig,
}

/// Whether `DEBUG` or `FLASK_DEBUG` enables debug mode.
pub fn debug_from_env() -> bool {
    ["DEBUG", "FLASK_DEBUG"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .any(|value| parse_flag(&value))
}

/// Truthy values: `1`, `true`, `yes`, `on` (case-insensitive). Anything else
/// is false.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
