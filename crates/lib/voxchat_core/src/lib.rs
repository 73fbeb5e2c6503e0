//! # voxchat_core
//!
//! Core domain logic for Voxchat: the persona, the system prompt built from
//! it, the outbound completion client, the daily conversation log and static
//! asset resolution.

pub mod assets;
pub mod completion;
pub mod conversation_log;
pub mod persona;
pub mod prompt;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
