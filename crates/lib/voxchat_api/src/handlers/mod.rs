//! Request handlers.

pub mod assets;
pub mod chat;
pub mod health;
