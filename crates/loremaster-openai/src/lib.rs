//! OpenAI-compatible completion provider for Loremaster
//!
//! Implements the `CompletionProvider` port against any
//! chat-completions endpoint. Without a configured API key the
//! provider returns fixed offline placeholders instead of failing, so
//! orchestrators remain usable without credentials.

mod client;
mod config;

pub use client::OpenAiProvider;
pub use config::OpenAiConfig;
