//! Completion Provider Port
//!
//! Abstract interface for text-generation invocations. Implementations
//! can be swapped between providers; orchestrators receive a handle at
//! construction and never build one implicitly.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Structured-output mode requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonObject,
}

/// A single completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// User prompt
    pub prompt: String,
    /// Optional system message
    pub system_message: Option<String>,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Optional structured-output mode
    pub response_format: Option<ResponseFormat>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_message: None,
            temperature: 0.7,
            max_tokens: None,
            response_format: None,
        }
    }

    pub fn with_system(mut self, message: impl Into<String>) -> Self {
        self.system_message = Some(message.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_json_object(mut self) -> Self {
        self.response_format = Some(ResponseFormat::JsonObject);
        self
    }

    /// Whether the request asked for a JSON object response
    pub fn wants_json(&self) -> bool {
        self.response_format == Some(ResponseFormat::JsonObject)
    }
}

/// Completion provider interface.
///
/// One blocking round trip per call from the orchestrators' point of
/// view; no retries or caching happen behind this trait.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the request
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    /// Provider name (e.g. "openai", "offline")
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = CompletionRequest::new("hello");
        assert_eq!(request.temperature, 0.7);
        assert!(request.system_message.is_none());
        assert!(request.max_tokens.is_none());
        assert!(!request.wants_json());
    }

    #[test]
    fn test_builder_chaining() {
        let request = CompletionRequest::new("hello")
            .with_system("be brief")
            .with_temperature(0.3)
            .with_max_tokens(256)
            .with_json_object();
        assert_eq!(request.system_message.as_deref(), Some("be brief"));
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.max_tokens, Some(256));
        assert!(request.wants_json());
    }
}
