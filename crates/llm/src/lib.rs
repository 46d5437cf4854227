//! LLM completion client for Chatline
//!
//! Defines the `LlmService` seam the chat domain talks to, an
//! OpenAI-compatible HTTP implementation, and a deterministic mock for
//! tests. One request, one response; no retry, no streaming.

pub mod mock;
pub mod openai;

use std::sync::Arc;

pub use mock::MockLlmService;
pub use openai::OpenAiService;

/// Role of a message in a completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmRole {
    User,
    Assistant,
}

/// A single (role, content) turn in the conversation history
#[derive(Debug, Clone)]
pub struct LlmMessage {
    pub role: LlmRole,
    pub content: String,
}

/// Completion request: ordered history plus an optional system prompt
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: Option<String>,
    pub messages: Vec<LlmMessage>,
}

/// Completion response
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
}

/// Errors from the completion client
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Invalid LLM configuration: {0}")]
    Config(String),

    #[error("LLM request failed: {0}")]
    Request(String),

    #[error("LLM response error: {0}")]
    Response(String),

    #[error("LLM returned no usable text")]
    NoContent,
}

/// LLM completion service seam
#[async_trait::async_trait]
pub trait LlmService: Send + Sync {
    /// Send the ordered message history and return the generated reply.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;

    /// Model the service completes with
    fn default_model(&self) -> &str;
}

/// Configuration for the completion client
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub default_model: String,
}

/// Builds the configured `LlmService` implementation
pub struct LlmServiceFactory;

impl LlmServiceFactory {
    /// Create a service for the named provider (`"openai"` or `"mock"`).
    pub fn create(provider: &str, config: LlmConfig) -> Result<Arc<dyn LlmService>, LlmError> {
        match provider {
            "openai" => Ok(Arc::new(OpenAiService::new(config))),
            "mock" => Ok(Arc::new(MockLlmService::new())),
            other => Err(LlmError::Config(format!("Unknown LLM provider: {}", other))),
        }
    }
}
