//! Mock LLM Service Implementation
//!
//! Minimal mock used by `LlmServiceFactory` when provider is `"mock"`.
//! Returns deterministic responses for testing.

use crate::{CompletionRequest, CompletionResponse, LlmError, LlmService};

/// Mock LLM service for testing
#[derive(Debug, Clone, Default)]
pub struct MockLlmService {
    /// When set, `complete` always fails with `LlmError::NoContent`.
    fail_with_no_content: bool,
}

impl MockLlmService {
    /// Create a new mock LLM service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that simulates an empty completion
    pub fn failing() -> Self {
        Self {
            fail_with_no_content: true,
        }
    }
}

#[async_trait::async_trait]
impl LlmService for MockLlmService {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        tracing::info!("Mock LLM service processing completion request");

        if self.fail_with_no_content {
            return Err(LlmError::NoContent);
        }

        // Generate a simple response based on the last message
        let last_message = request
            .messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or("empty");

        Ok(CompletionResponse {
            content: format!("Mock response to: {}", last_message),
            model: "mock-model".to_string(),
        })
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }
}
