//! Text completion client for the external language model.
//!
//! # Public API
//!
//! - [`CompletionClient`]: the seam the search gateway calls through
//! - [`CompletionRequest`]: model, system prompt, user turn, sampling knobs
//! - [`anthropic::AnthropicClient`]: Messages API implementation over `reqwest`
//! - [`config::LlmConfig`]: explicit client configuration (key, proxy, model)

pub mod anthropic;
pub mod config;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while calling the model.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("ANTHROPIC_API_KEY is not configured")]
    MissingApiKey,

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Response(String),
}

/// One completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user_message: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Anything that can turn a prompt into free text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
