//! Case search gateway.
//!
//! Validates the enterprise query, renders the prompt, calls the model, and
//! normalizes whatever text comes back. Only a failed model call is an
//! error; an unusable reply still yields a well-shaped payload.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::llm::config::LlmConfig;
use crate::llm::{CompletionClient, CompletionRequest, LlmError};
use crate::models::{CaseReply, EnterpriseQuery, QueryError};
use crate::{normalize, prompt};

/// Errors surfaced by [`CaseSearch::search`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    #[error(transparent)]
    Upstream(#[from] LlmError),
}

/// Sampling settings applied to every search call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl From<&LlmConfig> for ModelSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

/// The gateway. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct CaseSearch {
    client: Arc<dyn CompletionClient>,
    settings: ModelSettings,
}

impl CaseSearch {
    pub fn new(client: Arc<dyn CompletionClient>, settings: ModelSettings) -> Self {
        Self { client, settings }
    }

    /// The completion request that `query` would produce.
    pub fn completion_request(&self, query: &EnterpriseQuery) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            system: prompt::render(query),
            user_message: prompt::SEARCH_USER_MESSAGE.to_string(),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    /// Run one search.
    pub async fn search(&self, query: &EnterpriseQuery) -> Result<CaseReply, SearchError> {
        query.validate()?;

        info!(
            company_name = %query.company_name,
            industry = query.industry_name(),
            company_type = query.company_type_name(),
            "searching RWA cases"
        );

        let request = self.completion_request(query);
        let raw = self.client.complete(&request).await.map_err(|e| {
            error!(error = %e, "model call failed");
            e
        })?;

        let reply = normalize::normalize(&raw);
        info!(cases = reply.case_count(), "model reply received");
        Ok(reply)
    }
}
