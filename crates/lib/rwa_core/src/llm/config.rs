//! LLM client configuration.
//!
//! Resolved once at startup and handed to the client; nothing here touches
//! process-wide state.

use std::env;
use std::time::Duration;

use url::Url;

use super::LlmError;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";
pub const DEFAULT_MAX_TOKENS: u32 = 8192;
pub const DEFAULT_TEMPERATURE: f32 = 1.0;
pub const API_VERSION: &str = "2023-06-01";

/// Prefix carried by well-formed Anthropic API keys.
const API_KEY_PREFIX: &str = "sk-ant-";

/// Configuration for [`super::anthropic::AnthropicClient`].
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Outbound proxy, set only when proxying is enabled and a URL exists.
    pub proxy_url: Option<String>,
    /// Whole-request timeout. `None` waits indefinitely; never zero.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("proxy_url", &self.proxy_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            proxy_url: None,
            timeout: None,
        }
    }
}

impl LlmConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                  | Default                       |
    /// |---------------------------|-------------------------------|
    /// | `ANTHROPIC_API_KEY`       | unset                         |
    /// | `ANTHROPIC_BASE_URL`      | `https://api.anthropic.com`   |
    /// | `ANTHROPIC_MODEL`         | `claude-3-7-sonnet-20250219`  |
    /// | `ANTHROPIC_MAX_TOKENS`    | `8192`                        |
    /// | `ANTHROPIC_TEMPERATURE`   | `1.0`                         |
    /// | `USE_PROXY`               | `false`                       |
    /// | `HTTPS_PROXY`/`HTTP_PROXY`| unset                         |
    /// | `LLM_TIMEOUT_SECS`        | unset or `0` (no timeout)     |
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let base_url = var("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url)
            .map_err(|e| LlmError::Config(format!("ANTHROPIC_BASE_URL '{base_url}': {e}")))?;

        let max_tokens = match var("ANTHROPIC_MAX_TOKENS") {
            Some(v) => v
                .parse()
                .map_err(|e| LlmError::Config(format!("ANTHROPIC_MAX_TOKENS '{v}': {e}")))?,
            None => DEFAULT_MAX_TOKENS,
        };
        let temperature = match var("ANTHROPIC_TEMPERATURE") {
            Some(v) => v
                .parse()
                .map_err(|e| LlmError::Config(format!("ANTHROPIC_TEMPERATURE '{v}': {e}")))?,
            None => DEFAULT_TEMPERATURE,
        };
        // Zero means no timeout, like an unset variable.
        let timeout = match var("LLM_TIMEOUT_SECS") {
            Some(v) => Some(v.parse::<u64>().map_err(|e| {
                LlmError::Config(format!("LLM_TIMEOUT_SECS '{v}': {e}"))
            })?)
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
            None => None,
        };

        let use_proxy = var("USE_PROXY").is_some_and(|v| v == "true");
        let proxy_url = if use_proxy {
            var("HTTPS_PROXY").or_else(|| var("HTTP_PROXY"))
        } else {
            None
        };

        Ok(Self {
            api_key: var("ANTHROPIC_API_KEY"),
            base_url,
            model: var("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            temperature,
            proxy_url,
            timeout,
        })
    }

    /// Full URL of the Messages endpoint.
    pub fn messages_url(&self) -> Result<Url, LlmError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| LlmError::Config(format!("base URL '{}': {e}", self.base_url)))?;
        base.join("v1/messages")
            .map_err(|e| LlmError::Config(format!("messages URL: {e}")))
    }

    /// Length of the configured key and whether it looks well formed.
    ///
    /// Used for startup diagnostics; the key itself is never logged.
    pub fn api_key_summary(&self) -> Option<(usize, bool)> {
        self.api_key
            .as_deref()
            .map(|k| (k.len(), k.starts_with(API_KEY_PREFIX) && k.len() > 50))
    }
}
