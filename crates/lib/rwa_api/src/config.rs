//! API server configuration.

use rwa_core::llm::config::LlmConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8001;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8001").
    pub bind_addr: String,
    /// Language model client settings.
    pub llm: LlmConfig,
}

impl ApiConfig {
    pub fn new(host: &str, port: u16, llm: LlmConfig) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
            llm,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, LlmConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_loopback_8001() {
        assert_eq!(ApiConfig::default().bind_addr, "127.0.0.1:8001");
    }

    #[test]
    fn new_joins_host_and_port() {
        let config = ApiConfig::new("0.0.0.0", 0, LlmConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:0");
    }
}
