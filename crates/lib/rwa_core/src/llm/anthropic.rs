//! Anthropic Messages API client.
//!
//! Sends one non-streaming `POST /v1/messages` per completion and returns
//! the first text block of the reply. No retries: a failed call is reported
//! to the caller as-is.

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::config::{API_VERSION, LlmConfig};
use super::{CompletionClient, CompletionRequest, LlmError};

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Messages API client built from an explicit [`LlmConfig`].
#[derive(Clone)]
pub struct AnthropicClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl std::fmt::Debug for AnthropicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl AnthropicClient {
    /// Build the HTTP client, routing through the configured proxy if any.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| LlmError::Config(format!("proxy '{proxy_url}': {e}")))?;
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.messages_url()?,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        debug!(model = %request.model, max_tokens = request.max_tokens, "calling messages API");

        let resp = self
            .client
            .post(self.endpoint.clone())
            .header("x-api-key", api_key)
            .header("anthropic-version", API_VERSION)
            .json(&MessagesRequest {
                model: &request.model,
                max_tokens: request.max_tokens,
                temperature: request.temperature,
                system: &request.system,
                messages: [Message {
                    role: "user",
                    content: &request.user_message,
                }],
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(LlmError::Upstream { status, body });
        }

        let data: MessagesResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Response(format!("messages response parse error: {e}")))?;

        data.content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| LlmError::Response("reply has no text content block".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "claude-test".into(),
            system: "系统提示".into(),
            user_message: "请搜索".into(),
            max_tokens: 256,
            temperature: 1.0,
        }
    }

    fn client_for(server: &MockServer, api_key: Option<&str>) -> AnthropicClient {
        AnthropicClient::new(&LlmConfig {
            api_key: api_key.map(str::to_string),
            base_url: server.base_url(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn returns_first_text_block() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/messages")
                    .header("x-api-key", "test-key")
                    .header("anthropic-version", API_VERSION)
                    .json_body(json!({
                        "model": "claude-test",
                        "max_tokens": 256,
                        "temperature": 1.0,
                        "system": "系统提示",
                        "messages": [{ "role": "user", "content": "请搜索" }]
                    }));
                then.status(200).json_body(json!({
                    "id": "msg_1",
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        { "type": "tool_use", "id": "t1", "name": "x", "input": {} },
                        { "type": "text", "text": "{\"cases\":[]}" }
                    ]
                }));
            })
            .await;

        let text = client_for(&server, Some("test-key"))
            .complete(&request())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "{\"cases\":[]}");
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(401)
                    .json_body(json!({ "type": "error", "error": { "type": "authentication_error" } }));
            })
            .await;

        let err = client_for(&server, Some("bad-key"))
            .complete(&request())
            .await
            .unwrap_err();

        match err {
            LlmError::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("authentication_error"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn reply_without_text_is_response_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(json!({ "content": [] }));
            })
            .await;

        let err = client_for(&server, Some("k"))
            .complete(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Response(_)));
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200);
            })
            .await;

        let err = client_for(&server, None)
            .complete(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, LlmError::MissingApiKey));
        mock.assert_hits_async(0).await;
    }

    #[test]
    fn invalid_proxy_is_config_error() {
        let err = AnthropicClient::new(&LlmConfig {
            proxy_url: Some("::not a proxy::".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, LlmError::Config(msg) if msg.contains("proxy")));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client = AnthropicClient::new(&LlmConfig {
            api_key: Some("sk-ant-secret".into()),
            ..Default::default()
        })
        .unwrap();

        let text = format!("{client:?}");
        assert!(text.contains("<redacted>"));
        assert!(text.contains("/v1/messages"));
        assert!(!text.contains("sk-ant-secret"));
    }
}
