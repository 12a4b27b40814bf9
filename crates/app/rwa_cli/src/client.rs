//! Backend client with offline fallback.
//!
//! Any failure talking to the backend (transport, non-2xx, a body that
//! reports an error, a body that does not decode) is logged and replaced by
//! the built-in cases, so a search always produces something to show.

use std::time::Duration;

use reqwest::Client;
use rwa_core::fallback;
use rwa_core::models::{CaseList, EnterpriseQuery};
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

use crate::Result;
use crate::cli::BackendArgs;

const SEARCH_PATH: &str = "api/search-rwa-cases";
const INTENT_PATH: &str = "api/intent-prediction";

/// Why a backend call was not usable.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend URL '{url}': {reason}")]
    Url { url: String, reason: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("backend reported an error: {0}")]
    Reported(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Where a case list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseSource {
    Backend,
    Fallback,
}

/// Thin JSON client for the RWA search backend.
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    pub fn new(args: &BackendArgs) -> std::result::Result<Self, BackendError> {
        let mut raw = args.backend_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|e| BackendError::Url {
            url: args.backend_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = request_timeout(args.timeout_secs) {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    fn endpoint(&self, path: &str) -> std::result::Result<Url, BackendError> {
        self.base.join(path).map_err(|e| BackendError::Url {
            url: format!("{}{path}", self.base),
            reason: e.to_string(),
        })
    }

    /// POST a JSON body and return the decoded JSON reply.
    async fn post(&self, path: &str, body: &Value) -> std::result::Result<Value, BackendError> {
        let resp = self.http.post(self.endpoint(path)?).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<Value>().await {
                Ok(v) => error_message(&v).unwrap_or_else(|| v.to_string()),
                Err(_) => status.to_string(),
            };
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = resp
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        if let Some(message) = error_message(&value) {
            return Err(BackendError::Reported(message));
        }
        Ok(value)
    }

    pub async fn search_cases(
        &self,
        query: &EnterpriseQuery,
    ) -> std::result::Result<CaseList, BackendError> {
        let body = serde_json::to_value(query).map_err(|e| BackendError::Decode(e.to_string()))?;
        let value = self.post(SEARCH_PATH, &body).await?;
        serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
    }

    pub async fn predict_intent(&self, question: &str) -> std::result::Result<Value, BackendError> {
        self.post(INTENT_PATH, &json!({ "userQuestion": question }))
            .await
    }
}

/// `--timeout-secs 0` waits indefinitely, same as leaving it unset.
fn request_timeout(secs: Option<u64>) -> Option<Duration> {
    secs.filter(|secs| *secs > 0).map(Duration::from_secs)
}

/// `message`, falling back to `error`, when the body carries an `error` key.
fn error_message(value: &Value) -> Option<String> {
    let error = value.get("error")?;
    let text = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| error.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string());
    Some(text)
}

/// Search through the backend when given one, else (or on failure) locally.
pub async fn search_with_fallback(
    backend: Option<&BackendClient>,
    query: &EnterpriseQuery,
) -> Result<(CaseList, CaseSource)> {
    query.validate()?;

    if let Some(backend) = backend {
        log::info!(
            "searching backend for {} ({})",
            query.company_name.trim(),
            query.industry_name().unwrap_or("-")
        );
        match backend.search_cases(query).await {
            Ok(list) => return Ok((list, CaseSource::Backend)),
            Err(e) => log::warn!("backend search failed, using built-in cases: {e}"),
        }
    }

    Ok((fallback::generate(query)?, CaseSource::Fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_field() {
        let body = json!({ "error": "API调用失败", "message": "timeout", "cases": [] });
        assert_eq!(error_message(&body).as_deref(), Some("timeout"));

        let body = json!({ "error": "用户问题不能为空" });
        assert_eq!(error_message(&body).as_deref(), Some("用户问题不能为空"));

        let body = json!({ "error": { "code": 1 } });
        assert_eq!(error_message(&body).as_deref(), Some("{\"code\":1}"));

        assert_eq!(error_message(&json!({ "cases": [] })), None);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = BackendClient::new(&BackendArgs {
            backend_url: "http://localhost:8001/rwa".into(),
            timeout_secs: None,
        })
        .unwrap();
        assert_eq!(
            client.endpoint(SEARCH_PATH).unwrap().as_str(),
            "http://localhost:8001/rwa/api/search-rwa-cases"
        );
    }

    #[test]
    fn zero_timeout_disables_the_limit() {
        assert_eq!(request_timeout(None), None);
        assert_eq!(request_timeout(Some(0)), None);
        assert_eq!(request_timeout(Some(30)), Some(Duration::from_secs(30)));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let result = BackendClient::new(&BackendArgs {
            backend_url: "not a url".into(),
            timeout_secs: None,
        });
        assert!(matches!(result, Err(BackendError::Url { .. })));
    }

    #[tokio::test]
    async fn offline_search_uses_fixtures() {
        let query = EnterpriseQuery::new("Acme Solar").with_industry("新能源");
        let (list, source) = search_with_fallback(None, &query).await.unwrap();
        assert_eq!(source, CaseSource::Fallback);
        assert_eq!(list.cases.len(), 3);
        assert_eq!(list.cases[0].project_name, "SolarCoin - 太阳能发电代币化");
    }

    #[tokio::test]
    async fn blank_company_is_rejected_even_offline() {
        let err = search_with_fallback(None, &EnterpriseQuery::new(" "))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::Error::Query(_)));
    }
}
