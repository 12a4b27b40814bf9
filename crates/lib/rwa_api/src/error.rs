//! Application error types.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rwa_core::search::SearchError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream model call failed: {0}")]
    Upstream(String),

    #[error("Intent prediction failed: {0}")]
    IntentFailed(String),
}

/// `400` body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `500` body of the case search; the empty list keeps the payload shape.
#[derive(Debug, Serialize)]
pub struct SearchErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub cases: Vec<serde_json::Value>,
}

/// `500` body of the intent endpoint.
#[derive(Debug, Serialize)]
pub struct IntentErrorResponse {
    pub success: bool,
    pub error: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(m) => {
                let body = ErrorResponse {
                    error: m.clone(),
                    message: m,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            AppError::Upstream(m) => {
                let body = SearchErrorResponse {
                    error: "API调用失败",
                    message: m,
                    cases: Vec::new(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            AppError::IntentFailed(m) => {
                error!(error = %m, "intent prediction failed");
                let body = IntentErrorResponse {
                    success: false,
                    error: "意图预判失败",
                    message: "抱歉，意图预判过程中出现错误，请稍后再试。",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidQuery(q) => AppError::Validation(q.to_string()),
            SearchError::Upstream(llm) => AppError::Upstream(llm.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rwa_core::llm::LlmError;
    use rwa_core::models::QueryError;

    #[test]
    fn search_errors_map_to_status() {
        let validation = AppError::from(SearchError::InvalidQuery(QueryError::MissingCompanyName));
        assert!(matches!(&validation, AppError::Validation(m) if m == "请输入企业名称"));
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream = AppError::from(SearchError::Upstream(LlmError::MissingApiKey));
        assert!(matches!(&upstream, AppError::Upstream(m) if m.contains("ANTHROPIC_API_KEY")));
        assert_eq!(
            upstream.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn search_error_body_has_empty_cases() {
        let body = serde_json::to_value(SearchErrorResponse {
            error: "API调用失败",
            message: "boom".into(),
            cases: Vec::new(),
        })
        .unwrap();
        assert_eq!(body["cases"], serde_json::json!([]));
    }
}
