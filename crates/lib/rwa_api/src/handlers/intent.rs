//! Intent prediction endpoint for the contract-review chat flow.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use chrono::{SecondsFormat, Utc};
use rwa_core::intent::{self, IntentResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};

const MISSING_QUESTION: &str = "用户问题不能为空";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPredictionRequest {
    #[serde(default)]
    pub user_question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IntentPredictionResponse {
    pub success: bool,
    pub data: IntentPayload,
}

/// The matched response plus the time it was produced.
#[derive(Debug, Serialize)]
pub struct IntentPayload {
    #[serde(flatten)]
    pub response: IntentResponse,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
}

/// `POST /api/intent-prediction`: canned response for the review chat.
pub async fn intent_prediction_handler(
    payload: Result<Json<IntentPredictionRequest>, JsonRejection>,
) -> AppResult<Json<IntentPredictionResponse>> {
    let Json(request) = payload?;
    let question = request
        .user_question
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_QUESTION.into()))?;

    let prediction =
        intent::predict(&question).map_err(|e| AppError::IntentFailed(e.to_string()))?;
    info!(question = %question, rule = prediction.rule, "intent prediction");

    Ok(Json(IntentPredictionResponse {
        success: true,
        data: IntentPayload {
            response: prediction.response,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    }))
}
