//! RWA case search endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rwa_core::models::{CaseReply, EnterpriseQuery};

use crate::AppState;
use crate::error::AppResult;

/// `POST /api/search-rwa-cases`: ask the model for tokenization cases.
///
/// Blank `companyName` is rejected with `400` before the model is called.
/// A model failure is a `500` carrying an empty case list; an unusable model
/// reply is still a `200` with a synthesized case.
pub async fn search_cases_handler(
    State(state): State<AppState>,
    payload: Result<Json<EnterpriseQuery>, JsonRejection>,
) -> AppResult<Json<CaseReply>> {
    let Json(query) = payload?;
    let reply = state.search.search(&query).await?;
    Ok(Json(reply))
}
