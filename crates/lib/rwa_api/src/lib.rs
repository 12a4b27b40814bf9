//! # rwa_api
//!
//! HTTP API library for RWA case search.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use rwa_core::search::CaseSearch;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{cases, health, intent};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Case search gateway.
    pub search: CaseSearch,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_HEALTH, get(health::health_handler))
        .route(routes::POST_SEARCH_RWA_CASES, post(cases::search_cases_handler))
        .route(
            routes::POST_INTENT_PREDICTION,
            post(intent::intent_prediction_handler),
        )
        .layer(cors)
        .with_state(state)
}
