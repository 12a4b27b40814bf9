//! Route paths.

pub const GET_HEALTH: &str = "/health";
pub const POST_SEARCH_RWA_CASES: &str = "/api/search-rwa-cases";
pub const POST_INTENT_PREDICTION: &str = "/api/intent-prediction";
