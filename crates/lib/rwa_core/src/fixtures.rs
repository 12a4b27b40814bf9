//! Embedded fixture tables.
//!
//! Fixtures are JSON documents compiled into the binary with `include_str!`
//! and decoded once on first use. They are never mutated afterwards.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Raw fallback case table, keyed by industry.
pub const FALLBACK_CASES: &str = include_str!("../fixtures/fallback_cases.json");

/// Raw intent rule table.
pub const INTENT_RULES: &str = include_str!("../fixtures/intent_rules.json");

/// Errors raised while decoding an embedded fixture.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("Fixture '{name}' is malformed: {reason}")]
    Malformed { name: &'static str, reason: String },
}

/// Decode a named fixture document.
pub fn decode<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|e| FixtureError::Malformed {
        name,
        reason: e.to_string(),
    })
}
