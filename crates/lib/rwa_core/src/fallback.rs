//! Offline case generator used when the backend cannot be reached.
//!
//! Picks pre-authored records for the query's industry (or the default set
//! when the industry has no entry), always appends the first default record,
//! and keeps at most [`MAX_FALLBACK_CASES`]. No network, no ranking.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::fixtures::{self, FixtureError};
use crate::models::{CaseList, CaseRecord, EnterpriseQuery};

/// Upper bound on the number of generated cases.
pub const MAX_FALLBACK_CASES: usize = 3;

#[derive(Debug, Deserialize)]
struct FallbackTable {
    industries: BTreeMap<String, Vec<CaseRecord>>,
    defaults: Vec<CaseRecord>,
}

static TABLE: LazyLock<Result<FallbackTable, FixtureError>> =
    LazyLock::new(|| fixtures::decode("fallback_cases", fixtures::FALLBACK_CASES));

fn table() -> Result<&'static FallbackTable, FixtureError> {
    TABLE.as_ref().map_err(Clone::clone)
}

/// Generate a case list for `query` from the embedded tables.
pub fn generate(query: &EnterpriseQuery) -> Result<CaseList, FixtureError> {
    let table = table()?;
    let selected = query
        .industry_name()
        .and_then(|industry| table.industries.get(industry))
        .unwrap_or(&table.defaults);

    let cases = selected
        .iter()
        .chain(table.defaults.first())
        .take(MAX_FALLBACK_CASES)
        .cloned()
        .collect();

    Ok(CaseList { cases })
}

/// Industries that have dedicated fallback records.
pub fn covered_industries() -> Result<Vec<&'static str>, FixtureError> {
    Ok(table()?.industries.keys().map(String::as_str).collect())
}
