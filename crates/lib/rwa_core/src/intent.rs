//! Canned intent prediction for the contract-review chat flow.
//!
//! A literal lookup: the question is checked against an ordered list of
//! marker substrings and the first rule whose marker it contains supplies a
//! fixed response. Questions matching no rule get the fallback response.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::fixtures::{self, FixtureError};

/// Response category as shown to the chat client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentCategory {
    /// A list of options for the user to pick from.
    #[serde(rename = "选项")]
    Options,
    /// Review findings for an uploaded document.
    #[serde(rename = "结果")]
    Review,
}

/// One review finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFinding {
    pub point: String,
    pub result: String,
    pub reason: String,
    pub suggestion: String,
}

/// Entry of `contentList`: a bare option label or a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Choice(String),
    Finding(ReviewFinding),
}

/// `{ category, contentList }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResponse {
    pub category: IntentCategory,
    pub content_list: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
struct IntentRule {
    name: String,
    marker: String,
    response: IntentResponse,
}

#[derive(Debug, Deserialize)]
struct IntentTable {
    rules: Vec<IntentRule>,
    fallback: IntentResponse,
}

static TABLE: LazyLock<Result<IntentTable, FixtureError>> =
    LazyLock::new(|| fixtures::decode("intent_rules", fixtures::INTENT_RULES));

fn table() -> Result<&'static IntentTable, FixtureError> {
    TABLE.as_ref().map_err(Clone::clone)
}

/// A resolved prediction: the rule that fired (if any) and its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub rule: Option<&'static str>,
    pub response: IntentResponse,
}

/// Evaluate the rules in order against `question`.
pub fn predict(question: &str) -> Result<Prediction, FixtureError> {
    let table = table()?;
    let prediction = match table.rules.iter().find(|r| question.contains(&r.marker)) {
        Some(rule) => Prediction {
            rule: Some(rule.name.as_str()),
            response: rule.response.clone(),
        },
        None => Prediction {
            rule: None,
            response: table.fallback.clone(),
        },
    };
    Ok(prediction)
}
