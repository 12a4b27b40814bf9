//! Tokenization case records.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form technical details of a case.
///
/// Keys are camelCase names such as `tokenStandard` or `tokenizationProcess`.
/// Values are usually strings; `tokenizationProcess` may be an object of
/// step name to description.
pub type TechnicalDetails = Map<String, Value>;

/// One tokenization case study, used for display only.
///
/// Every field defaults to empty when absent, null, or of a shape that
/// cannot be shown, so loosely shaped model output still decodes. Numbers and
/// booleans in text fields are kept as their text form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseRecord {
    #[serde(deserialize_with = "display_text")]
    pub project_name: String,
    #[serde(deserialize_with = "display_text")]
    pub asset_type: String,
    #[serde(deserialize_with = "display_text")]
    pub tokenized_asset: String,
    #[serde(deserialize_with = "display_text")]
    pub scale: String,
    #[serde(deserialize_with = "display_text")]
    pub implementation_date: String,
    #[serde(deserialize_with = "display_text")]
    pub platform: String,
    #[serde(deserialize_with = "display_text")]
    pub outcome: String,
    #[serde(deserialize_with = "display_text")]
    pub source_url: String,
    /// Relevance from 1 to 10, carried as text.
    #[serde(deserialize_with = "display_text")]
    pub relevance_score: String,
    #[serde(deserialize_with = "detail_map")]
    pub technical_details: TechnicalDetails,
}

impl CaseRecord {
    /// Look up a technical detail rendered as display text.
    ///
    /// Strings are returned as-is, other scalars are stringified, objects and
    /// arrays yield `None`.
    pub fn detail_text(&self, key: &str) -> Option<String> {
        match self.technical_details.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// The `{ cases: [...] }` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseList {
    pub cases: Vec<CaseRecord>,
}

impl CaseList {
    pub fn single(record: CaseRecord) -> Self {
        Self {
            cases: vec![record],
        }
    }
}

/// The reply handed back to search callers.
///
/// `Parsed` carries the model's JSON untouched; `Synthesized` is built
/// locally when the model reply could not be used directly. Both serialize
/// to the bare payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CaseReply {
    Parsed(Value),
    Synthesized(CaseList),
}

impl CaseReply {
    /// Number of entries under `cases`, or zero when the parsed payload has
    /// no such array.
    pub fn case_count(&self) -> usize {
        match self {
            CaseReply::Parsed(v) => v
                .get("cases")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            CaseReply::Synthesized(list) => list.cases.len(),
        }
    }
}

/// Build a detail map from literal key/value pairs.
pub fn details(pairs: &[(&str, &str)]) -> TechnicalDetails {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
        .collect()
}

fn display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

fn detail_map<'de, D>(deserializer: D) -> Result<TechnicalDetails, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(TechnicalDetails::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_partial_record_with_defaults() {
        let record: CaseRecord = serde_json::from_value(json!({
            "projectName": "RealT",
            "relevanceScore": "9"
        }))
        .unwrap();
        assert_eq!(record.project_name, "RealT");
        assert_eq!(record.relevance_score, "9");
        assert!(record.outcome.is_empty());
        assert!(record.technical_details.is_empty());
    }

    #[test]
    fn numeric_relevance_score_becomes_text() {
        let record: CaseRecord =
            serde_json::from_value(json!({ "relevanceScore": 8 })).unwrap();
        assert_eq!(record.relevance_score, "8");
    }

    #[test]
    fn null_and_scalar_text_fields_still_decode() {
        let list: CaseList = serde_json::from_str(
            r#"{"cases":[{
                "projectName": "RealT",
                "sourceUrl": null,
                "scale": 1000000,
                "platform": true,
                "assetType": ["房地产"],
                "relevanceScore": [1],
                "technicalDetails": null
            }]}"#,
        )
        .unwrap();

        let record = &list.cases[0];
        assert_eq!(record.project_name, "RealT");
        assert_eq!(record.source_url, "");
        assert_eq!(record.scale, "1000000");
        assert_eq!(record.platform, "true");
        assert_eq!(record.asset_type, "");
        assert_eq!(record.relevance_score, "");
        assert!(record.technical_details.is_empty());
    }

    #[test]
    fn serializes_camel_case_keys() {
        let record = CaseRecord {
            project_name: "P".into(),
            source_url: "https://example.com".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["projectName"], "P");
        assert_eq!(value["sourceUrl"], "https://example.com");
        assert!(value["technicalDetails"].is_object());
    }

    #[test]
    fn detail_text_skips_structured_values() {
        let record: CaseRecord = serde_json::from_value(json!({
            "technicalDetails": {
                "tokenStandard": "ERC-20",
                "tokenizationProcess": { "step1": "评估" },
                "blockchainNetwork": ""
            }
        }))
        .unwrap();
        assert_eq!(record.detail_text("tokenStandard").as_deref(), Some("ERC-20"));
        assert_eq!(record.detail_text("tokenizationProcess"), None);
        assert_eq!(record.detail_text("blockchainNetwork"), None);
        assert_eq!(record.detail_text("missing"), None);
    }

    #[test]
    fn reply_serializes_without_wrapper() {
        let parsed = CaseReply::Parsed(json!({ "cases": [{ "projectName": "A" }] }));
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({ "cases": [{ "projectName": "A" }] })
        );
        assert_eq!(parsed.case_count(), 1);

        let synthesized = CaseReply::Synthesized(CaseList::single(CaseRecord::default()));
        let value = serde_json::to_value(&synthesized).unwrap();
        assert_eq!(value["cases"].as_array().unwrap().len(), 1);
        assert_eq!(synthesized.case_count(), 1);
    }
}
