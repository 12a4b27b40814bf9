//! Normalization of free-text model replies into a case payload.
//!
//! The model is asked for JSON but nothing guarantees it. The reply is
//! scanned for an object span (first `{` to last `}`) and parsed strictly.
//! When that fails a single synthetic record carrying the raw text is
//! returned instead, so callers always receive `{ cases: [...] }`.

use tracing::{debug, warn};

use crate::models::case::details;
use crate::models::{CaseList, CaseRecord, CaseReply};

/// Characters of raw text kept when the embedded JSON is malformed.
pub const OUTCOME_EXCERPT_CHARS: usize = 500;

const UNKNOWN: &str = "未知";

/// Turn a raw model reply into a case payload. Never fails.
pub fn normalize(raw: &str) -> CaseReply {
    let Some(span) = json_span(raw) else {
        debug!(len = raw.len(), "no JSON object in model reply, wrapping text");
        return CaseReply::Synthesized(CaseList::single(text_record(raw)));
    };

    match serde_json::from_str(span) {
        Ok(value) => CaseReply::Parsed(value),
        Err(e) => {
            warn!(error = %e, "model reply JSON did not parse, returning excerpt");
            CaseReply::Synthesized(CaseList::single(parse_failure_record(raw)))
        }
    }
}

/// Slice from the first `{` through the last `}`, if they are in order.
fn json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

fn excerpt(raw: &str) -> String {
    let mut out: String = raw.chars().take(OUTCOME_EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

fn parse_failure_record(raw: &str) -> CaseRecord {
    CaseRecord {
        project_name: "Claude API 响应解析失败".into(),
        asset_type: "解析错误".into(),
        tokenized_asset: "请查看原始响应".into(),
        scale: UNKNOWN.into(),
        implementation_date: UNKNOWN.into(),
        platform: UNKNOWN.into(),
        outcome: excerpt(raw),
        source_url: String::new(),
        relevance_score: "5".into(),
        technical_details: details(&[
            ("tokenStandard", "解析失败"),
            ("tokenizationProcess", "无法解析详细流程"),
            ("liquidityMechanism", UNKNOWN),
            ("governanceModel", UNKNOWN),
            ("riskManagement", UNKNOWN),
            ("regulatoryCompliance", UNKNOWN),
        ]),
    }
}

fn text_record(raw: &str) -> CaseRecord {
    const SEE_FULL: &str = "请参考完整响应";
    CaseRecord {
        project_name: "Claude API 文本响应".into(),
        asset_type: "文本内容".into(),
        tokenized_asset: "请查看完整响应".into(),
        scale: UNKNOWN.into(),
        implementation_date: UNKNOWN.into(),
        platform: "Claude AI".into(),
        outcome: raw.to_string(),
        source_url: String::new(),
        relevance_score: "7".into(),
        technical_details: details(&[
            ("tokenStandard", "文本响应"),
            ("tokenizationProcess", "详细信息请查看项目成果部分"),
            ("liquidityMechanism", SEE_FULL),
            ("governanceModel", SEE_FULL),
            ("riskManagement", SEE_FULL),
            ("regulatoryCompliance", SEE_FULL),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn synthesized(reply: CaseReply) -> CaseList {
        match reply {
            CaseReply::Synthesized(list) => list,
            CaseReply::Parsed(v) => panic!("expected synthesized reply, got {v}"),
        }
    }

    #[test]
    fn valid_json_is_returned_untouched() {
        let raw = r#"以下是案例：
{"cases":[{"projectName":"RealT","relevanceScore":"9","extra":{"nested":true}}]}
希望有帮助。"#;
        assert_eq!(
            normalize(raw),
            CaseReply::Parsed(json!({
                "cases": [{ "projectName": "RealT", "relevanceScore": "9", "extra": { "nested": true } }]
            }))
        );
    }

    #[test]
    fn parsed_value_is_not_schema_checked() {
        assert_eq!(
            normalize(r#"{"unexpected": 1}"#),
            CaseReply::Parsed(json!({ "unexpected": 1 }))
        );
    }

    #[test]
    fn malformed_json_yields_truncated_excerpt() {
        let raw = format!("{{ not json {} }}", "字".repeat(600));
        let list = synthesized(normalize(&raw));
        assert_eq!(list.cases.len(), 1);

        let record = &list.cases[0];
        let expected: String = raw.chars().take(500).collect::<String>() + "...";
        assert_eq!(record.outcome, expected);
        assert_eq!(record.outcome.chars().count(), 503);
        assert_eq!(record.project_name, "Claude API 响应解析失败");
        assert_eq!(record.relevance_score, "5");
        assert_eq!(record.detail_text("tokenStandard").as_deref(), Some("解析失败"));
    }

    #[test]
    fn short_malformed_json_still_gets_marker() {
        let list = synthesized(normalize("{oops}"));
        assert_eq!(list.cases[0].outcome, "{oops}...");
    }

    #[test]
    fn text_without_braces_is_kept_verbatim() {
        let raw = "抱歉，我无法提供实时数据。\n但可以介绍一些案例。";
        let list = synthesized(normalize(raw));
        assert_eq!(list.cases.len(), 1);

        let record = &list.cases[0];
        assert_eq!(record.outcome, raw);
        assert_eq!(record.project_name, "Claude API 文本响应");
        assert_eq!(record.platform, "Claude AI");
        assert_eq!(record.relevance_score, "7");
    }

    #[test]
    fn lone_brace_counts_as_no_span() {
        let open_only = "only an opening { here";
        assert_eq!(synthesized(normalize(open_only)).cases[0].outcome, open_only);

        let close_only = "only a closing } here";
        assert_eq!(synthesized(normalize(close_only)).cases[0].outcome, close_only);
    }

    #[test]
    fn reversed_braces_count_as_no_span() {
        let raw = "} backwards {";
        let record = &synthesized(normalize(raw)).cases[0];
        assert_eq!(record.outcome, raw);
        assert_eq!(record.relevance_score, "7");
    }

    #[test]
    fn long_text_without_json_is_not_truncated() {
        let raw = "a".repeat(2_000);
        assert_eq!(synthesized(normalize(&raw)).cases[0].outcome, raw);
    }
}
