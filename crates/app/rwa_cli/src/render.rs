//! Plain-text rendering of case lists.

use std::fmt::Write;

use rwa_core::models::{CaseList, CaseRecord};
use serde_json::Value;

use crate::Result;
use crate::client::CaseSource;

/// Technical detail keys shown as simple lines, in display order.
const DETAIL_LABELS: [(&str, &str); 9] = [
    ("tokenStandard", "代币标准"),
    ("blockchainNetwork", "区块链网络"),
    ("smartContractAddress", "智能合约地址"),
    ("liquidityMechanism", "流动性机制"),
    ("governanceModel", "治理模式"),
    ("regulatoryCompliance", "监管合规"),
    ("riskManagement", "风险管理"),
    ("iotIntegration", "IoT集成"),
    ("sustainabilityMetrics", "可持续性指标"),
];

/// Relevance band used to mark each case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    /// Scores of 8+ are high, 6-7 medium, anything else (or unparsable) low.
    pub fn from_score(score: &str) -> Self {
        match score.trim().parse::<f64>() {
            Ok(n) if n >= 8.0 => Relevance::High,
            Ok(n) if n >= 6.0 => Relevance::Medium,
            _ => Relevance::Low,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Relevance::High => "高",
            Relevance::Medium => "中",
            Relevance::Low => "低",
        }
    }
}

pub struct RenderOptions {
    pub show_code: bool,
}

pub fn render(list: &CaseList, source: CaseSource, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    if list.cases.is_empty() {
        writeln!(out, "未找到相关案例")?;
        return Ok(out);
    }

    writeln!(out, "相关RWA代币化案例 ({}个)", list.cases.len())?;
    if source == CaseSource::Fallback {
        writeln!(out, "(后端不可用，以下为内置示例案例)")?;
    }

    for (index, case) in list.cases.iter().enumerate() {
        writeln!(out)?;
        render_case(&mut out, index + 1, case, options)?;
    }
    Ok(out)
}

fn render_case(
    out: &mut String,
    number: usize,
    case: &CaseRecord,
    options: &RenderOptions,
) -> Result<()> {
    write!(out, "[{number}] {}", case.project_name)?;
    if !case.relevance_score.is_empty() {
        let band = Relevance::from_score(&case.relevance_score);
        write!(out, "  相关度: {}/10 ({})", case.relevance_score, band.label())?;
    }
    writeln!(out)?;

    let fields = [
        ("资产类型", &case.asset_type),
        ("代币化资产", &case.tokenized_asset),
        ("项目规模", &case.scale),
        ("实施时间", &case.implementation_date),
        ("技术平台", &case.platform),
        ("项目成果", &case.outcome),
        ("信息来源", &case.source_url),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            writeln!(out, "    {label}: {value}")?;
        }
    }

    if case.technical_details.is_empty() {
        return Ok(());
    }

    writeln!(out, "    技术实现详情:")?;
    for (key, label) in DETAIL_LABELS {
        if let Some(text) = case.detail_text(key) {
            writeln!(out, "      {label}: {text}")?;
        }
    }

    match case.technical_details.get("tokenizationProcess") {
        Some(Value::Object(steps)) => {
            writeln!(out, "      代币化流程:")?;
            for (step, text) in steps {
                let text = text.as_str().map_or_else(|| text.to_string(), str::to_string);
                writeln!(out, "        {step}: {text}")?;
            }
        }
        Some(_) => {
            if let Some(text) = case.detail_text("tokenizationProcess") {
                writeln!(out, "      代币化流程: {text}")?;
            }
        }
        None => {}
    }

    if options.show_code
        && let Some(code) = case.detail_text("codeExample")
    {
        writeln!(out, "      智能合约代码示例:")?;
        for line in code.lines() {
            writeln!(out, "        {line}")?;
        }
    }
    Ok(())
}
