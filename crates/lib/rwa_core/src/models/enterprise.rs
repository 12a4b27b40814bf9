//! Enterprise description submitted by the client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Industries offered by the client form. Free text is also accepted.
pub const INDUSTRIES: [&str; 13] = [
    "房地产",
    "制造业",
    "农业",
    "新能源",
    "能源",
    "金融服务",
    "医疗健康",
    "教育",
    "零售",
    "物流运输",
    "艺术收藏",
    "基础设施",
    "其他",
];

/// Company types offered by the client form.
pub const COMPANY_TYPES: [&str; 7] = [
    "上市公司",
    "私人企业",
    "国有企业",
    "外资企业",
    "合资企业",
    "初创公司",
    "非营利组织",
];

/// Rejections raised before any upstream call is attempted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("请输入企业名称")]
    MissingCompanyName,
}

/// Enterprise metadata for a case search.
///
/// Blank optional fields are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseQuery {
    #[serde(default)]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnterpriseQuery {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_company_type(mut self, company_type: impl Into<String>) -> Self {
        self.company_type = Some(company_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Ensure the company name is present and not whitespace.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.company_name.trim().is_empty() {
            return Err(QueryError::MissingCompanyName);
        }
        Ok(())
    }

    pub fn industry_name(&self) -> Option<&str> {
        non_blank(self.industry.as_deref())
    }

    pub fn company_type_name(&self) -> Option<&str> {
        non_blank(self.company_type.as_deref())
    }

    pub fn description_text(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
