//! Prompt rendering for the case search.

use crate::models::EnterpriseQuery;

/// User turn sent alongside the rendered system prompt.
pub const SEARCH_USER_MESSAGE: &str = "请搜索";

const UNSPECIFIED: &str = "未指定";
const NOT_PROVIDED: &str = "未提供";

/// Render the system prompt asking for at least three cases as JSON.
pub fn render(query: &EnterpriseQuery) -> String {
    let company_name = &query.company_name;
    let industry = query.industry_name().unwrap_or(UNSPECIFIED);
    let company_type = query.company_type_name().unwrap_or(UNSPECIFIED);
    let description = query.description_text().unwrap_or(NOT_PROVIDED);

    format!(
        r#"请帮我搜索并分析与以下企业信息相关的RWA（真实世界资产）代币化案例：

企业信息：
- 企业名称：{company_name}
- 所属行业：{industry}
- 企业类型：{company_type}
- 企业描述：{description}

请基于真实的区块链和金融科技项目，提供详细的RWA代币化案例分析。重点关注以下几个方面：

1. 与该企业同行业或类似业务的RWA代币化案例
2. 每个案例需要包含详细的技术实现信息：
   - 项目名称和背景
   - 资产类型和代币化的具体资产
   - 项目规模和融资情况
   - 实施时间和发展阶段
   - 使用的区块链技术平台
   - 智能合约架构和代币标准
   - 详细的代币化流程（每一步的具体实施方法）
   - 流动性提供机制
   - 治理和合规框架
   - 风险管理策略
   - 项目成果和市场表现
   - 可验证的信息来源链接

特别要求：
- 代币化过程要详细展开，说明每一步的具体实施方法
- 包含真实的项目案例，避免虚构信息
- 提供技术架构和智能合约的具体实现细节
- 如果涉及新能源行业，请包含相关的绿色金融和碳信用代币化案例

请以JSON格式返回，包含至少3个相关案例：

{{
  "cases": [
    {{
      "projectName": "项目名称",
      "assetType": "资产类型",
      "tokenizedAsset": "具体代币化资产",
      "scale": "项目规模",
      "implementationDate": "实施时间",
      "platform": "技术平台",
      "outcome": "项目成果",
      "sourceUrl": "信息来源链接",
      "relevanceScore": "相关度评分(1-10)",
      "technicalDetails": {{
        "tokenStandard": "代币标准",
        "blockchainNetwork": "区块链网络",
        "smartContractAddress": "智能合约地址(如有)",
        "tokenizationProcess": "详细的代币化流程，包含每一步的具体实施方法",
        "liquidityMechanism": "流动性机制",
        "governanceModel": "治理模式",
        "riskManagement": "风险管理",
        "regulatoryCompliance": "监管合规",
        "codeExample": "智能合约代码示例"
      }}
    }}
  ]
}}"#
    )
}
