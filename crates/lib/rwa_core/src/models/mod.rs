//! Domain model types.

pub mod case;
pub mod enterprise;

pub use case::{CaseList, CaseRecord, CaseReply, TechnicalDetails};
pub use enterprise::{COMPANY_TYPES, EnterpriseQuery, INDUSTRIES, QueryError};
