use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Fmt::{:?}: {}", .0, .0)]
    Fmt(#[from] std::fmt::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("{}", .0)]
    Query(#[from] rwa_core::models::QueryError),

    #[error("Fixture::{}", .0)]
    Fixture(#[from] rwa_core::fixtures::FixtureError),

    #[error("Backend::{}", .0)]
    Backend(#[from] crate::client::BackendError),

    #[error("Json::{}", .0)]
    Json(#[from] serde_json::Error),
}
