//! Platform error types

use thiserror::Error;

/// Errors surfaced by the aggregation facade.
///
/// Nothing here is retried or recovered; failures propagate to the caller.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Invalid platform configuration: {0}")]
    Configuration(String),

    #[error("Connector error: {0}")]
    Connector(#[from] cloudops_core::ConnectorError),
}

pub type Result<T> = std::result::Result<T, PlatformError>;
