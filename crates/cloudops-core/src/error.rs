//! Connector error types

use thiserror::Error;

/// Failures a connector can surface while talking to a provider API.
///
/// The demo connectors are static and never fail; a connector backed by a
/// live provider API reports its failure mode through one of these
/// variants so the platform can distinguish them.
#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited by provider API: {0}")]
    RateLimit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConnectorError>;
