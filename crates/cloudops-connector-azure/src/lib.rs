//! Azure connector for the CloudOps platform
//!
//! This crate implements the CloudConnector trait for Azure with a
//! compiled-in demo catalog. No Azure API is contacted.

pub mod connector;

pub use connector::AzureConnector;
