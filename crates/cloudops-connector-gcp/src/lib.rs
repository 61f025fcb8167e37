//! GCP connector for the CloudOps platform
//!
//! This crate implements the CloudConnector trait for Google Cloud with a
//! compiled-in demo catalog. No GCP API is contacted.

pub mod connector;

pub use connector::GcpConnector;
