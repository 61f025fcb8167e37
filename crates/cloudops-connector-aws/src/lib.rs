//! AWS connector for the CloudOps platform
//!
//! This crate implements the CloudConnector trait for AWS with a
//! compiled-in demo catalog. No AWS API is contacted; discovery, metrics,
//! and findings are all served from static data.
//!
//! # Example
//!
//! ```ignore
//! use cloudops_connector_aws::AwsConnector;
//! use cloudops_core::CloudConnector;
//!
//! let connector = AwsConnector::new();
//! let resources = connector.discover_resources().await?;
//! assert!(resources.iter().all(|r| r.provider == "aws"));
//! ```

pub mod connector;

pub use connector::AwsConnector;
