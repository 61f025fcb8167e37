//! Posture aggregation for the CloudOps platform
//!
//! This crate orchestrates the configured connectors into a single
//! point-in-time posture view and derives narrative recommendations and
//! monthly cost roll-ups from it.
//!
//! # Example
//!
//! ```ignore
//! use cloudops_platform::CloudOpsPlatform;
//! use std::sync::Arc;
//!
//! let platform = CloudOpsPlatform::new(vec![
//!     Arc::new(cloudops_connector_aws::AwsConnector::new()),
//!     Arc::new(cloudops_connector_gcp::GcpConnector::new()),
//! ])?;
//!
//! let snapshot = platform.collect_posture_snapshot().await?;
//! let costs = platform.summarize_costs(Some(&snapshot)).await?;
//! println!("total: {}", costs.total);
//! ```

pub mod advisor;
pub mod error;
pub mod platform;
pub mod snapshot;

// Re-exports
pub use advisor::{
    Advisor, ERROR_RATE_THRESHOLD, SPEND_REVIEW_THRESHOLD, UNDERUTILIZED_THRESHOLD,
};
pub use error::{PlatformError, Result};
pub use platform::CloudOpsPlatform;
pub use snapshot::{CostSummary, PostureSnapshot};
