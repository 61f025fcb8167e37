//! CloudOps core model
//!
//! This crate provides the resource model and connector abstraction for the
//! CloudOps platform, enabling posture aggregation across multiple cloud
//! providers through a uniform interface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  CloudOps CLI                    │
//! │            (posture / costs / etl)               │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               cloudops-platform                  │
//! │      fan-out, merge, advisor, cost roll-up       │
//! └───────┬─────────────────┬──────────────┬────────┘
//!         │                 │              │
//! ┌───────▼──────┐ ┌────────▼─────┐ ┌──────▼───────┐
//! │     aws      │ │    azure     │ │     gcp      │
//! │  connector   │ │  connector   │ │  connector   │
//! └──────────────┘ └──────────────┘ └──────────────┘
//! ```
//!
//! Each connector implements [`CloudConnector`] and reports a resource
//! catalog, an operational metrics snapshot, and a list of security
//! findings for exactly one provider.

pub mod connector;
pub mod error;
pub mod metrics;
pub mod money;
pub mod resource;
pub mod retry;

// Re-exports
pub use connector::CloudConnector;
pub use error::{ConnectorError, Result};
pub use metrics::{OperationalMetrics, keys};
pub use money::format_usd;
pub use resource::{CloudResource, HOURS_PER_MONTH, round_to_cents};
pub use retry::{RetryConfig, run_with_retries};
