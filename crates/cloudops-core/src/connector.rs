//! Connector capability shared by all cloud providers

use crate::error::Result;
use crate::metrics::OperationalMetrics;
use crate::resource::CloudResource;
use async_trait::async_trait;

/// Uniform discovery and telemetry interface.
///
/// All cloud connectors (AWS, Azure, GCP, ...) implement this trait so the
/// platform can aggregate them without knowing any concrete type. None of
/// the operations mutate provider infrastructure.
#[async_trait]
pub trait CloudConnector: Send + Sync {
    /// Stable provider tag used as the aggregation key (e.g. "aws")
    fn provider(&self) -> &str;

    /// The complete catalog of resources currently under management.
    ///
    /// Ordering is unspecified; the platform imposes its own sort.
    async fn discover_resources(&self) -> Result<Vec<CloudResource>>;

    /// Lightweight operational signals used for heuristics.
    ///
    /// No fixed key set is mandated; consumers treat absent keys as zero.
    async fn collect_operational_metrics(&self) -> Result<OperationalMetrics>;

    /// Notable security or compliance observations.
    ///
    /// An empty list is valid and means "nothing notable".
    async fn describe_security_findings(&self) -> Result<Vec<String>>;
}
