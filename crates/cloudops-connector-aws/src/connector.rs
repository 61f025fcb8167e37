//! AWS connector implementation

use async_trait::async_trait;
use cloudops_core::{CloudConnector, CloudResource, OperationalMetrics, Result, keys};

/// Connector reporting a fixed AWS estate
pub struct AwsConnector {
    resources: Vec<CloudResource>,
}

impl AwsConnector {
    /// Provider tag under which this connector is aggregated
    pub const PROVIDER: &'static str = "aws";

    pub fn new() -> Self {
        Self {
            resources: vec![
                CloudResource::new(Self::PROVIDER, "orders-api", "ecs_service", 1.75, 0.42)
                    .with_tag("env", "prod")
                    .with_tag("tier", "web"),
                CloudResource::new(
                    Self::PROVIDER,
                    "finance-warehouse",
                    "redshift_cluster",
                    4.10,
                    0.71,
                )
                .with_tag("env", "prod")
                .with_tag("owner", "finops"),
            ],
        }
    }
}

impl Default for AwsConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudConnector for AwsConnector {
    fn provider(&self) -> &str {
        Self::PROVIDER
    }

    async fn discover_resources(&self) -> Result<Vec<CloudResource>> {
        tracing::debug!("Discovered {} AWS resources", self.resources.len());
        Ok(self.resources.clone())
    }

    async fn collect_operational_metrics(&self) -> Result<OperationalMetrics> {
        let spend: f64 = self.resources.iter().map(|r| r.cost_per_month()).sum();
        Ok(OperationalMetrics::new()
            .with(keys::AVG_CPU_UTILIZATION, 0.54)
            .with(keys::ERROR_RATE, 0.004)
            .with(keys::SPEND_MONTH_TO_DATE, spend))
    }

    async fn describe_security_findings(&self) -> Result<Vec<String>> {
        Ok(vec![
            "SecurityHub: IAM access key older than 90 days for analytics-bot".to_string(),
            "GuardDuty: Reconnaissance activity blocked in ap-southeast-1".to_string(),
        ])
    }
}
