//! GCP connector implementation

use async_trait::async_trait;
use cloudops_core::{CloudConnector, CloudResource, OperationalMetrics, Result, keys};

/// Connector reporting a fixed GCP estate
pub struct GcpConnector {
    resources: Vec<CloudResource>,
}

impl GcpConnector {
    /// Provider tag under which this connector is aggregated
    pub const PROVIDER: &'static str = "gcp";

    pub fn new() -> Self {
        Self {
            resources: vec![
                CloudResource::new(Self::PROVIDER, "ml-platform", "gke_cluster", 2.90, 0.58)
                    .with_tag("env", "prod")
                    .with_tag("tier", "data"),
                CloudResource::new(Self::PROVIDER, "event-stream", "pubsub_topic", 0.45, 0.21)
                    .with_tag("env", "dev")
                    .with_tag("tier", "integration"),
            ],
        }
    }
}

impl Default for GcpConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudConnector for GcpConnector {
    fn provider(&self) -> &str {
        Self::PROVIDER
    }

    async fn discover_resources(&self) -> Result<Vec<CloudResource>> {
        tracing::debug!("Discovered {} GCP resources", self.resources.len());
        Ok(self.resources.clone())
    }

    async fn collect_operational_metrics(&self) -> Result<OperationalMetrics> {
        let spend: f64 = self.resources.iter().map(|r| r.cost_per_month()).sum();
        Ok(OperationalMetrics::new()
            .with(keys::AVG_CPU_UTILIZATION, 0.39)
            .with(keys::ERROR_RATE, 0.001)
            .with(keys::SPEND_MONTH_TO_DATE, spend))
    }

    async fn describe_security_findings(&self) -> Result<Vec<String>> {
        Ok(vec![
            "Security Command Center: Public bucket detected in analytics-project".to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catalog_is_tagged_with_the_provider() {
        let connector = GcpConnector::new();
        let resources = connector.discover_resources().await.unwrap();
        assert_eq!(resources.len(), 2);
        assert!(resources.iter().all(|r| r.provider == GcpConnector::PROVIDER));
        assert!(resources.iter().all(|r| (0.0..=1.0).contains(&r.utilization)));
    }

    #[tokio::test]
    async fn spend_matches_catalog_monthly_costs() {
        let connector = GcpConnector::new();
        let metrics = connector.collect_operational_metrics().await.unwrap();
        assert_eq!(metrics.value(keys::SPEND_MONTH_TO_DATE), 2445.50);
    }
}
