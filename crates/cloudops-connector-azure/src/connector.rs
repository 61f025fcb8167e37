//! Azure connector implementation

use async_trait::async_trait;
use cloudops_core::{CloudConnector, CloudResource, OperationalMetrics, Result, keys};

/// Connector reporting a fixed Azure estate
pub struct AzureConnector {
    resources: Vec<CloudResource>,
}

impl AzureConnector {
    /// Provider tag under which this connector is aggregated
    pub const PROVIDER: &'static str = "azure";

    pub fn new() -> Self {
        Self {
            resources: vec![
                CloudResource::new(
                    Self::PROVIDER,
                    "customer-insights",
                    "synapse_workspace",
                    3.25,
                    0.63,
                )
                .with_tag("env", "prod")
                .with_tag("tier", "analytics"),
                CloudResource::new(
                    Self::PROVIDER,
                    "support-functions",
                    "app_service_plan",
                    1.05,
                    0.28,
                )
                .with_tag("env", "staging")
                .with_tag("tier", "web"),
            ],
        }
    }
}

impl Default for AzureConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudConnector for AzureConnector {
    fn provider(&self) -> &str {
        Self::PROVIDER
    }

    async fn discover_resources(&self) -> Result<Vec<CloudResource>> {
        tracing::debug!("Discovered {} Azure resources", self.resources.len());
        Ok(self.resources.clone())
    }

    async fn collect_operational_metrics(&self) -> Result<OperationalMetrics> {
        let spend: f64 = self.resources.iter().map(|r| r.cost_per_month()).sum();
        Ok(OperationalMetrics::new()
            .with(keys::AVG_CPU_UTILIZATION, 0.46)
            .with(keys::ERROR_RATE, 0.002)
            .with(keys::SPEND_MONTH_TO_DATE, spend))
    }

    async fn describe_security_findings(&self) -> Result<Vec<String>> {
        Ok(vec![
            "Defender for Cloud: Storage account missing immutability policy".to_string(),
        ])
    }
}
