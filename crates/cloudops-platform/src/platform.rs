//! Orchestration facade aggregating connectors into posture snapshots

use crate::advisor::Advisor;
use crate::error::{PlatformError, Result};
use crate::snapshot::{CostSummary, PostureSnapshot};
use chrono::Utc;
use cloudops_core::{CloudConnector, CloudResource, ConnectorError, OperationalMetrics};
use futures_util::future::try_join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Aggregates every configured connector into one posture view.
///
/// Holds connectors behind the [`CloudConnector`] trait only; no concrete
/// connector type is known here.
pub struct CloudOpsPlatform {
    connectors: Vec<Arc<dyn CloudConnector>>,
    advisor: Advisor,
}

impl CloudOpsPlatform {
    /// Build a platform over the given connectors.
    ///
    /// A platform must aggregate at least one source; an empty connector
    /// list is a configuration error.
    pub fn new(connectors: Vec<Arc<dyn CloudConnector>>) -> Result<Self> {
        if connectors.is_empty() {
            return Err(PlatformError::Configuration(
                "at least one connector required".to_string(),
            ));
        }
        Ok(Self {
            connectors,
            advisor: Advisor::new(),
        })
    }

    pub fn with_advisor(mut self, advisor: Advisor) -> Self {
        self.advisor = advisor;
        self
    }

    /// Collect resources, metrics, and findings from every connector and
    /// derive recommendations over the merged view.
    ///
    /// Connectors are queried concurrently (the calls are read-only and
    /// independent) and merged in registration order, so the resulting
    /// snapshot is deterministic. Metrics use last-write-wins when two
    /// connectors share a provider tag; findings concatenate.
    pub async fn collect_posture_snapshot(&self) -> Result<PostureSnapshot> {
        let collected = try_join_all(self.connectors.iter().map(|connector| {
            let connector = Arc::clone(connector);
            async move {
                let resources = connector.discover_resources().await?;
                let metrics = connector.collect_operational_metrics().await?;
                let findings = connector.describe_security_findings().await?;
                tracing::debug!(
                    "Collected {} resources and {} findings from {}",
                    resources.len(),
                    findings.len(),
                    connector.provider()
                );
                Ok::<_, ConnectorError>((
                    connector.provider().to_string(),
                    resources,
                    metrics,
                    findings,
                ))
            }
        }))
        .await?;

        let mut resources: Vec<CloudResource> = Vec::new();
        let mut metrics: BTreeMap<String, OperationalMetrics> = BTreeMap::new();
        let mut security_findings: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (provider, provider_resources, provider_metrics, findings) in collected {
            resources.extend(provider_resources);
            metrics.insert(provider.clone(), provider_metrics);
            security_findings
                .entry(provider)
                .or_default()
                .extend(findings);
        }

        resources.sort_by(|a, b| {
            (a.provider.as_str(), a.name.as_str()).cmp(&(b.provider.as_str(), b.name.as_str()))
        });

        let recommendations = self.advisor.recommend(&resources, &metrics);

        Ok(PostureSnapshot {
            resources,
            metrics,
            security_findings,
            recommendations,
            collected_at: Utc::now(),
        })
    }

    /// Roll up monthly costs per provider, collecting a fresh snapshot
    /// when none is supplied.
    pub async fn summarize_costs(&self, snapshot: Option<&PostureSnapshot>) -> Result<CostSummary> {
        let collected;
        let snapshot = match snapshot {
            Some(snapshot) => snapshot,
            None => {
                collected = self.collect_posture_snapshot().await?;
                &collected
            }
        };
        Ok(CostSummary::from_resources(&snapshot.resources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cloudops_core::keys;

    struct StaticConnector {
        provider: &'static str,
        resources: Vec<CloudResource>,
        findings: Vec<String>,
    }

    impl StaticConnector {
        fn new(provider: &'static str, resources: Vec<CloudResource>) -> Self {
            Self {
                provider,
                resources,
                findings: Vec::new(),
            }
        }

        fn with_finding(mut self, finding: &str) -> Self {
            self.findings.push(finding.to_string());
            self
        }
    }

    #[async_trait]
    impl CloudConnector for StaticConnector {
        fn provider(&self) -> &str {
            self.provider
        }

        async fn discover_resources(&self) -> cloudops_core::Result<Vec<CloudResource>> {
            Ok(self.resources.clone())
        }

        async fn collect_operational_metrics(&self) -> cloudops_core::Result<OperationalMetrics> {
            Ok(OperationalMetrics::new().with(keys::ERROR_RATE, 0.001))
        }

        async fn describe_security_findings(&self) -> cloudops_core::Result<Vec<String>> {
            Ok(self.findings.clone())
        }
    }

    #[test]
    fn empty_connector_list_is_rejected() {
        let result = CloudOpsPlatform::new(Vec::new());
        assert!(matches!(
            result,
            Err(PlatformError::Configuration(message)) if message.contains("at least one")
        ));
    }

    #[tokio::test]
    async fn resources_merge_sorted_by_provider_and_name() {
        let platform = CloudOpsPlatform::new(vec![
            Arc::new(StaticConnector::new(
                "zeta",
                vec![
                    CloudResource::new("zeta", "b", "vm", 0.1, 0.5),
                    CloudResource::new("zeta", "a", "vm", 0.1, 0.5),
                ],
            )) as Arc<dyn CloudConnector>,
            Arc::new(StaticConnector::new(
                "alpha",
                vec![CloudResource::new("alpha", "z", "vm", 0.1, 0.5)],
            )),
        ])
        .unwrap();

        let snapshot = platform.collect_posture_snapshot().await.unwrap();
        let order: Vec<(&str, &str)> = snapshot
            .resources
            .iter()
            .map(|r| (r.provider.as_str(), r.name.as_str()))
            .collect();
        assert_eq!(order, vec![("alpha", "z"), ("zeta", "a"), ("zeta", "b")]);
    }

    #[tokio::test]
    async fn shared_provider_tags_concatenate_findings() {
        let platform = CloudOpsPlatform::new(vec![
            Arc::new(
                StaticConnector::new("aws", vec![CloudResource::new("aws", "a", "vm", 0.1, 0.5)])
                    .with_finding("first"),
            ) as Arc<dyn CloudConnector>,
            Arc::new(StaticConnector::new("aws", Vec::new()).with_finding("second")),
        ])
        .unwrap();

        let snapshot = platform.collect_posture_snapshot().await.unwrap();
        assert_eq!(
            snapshot.security_findings.get("aws"),
            Some(&vec!["first".to_string(), "second".to_string()])
        );
        // Metrics from the later registration win.
        assert_eq!(snapshot.metrics.len(), 1);
    }

    #[tokio::test]
    async fn cost_summary_collects_when_no_snapshot_is_given() {
        let platform = CloudOpsPlatform::new(vec![Arc::new(StaticConnector::new(
            "aws",
            vec![CloudResource::new("aws", "a", "vm", 1.0, 0.5)],
        )) as Arc<dyn CloudConnector>])
        .unwrap();

        let summary = platform.summarize_costs(None).await.unwrap();
        assert_eq!(summary.provider_cost("aws"), 730.0);
        assert_eq!(summary.total, 730.0);
    }
}
