//! Posture snapshot and cost roll-up types

use chrono::{DateTime, Utc};
use cloudops_core::{CloudResource, OperationalMetrics, round_to_cents};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time aggregation across all configured connectors.
///
/// Immutable once constructed; every collection pass produces a fresh
/// snapshot with no structures shared with a previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureSnapshot {
    /// Merged resource list, sorted by (provider, name)
    pub resources: Vec<CloudResource>,

    /// Operational metrics keyed by provider tag
    pub metrics: BTreeMap<String, OperationalMetrics>,

    /// Security findings keyed by provider tag
    pub security_findings: BTreeMap<String, Vec<String>>,

    /// Narrative recommendations derived from the merged view
    pub recommendations: Vec<String>,

    /// When the snapshot was collected
    pub collected_at: DateTime<Utc>,
}

/// Monthly cost roll-up across a snapshot's resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Monthly cost per provider tag, rounded to cents
    pub by_provider: BTreeMap<String, f64>,

    /// Grand total, the rounded sum of the rounded per-provider values
    pub total: f64,
}

impl CostSummary {
    /// Roll up monthly costs from a merged resource list.
    ///
    /// Each provider accumulator is rounded to cents before the grand
    /// total is taken, matching the reference report figures.
    pub fn from_resources(resources: &[CloudResource]) -> Self {
        let mut accumulators: BTreeMap<String, f64> = BTreeMap::new();
        for resource in resources {
            *accumulators.entry(resource.provider.clone()).or_insert(0.0) +=
                resource.cost_per_month();
        }

        let by_provider: BTreeMap<String, f64> = accumulators
            .into_iter()
            .map(|(provider, cost)| (provider, round_to_cents(cost)))
            .collect();
        let total = round_to_cents(by_provider.values().sum::<f64>());

        Self { by_provider, total }
    }

    /// Monthly cost for one provider, zero when the provider is absent
    pub fn provider_cost(&self, provider: &str) -> f64 {
        self.by_provider.get(provider).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_per_provider() {
        let resources = vec![
            CloudResource::new("aws", "a", "ecs_service", 1.0, 0.5),
            CloudResource::new("aws", "b", "ecs_service", 2.0, 0.5),
            CloudResource::new("gcp", "c", "gke_cluster", 0.5, 0.5),
        ];

        let summary = CostSummary::from_resources(&resources);
        assert_eq!(summary.provider_cost("aws"), 2190.0);
        assert_eq!(summary.provider_cost("gcp"), 365.0);
        assert_eq!(summary.total, 2555.0);
        assert_eq!(summary.provider_cost("azure"), 0.0);
    }

    #[test]
    fn total_equals_sum_of_provider_values() {
        let resources = vec![
            CloudResource::new("aws", "a", "ecs_service", 1.33, 0.5),
            CloudResource::new("gcp", "b", "gke_cluster", 2.77, 0.5),
        ];

        let summary = CostSummary::from_resources(&resources);
        let sum: f64 = summary.by_provider.values().sum();
        assert!((summary.total - sum).abs() < 0.01);
    }

    #[test]
    fn empty_resource_list_rolls_up_to_zero() {
        let summary = CostSummary::from_resources(&[]);
        assert!(summary.by_provider.is_empty());
        assert_eq!(summary.total, 0.0);
    }
}
