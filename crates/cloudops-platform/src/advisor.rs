//! Heuristic advisor generating narrative recommendations
//!
//! Stand-in for the AI assistant described in the blueprint: a fixed set
//! of threshold heuristics over the merged telemetry.

use cloudops_core::{CloudResource, OperationalMetrics, format_usd, keys};
use std::collections::BTreeMap;

/// Utilization fraction below which a resource counts as underutilized
pub const UNDERUTILIZED_THRESHOLD: f64 = 0.35;

/// Month-to-date spend in USD above which a cost review is recommended
pub const SPEND_REVIEW_THRESHOLD: f64 = 4000.0;

/// Error rate above which an investigation is recommended
pub const ERROR_RATE_THRESHOLD: f64 = 0.003;

/// Converts raw telemetry into recommendation strings.
///
/// `recommend` is a pure function of its inputs; identical telemetry
/// always yields identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Advisor;

impl Advisor {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(
        &self,
        resources: &[CloudResource],
        metrics_by_provider: &BTreeMap<String, OperationalMetrics>,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let mut underutilized: Vec<&str> = resources
            .iter()
            .filter(|r| r.utilization < UNDERUTILIZED_THRESHOLD)
            .map(|r| r.name.as_str())
            .collect();
        if !underutilized.is_empty() {
            underutilized.sort_unstable();
            recommendations.push(format!(
                "Rightsize or schedule downtime for low-utilization services: {}.",
                underutilized.join(", ")
            ));
        }

        for (provider, metrics) in metrics_by_provider {
            let spend = metrics.value(keys::SPEND_MONTH_TO_DATE);
            if spend > SPEND_REVIEW_THRESHOLD {
                recommendations.push(format!(
                    "Review committed-use discounts for {} — projected monthly spend is {}.",
                    provider.to_uppercase(),
                    format_usd(spend, 0)
                ));
            }

            let error_rate = metrics.value(keys::ERROR_RATE);
            if error_rate > ERROR_RATE_THRESHOLD {
                recommendations.push(format!(
                    "Investigate elevated error rate ({:.2}%) detected in {} workloads.",
                    error_rate * 100.0,
                    provider.to_uppercase()
                ));
            }
        }

        if recommendations.is_empty() {
            recommendations
                .push("No notable optimizations detected during this snapshot.".to_string());
        }

        recommendations
    }
}
