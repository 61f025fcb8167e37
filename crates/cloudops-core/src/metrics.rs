//! Operational metric snapshots reported by connectors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known metric names consumed by the advisor heuristics.
///
/// The metric schema is open; connectors may report any keys, and absent
/// keys read as zero on the consumer side.
pub mod keys {
    pub const AVG_CPU_UTILIZATION: &str = "avg_cpu_utilization";
    pub const ERROR_RATE: &str = "error_rate";
    pub const SPEND_MONTH_TO_DATE: &str = "spend_month_to_date";
}

/// Snapshot of operational signals for one provider.
///
/// Recomputed on every collection call, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationalMetrics {
    values: BTreeMap<String, f64>,
}

impl OperationalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Metric value, treating absent names as zero
    pub fn value(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, f64)> for OperationalMetrics {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
