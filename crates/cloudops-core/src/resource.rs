//! Canonical cloud resource record and cost formula

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Billing hours in a month used for cost projections
pub const HOURS_PER_MONTH: f64 = 730.0;

/// Metadata describing a managed cloud resource.
///
/// Connectors construct these once at discovery time and never mutate them
/// afterwards. `name` is unique within a provider; `utilization` stays in
/// [0, 1] and the connector is responsible for that bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudResource {
    /// Provider tag (e.g. "aws")
    pub provider: String,

    /// Resource name, unique within a provider
    pub name: String,

    /// Free-form classification (e.g. "ecs_service", "gke_cluster")
    pub resource_type: String,

    /// On-demand cost in USD per hour, non-negative
    pub cost_per_hour: f64,

    /// Fraction of provisioned capacity actively used, in [0, 1]
    pub utilization: f64,

    /// Provider tags attached to the resource
    pub tags: BTreeMap<String, String>,
}

impl CloudResource {
    pub fn new(
        provider: impl Into<String>,
        name: impl Into<String>,
        resource_type: impl Into<String>,
        cost_per_hour: f64,
        utilization: f64,
    ) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            resource_type: resource_type.into(),
            cost_per_hour,
            utilization,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Estimated monthly cost using the default 730-hour month
    pub fn cost_per_month(&self) -> f64 {
        self.cost_per_month_for(HOURS_PER_MONTH)
    }

    /// Estimated monthly cost using a caller-supplied hours multiplier
    pub fn cost_per_month_for(&self, hours: f64) -> f64 {
        round_to_cents(self.cost_per_hour * hours)
    }
}

/// Round a dollar amount to whole cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_cost_uses_default_hours() {
        let resource = CloudResource::new("aws", "orders-api", "ecs_service", 1.75, 0.42);
        assert_eq!(resource.cost_per_month(), 1277.50);
    }

    #[test]
    fn monthly_cost_accepts_hours_override() {
        let resource = CloudResource::new("aws", "orders-api", "ecs_service", 1.75, 0.42);
        assert_eq!(resource.cost_per_month_for(100.0), 175.00);
    }

    #[test]
    fn tags_accumulate_through_builder() {
        let resource = CloudResource::new("gcp", "ml-platform", "gke_cluster", 2.90, 0.58)
            .with_tag("env", "prod")
            .with_tag("tier", "data");
        assert_eq!(resource.tags.get("env"), Some(&"prod".to_string()));
        assert_eq!(resource.tags.len(), 2);
    }

    #[test]
    fn rounding_lands_on_cents() {
        assert_eq!(round_to_cents(10.006), 10.01);
        assert_eq!(round_to_cents(10.004), 10.0);
        assert_eq!(round_to_cents(2993.0000000000005), 2993.0);
    }
}
