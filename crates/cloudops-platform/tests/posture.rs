//! End-to-end posture aggregation over the three demo connectors

use cloudops_connector_aws::AwsConnector;
use cloudops_connector_azure::AzureConnector;
use cloudops_connector_gcp::GcpConnector;
use cloudops_core::CloudConnector;
use cloudops_platform::CloudOpsPlatform;
use std::collections::BTreeSet;
use std::sync::Arc;

fn demo_platform() -> CloudOpsPlatform {
    CloudOpsPlatform::new(vec![
        Arc::new(AwsConnector::new()) as Arc<dyn CloudConnector>,
        Arc::new(AzureConnector::new()),
        Arc::new(GcpConnector::new()),
    ])
    .expect("three connectors configured")
}

#[tokio::test]
async fn snapshot_includes_all_resources() {
    let snapshot = demo_platform().collect_posture_snapshot().await.unwrap();

    assert_eq!(snapshot.resources.len(), 6);
    let providers: BTreeSet<&str> = snapshot
        .resources
        .iter()
        .map(|r| r.provider.as_str())
        .collect();
    assert_eq!(providers, ["aws", "azure", "gcp"].into_iter().collect());

    assert!(
        snapshot
            .resources
            .windows(2)
            .all(|pair| (&pair[0].provider, &pair[0].name) <= (&pair[1].provider, &pair[1].name))
    );
    assert_eq!(snapshot.metrics.len(), 3);
}

#[tokio::test]
async fn advisor_flags_the_underutilized_services() {
    let snapshot = demo_platform().collect_posture_snapshot().await.unwrap();

    let rightsize = snapshot
        .recommendations
        .iter()
        .find(|r| r.starts_with("Rightsize"))
        .expect("underutilization recommendation present");
    // event-stream (0.21) and support-functions (0.28), alphabetically.
    assert!(rightsize.contains("event-stream, support-functions"));
}

#[tokio::test]
async fn cost_summary_matches_snapshot() {
    let platform = demo_platform();
    let snapshot = platform.collect_posture_snapshot().await.unwrap();
    let totals = platform.summarize_costs(Some(&snapshot)).await.unwrap();

    assert_eq!(totals.provider_cost("aws"), 4270.50);
    assert_eq!(totals.provider_cost("azure"), 3139.00);
    assert_eq!(totals.provider_cost("gcp"), 2445.50);

    let sum: f64 = totals.by_provider.values().sum();
    assert!((totals.total - sum).abs() < 0.01);
    assert_eq!(totals.total, 9855.00);
}

#[tokio::test]
async fn collection_is_pure_and_repeatable() {
    let platform = demo_platform();
    let first = platform.collect_posture_snapshot().await.unwrap();
    let second = platform.collect_posture_snapshot().await.unwrap();

    assert_eq!(first.resources, second.resources);
    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.security_findings, second.security_findings);
    assert_eq!(first.recommendations, second.recommendations);
}
