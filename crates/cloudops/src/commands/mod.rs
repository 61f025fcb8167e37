pub mod anomalies;
pub mod costs;
pub mod etl;
pub mod posture;

use cloudops_connector_aws::AwsConnector;
use cloudops_connector_azure::AzureConnector;
use cloudops_connector_gcp::GcpConnector;
use cloudops_core::CloudConnector;
use cloudops_platform::CloudOpsPlatform;
use std::sync::Arc;

/// Platform over the three demo connectors
pub(crate) fn demo_platform() -> anyhow::Result<CloudOpsPlatform> {
    let connectors: Vec<Arc<dyn CloudConnector>> = vec![
        Arc::new(AwsConnector::new()),
        Arc::new(AzureConnector::new()),
        Arc::new(GcpConnector::new()),
    ];
    Ok(CloudOpsPlatform::new(connectors)?)
}
