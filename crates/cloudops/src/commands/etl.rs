use cloudops_core::{RetryConfig, run_with_retries};
use cloudops_etl::{WarehouseClient, pipeline};
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

pub async fn handle(
    input: &Path,
    output: &Path,
    table: &str,
    retries: u32,
    delay: u64,
) -> anyhow::Result<()> {
    let config = RetryConfig::fixed(retries, Duration::from_secs(delay));

    // Fresh warehouse per attempt so a failed run leaves no partial state.
    let rows = run_with_retries(&config, || async move {
        let mut warehouse = WarehouseClient::new(output);
        pipeline::run(input, &mut warehouse, table).await
    })
    .await?;

    println!("{} {} rows loaded into {}", "✓".green(), rows, table.cyan());
    println!("  warehouse output: {}", output.display());

    Ok(())
}
