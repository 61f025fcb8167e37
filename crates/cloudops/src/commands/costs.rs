use cloudops_core::format_usd;
use colored::Colorize;

pub async fn handle(json: bool) -> anyhow::Result<()> {
    let platform = super::demo_platform()?;
    let summary = platform.summarize_costs(None).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Monthly Cost Summary".bold());
    for (provider, cost) in &summary.by_provider {
        println!(
            "  {}: {}",
            provider.to_uppercase().cyan(),
            format_usd(*cost, 2)
        );
    }
    println!(
        "  {}: {}",
        "TOTAL".bold(),
        format_usd(summary.total, 2).green()
    );

    Ok(())
}
