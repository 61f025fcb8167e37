use cloudops_core::format_usd;
use colored::Colorize;

pub async fn handle(json: bool) -> anyhow::Result<()> {
    let platform = super::demo_platform()?;
    let snapshot = platform.collect_posture_snapshot().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", "Resources".bold());
    for resource in &snapshot.resources {
        println!(
            "  [{}] {} - {} ({}/month, utilization {:.0}%)",
            resource.provider.to_uppercase().cyan(),
            resource.name.bold(),
            resource.resource_type,
            format_usd(resource.cost_per_month(), 2),
            resource.utilization * 100.0
        );
    }

    println!();
    println!("{}", "Metrics".bold());
    for (provider, metrics) in &snapshot.metrics {
        println!("  {}:", provider.to_uppercase().cyan());
        for (name, value) in metrics.iter() {
            println!("    {}: {}", name, value);
        }
    }

    println!();
    println!("{}", "Security Findings".bold());
    for (provider, findings) in &snapshot.security_findings {
        println!("  {}:", provider.to_uppercase().cyan());
        for finding in findings {
            println!("    - {}", finding);
        }
    }

    println!();
    println!("{}", "Advisor Recommendations".bold());
    for recommendation in &snapshot.recommendations {
        println!("  - {}", recommendation);
    }

    Ok(())
}
