use colored::Colorize;
use std::path::Path;

pub async fn handle(input: &Path, column: &str) -> anyhow::Result<()> {
    let anomalies = cloudops_monitor::detect_anomalies(input, column).await?;

    if anomalies.is_empty() {
        println!("{}", "No anomalies detected.".green());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} anomalous rows in {}", anomalies.len(), input.display())
            .yellow()
            .bold()
    );
    for row in &anomalies {
        let cells: Vec<String> = row.iter().map(|(name, value)| format!("{name}={value}")).collect();
        println!("  - {}", cells.join(", "));
    }

    Ok(())
}
