mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cloudops")]
#[command(about = "AI CloudOps demo platform - posture, costs, ETL, anomaly checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Collect and display the posture snapshot
    Posture {
        /// Emit the snapshot as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Summarize monthly costs per provider
    Costs {
        /// Emit the summary as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Run the demo ETL pipeline under the retry helper
    Etl {
        /// Source CSV dataset
        #[arg(short, long, env = "CLOUDOPS_ETL_INPUT", default_value = "data/sample_sales.csv")]
        input: PathBuf,
        /// Destination CSV written by the demo warehouse
        #[arg(short, long, default_value = "demo_warehouse_output.csv")]
        output: PathBuf,
        /// Destination table name
        #[arg(long, default_value = "SALES")]
        table: String,
        /// Attempts before giving up
        #[arg(long, default_value = "3")]
        retries: u32,
        /// Seconds to wait between attempts
        #[arg(long, default_value = "1")]
        delay: u64,
    },
    /// Detect anomalous rows in a CSV export
    Anomalies {
        /// CSV file to scan
        #[arg(short, long)]
        input: PathBuf,
        /// Numeric column to test
        #[arg(short, long)]
        column: String,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Posture { json } => commands::posture::handle(json).await?,
        Commands::Costs { json } => commands::costs::handle(json).await?,
        Commands::Etl {
            input,
            output,
            table,
            retries,
            delay,
        } => commands::etl::handle(&input, &output, &table, retries, delay).await?,
        Commands::Anomalies { input, column } => {
            commands::anomalies::handle(&input, &column).await?
        }
        Commands::Version => {
            println!("cloudops {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
