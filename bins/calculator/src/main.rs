//! DRE Calculator
//!
//! Reads one snapshot object, or an array of them, as JSON from a file or
//! stdin and prints the derived figures as pretty JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dre_core::{DreCalculator, parse_snapshots};
use dre_shared::DreConfig;

/// Derives income statement figures and balance indicators from JSON snapshots.
#[derive(Parser, Debug)]
#[command(name = "dre-calculator", version, about, long_about = None)]
struct Cli {
    /// Print only the first-tier statement figures
    #[arg(long)]
    statement_only: bool,

    /// JSON file holding one snapshot object or an array of them (default: stdin)
    path: Option<PathBuf>,
}

impl Cli {
    fn read_input(&self) -> anyhow::Result<String> {
        match &self.path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot file {}", path.display())),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read snapshots from stdin")?;
                Ok(input)
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dre=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DreConfig::load().context("Failed to load configuration")?;
    let calculator = DreCalculator::from_config(&config);

    let parsed = parse_snapshots(&cli.read_input()?).context("Failed to parse snapshots")?;
    let is_batch = parsed.is_batch();
    let snapshots = parsed.into_vec();
    info!(count = snapshots.len(), statement_only = cli.statement_only, "Snapshots loaded");

    let mut results = if cli.statement_only {
        snapshots
            .iter()
            .map(|snapshot| serde_json::to_value(calculator.statement(snapshot)))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        calculator
            .calculate_batch(&snapshots)
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?
    };

    let output = match (is_batch, results.pop()) {
        (false, Some(single)) => single,
        (_, last) => {
            results.extend(last);
            Value::Array(results)
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
