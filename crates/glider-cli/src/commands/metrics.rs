//! Metrics command: structural statistics without solving.

use clap::Args;
use glider_format::{CnfMetrics, Formula};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct MetricsArgs {
    /// Input CNF file
    #[arg(required = true)]
    pub input: PathBuf,
}

pub fn run(args: MetricsArgs) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.input)?;
    let formula = Formula::parse(&content)?;

    for warning in formula.validate() {
        tracing::warn!("{}: {}", args.input.display(), warning);
    }

    let metrics = CnfMetrics::of(&formula);
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
