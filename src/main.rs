//! votebench - a benchmark harness for the Boyer-Moore majority vote algorithm
//!
//! votebench provides:
//! - A two-phase majority vote core with operation-level instrumentation
//! - Synthetic input generation (fixed-majority or seeded random)
//! - Timed single runs and multi-size benchmark suites
//! - Result rendering (table/jsonl/json/csv) and CSV file export

use anyhow::Result;
use clap::Parser;

mod algo;
mod bench;
mod cli;
mod metrics;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
