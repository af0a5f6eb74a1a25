//! CLI module - Command-line interface definitions and handlers

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::bench::render::OutputFormat;
use crate::bench::run::DEFAULT_SIZES;

/// votebench - benchmark the Boyer-Moore majority vote algorithm.
#[derive(Parser, Debug)]
#[command(name = "votebench")]
#[command(
    author,
    version,
    about,
    long_about = r#"votebench times the Boyer-Moore majority vote algorithm over synthetic
inputs and reports operation-level counts (comparisons, element accesses,
candidate allocations, passes) alongside wall-clock durations.

Inputs are either fixed-majority arrays (a guaranteed majority of 1s) or
seeded uniform random arrays, so every run is reproducible.

Output formats (bench):
- table: human-friendly box-drawing table (default)
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- csv: same shape as the --export file

Examples:
    votebench run --size 50
    votebench run --size 1000 --random --seed 42
    votebench bench
    votebench bench --sizes 10,1000,100000 --format jsonl
    votebench bench --random --seed 7 --export results/bench.csv
"#
)]
pub struct Cli {
    /// Output format for benchmark results (table/jsonl/json/csv).
    #[arg(
        long,
        global = true,
        default_value = "table",
        value_name = "FORMAT",
        long_help = "Select the output format for benchmark suite results.\n\n\
Supported values:\n\
- table (default)\n\
- jsonl\n\
- json\n\
- csv\n\n\
The single-run report is always human-readable and ignores this flag."
    )]
    pub format: String,

    /// Seed for the random input generator.
    #[arg(
        long,
        global = true,
        value_name = "N",
        long_help = "Seed for the random input generator.\n\n\
The same seed always produces the same input, making --random runs\n\
reproducible. If omitted, a seed is derived from the current time."
    )]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time one majority vote call and print a detailed report.
    #[command(
        long_about = "Generate a single input, run one timed majority vote call over it, and\n\
print the outcome, elapsed time, and the full operation counter summary.\n\n\
Examples:\n\
  votebench run --size 50\n\
  votebench run --size 1000 --random --seed 42\n"
    )]
    Run {
        /// Number of elements in the generated input.
        #[arg(short, long, default_value = "20", value_name = "N")]
        size: usize,

        /// Use a seeded random input instead of a fixed-majority one.
        #[arg(
            short,
            long,
            long_help = "Generate a uniformly random input (values 0..5) instead of the default\n\
fixed-majority input. Random inputs usually have no majority at larger sizes."
        )]
        random: bool,
    },

    /// Run the benchmark suite over multiple input sizes.
    #[command(
        long_about = "Run one timed majority vote call per input size, collect a record per\n\
size (duration plus operation counts), and render all records in the selected\n\
--format. Each run gets a fresh input and a fresh counter.\n\n\
Examples:\n\
  votebench bench\n\
  votebench bench --sizes 10,1000,100000\n\
  votebench bench --random --seed 7 --export results/bench.csv\n"
    )]
    Bench {
        /// Input sizes to benchmark (comma-separated).
        #[arg(
            long,
            value_name = "SIZES",
            value_delimiter = ',',
            long_help = "Comma-separated list of input sizes to benchmark.\n\n\
Defaults to 10,100,1000,10000,100000.\n\n\
Example: --sizes 10,1000,100000"
        )]
        sizes: Vec<usize>,

        /// Use seeded random inputs instead of fixed-majority ones.
        #[arg(short, long)]
        random: bool,

        /// Export results to a CSV file.
        #[arg(
            short,
            long,
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = "benchmark_results.csv",
            long_help = "Export the collected records to a CSV file.\n\n\
Parent directories are created if missing. When the flag is passed without\n\
a value, benchmark_results.csv is used."
        )]
        export: Option<PathBuf>,
    },
}

/// Derive a seed from the clock when none was given
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as u64
    })
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().map_err(|e| anyhow!("{}", e))?;
    let seed = resolve_seed(cli.seed);

    match cli.command {
        Commands::Run { size, random } => crate::bench::run::run_single(size, random, seed),

        Commands::Bench {
            sizes,
            random,
            export,
        } => {
            let sizes = if sizes.is_empty() {
                DEFAULT_SIZES.to_vec()
            } else {
                sizes
            };
            crate::bench::run::run_suite(&sizes, random, seed, export.as_deref(), format)
        }
    }
}
