//! Benchmark drivers
//!
//! Times `find_majority` over generated inputs. Each measured run owns a
//! fresh counter; counters are never shared between runs.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::algo::vote::find_majority;
use crate::bench::gen::{majority_values, random_values};
use crate::bench::render::{OutputFormat, Renderer};
use crate::metrics::counter::OpCounter;
use crate::metrics::csv::{export_csv, BenchRecord};

/// Default sizes for the benchmark suite
pub const DEFAULT_SIZES: [usize; 5] = [10, 100, 1000, 10_000, 100_000];

/// Generate one benchmark input
fn build_input(size: usize, random: bool, seed: u64) -> Vec<i64> {
    if random {
        random_values(size, seed)
    } else {
        majority_values(size)
    }
}

/// Time one `find_majority` call over a fresh input and counter
fn measure(size: usize, random: bool, seed: u64) -> (Option<i64>, BenchRecord) {
    let values = build_input(size, random, seed);
    let mut counter = OpCounter::new();

    let start = Instant::now();
    let result = find_majority(&values, &mut counter);
    let elapsed = start.elapsed();

    let record = BenchRecord::new(size, elapsed.as_nanos() as u64, counter);
    (result, record)
}

/// Run a single timed benchmark and print a human report
pub fn run_single(size: usize, random: bool, seed: u64) -> Result<()> {
    println!("=== Single Benchmark Run ===");
    println!("Array size: {}", size);
    println!("Random: {}", random);
    println!();

    let (result, record) = measure(size, random, seed);

    let majority = match result {
        Some(value) => value.to_string(),
        None => "none".to_string(),
    };
    println!("Majority: {}", majority);
    println!("Time (ns): {}", record.time_nanos);
    println!("Time (ms): {:.6}", record.time_nanos as f64 / 1_000_000.0);
    println!();
    println!("{}", record.counter);

    Ok(())
}

/// Run the benchmark suite over `sizes` and render the collected records
pub fn run_suite(
    sizes: &[usize],
    random: bool,
    seed: u64,
    export: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let records = collect_suite(sizes, random, seed);

    let renderer = Renderer::new(format);
    println!("{}", renderer.render(&records));

    if let Some(path) = export {
        export_csv(path, &records)?;
        eprintln!("Results exported to {}", path.display());
    }

    Ok(())
}

/// Collect one record per size, each with its own input and counter
pub fn collect_suite(sizes: &[usize], random: bool, seed: u64) -> Vec<BenchRecord> {
    sizes
        .iter()
        .map(|size| measure(*size, random, seed).1)
        .collect()
}
