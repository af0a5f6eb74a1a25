//! CSV export for benchmark results

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::metrics::counter::{OpCounter, CSV_HEADER};

/// One timed benchmark run at a given input size
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchRecord {
    /// Number of elements in the benchmarked input
    pub array_size: usize,

    /// Wall-clock duration of the `find_majority` call in nanoseconds
    pub time_nanos: u64,

    /// Operation counts recorded during the call
    #[serde(flatten)]
    pub counter: OpCounter,
}

impl BenchRecord {
    pub fn new(array_size: usize, time_nanos: u64, counter: OpCounter) -> Self {
        Self {
            array_size,
            time_nanos,
            counter,
        }
    }

    /// Render as a CSV data row matching [`csv_header`]
    pub fn csv_row(&self) -> String {
        format!("{},{},{}", self.array_size, self.time_nanos, self.counter.csv_row())
    }
}

/// Fixed-order CSV header for benchmark records
pub fn csv_header() -> String {
    format!("arraySize,timeNanos,{}", CSV_HEADER)
}

/// Write benchmark records to a CSV file, creating parent directories
pub fn export_csv(path: &Path, records: &[BenchRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create CSV file: {:?}", path))?;

    writeln!(file, "{}", csv_header())?;
    for record in records {
        writeln!(file, "{}", record.csv_row())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_counter() -> OpCounter {
        let mut counter = OpCounter::new();
        counter.comparisons = 30;
        counter.accesses = 40;
        counter.allocations = 10;
        counter.passes = 2;
        counter.majority_found = true;
        counter
    }

    #[test]
    fn test_csv_header_shape() {
        assert_eq!(
            csv_header(),
            "arraySize,timeNanos,comparisons,accesses,allocations,passes,majorityFound"
        );
    }

    #[test]
    fn test_record_csv_row() {
        let record = BenchRecord::new(20, 1234, sample_counter());
        assert_eq!(record.csv_row(), "20,1234,30,40,10,2,true");
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("results.csv");

        let records = vec![
            BenchRecord::new(10, 100, sample_counter()),
            BenchRecord::new(100, 900, sample_counter()),
        ];
        export_csv(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], csv_header());
        assert!(lines[1].starts_with("10,100,"));
        assert!(lines[2].starts_with("100,900,"));
    }

    #[test]
    fn test_export_creates_parent_dirs() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out/nested/results.csv");

        export_csv(&path, &[BenchRecord::new(5, 50, sample_counter())]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = BenchRecord::new(20, 1234, sample_counter());
        let json = serde_json::to_string(&record).unwrap();

        // Counter fields are flattened into the record object
        assert!(json.contains("\"arraySize\":20"));
        assert!(json.contains("\"timeNanos\":1234"));
        assert!(json.contains("\"comparisons\":30"));
        assert!(json.contains("\"majorityFound\":true"));
    }
}
