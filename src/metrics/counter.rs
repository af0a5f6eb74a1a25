//! Operation counter
//!
//! A plain mutable accumulator for algorithmic operation counts. The
//! scan mutates it in place; the caller owns its lifecycle and reads the
//! fields afterwards. One counter per measured run, never shared.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-order CSV header for counter fields
pub const CSV_HEADER: &str = "comparisons,accesses,allocations,passes,majorityFound";

/// Counts of the operations performed by one majority vote scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpCounter {
    /// Element-equality tests performed
    pub comparisons: u64,

    /// Element reads from the input sequence
    pub accesses: u64,

    /// Candidate (re)assignments during phase 1
    pub allocations: u64,

    /// Full linear scans performed (2 for any non-empty input)
    pub passes: u64,

    /// Final verified outcome of the scan
    pub majority_found: bool,
}

impl OpCounter {
    /// Create a counter in the zero/false state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn record_access(&mut self) {
        self.accesses += 1;
    }

    pub fn record_allocation(&mut self) {
        self.allocations += 1;
    }

    pub fn record_pass(&mut self) {
        self.passes += 1;
    }

    pub fn set_majority_found(&mut self, found: bool) {
        self.majority_found = found;
    }

    /// Reset all counters to the zero/false state
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Render as a CSV data row matching [`CSV_HEADER`]
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.comparisons, self.accesses, self.allocations, self.passes, self.majority_found
        )
    }
}

impl fmt::Display for OpCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons={} accesses={} allocations={} passes={} majority_found={}",
            self.comparisons, self.accesses, self.allocations, self.passes, self.majority_found
        )
    }
}
