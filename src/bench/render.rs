//! Benchmark result rendering
//!
//! Renders a list of benchmark records to different output formats:
//! table, jsonl, json, csv

use crate::metrics::csv::{csv_header, BenchRecord};

/// Output format for benchmark results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Jsonl,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Renderer for benchmark records
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render records to a string
    pub fn render(&self, records: &[BenchRecord]) -> String {
        match self.format {
            OutputFormat::Table => render_table(records),
            OutputFormat::Jsonl => render_jsonl(records),
            OutputFormat::Json => render_json(records),
            OutputFormat::Csv => render_csv(records),
        }
    }
}

/// Render as JSON Lines (one JSON object per line)
fn render_jsonl(records: &[BenchRecord]) -> String {
    records
        .iter()
        .filter_map(|r| serde_json::to_string(r).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render as a single JSON array
fn render_json(records: &[BenchRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}

/// Render as CSV (same shape as the export file)
fn render_csv(records: &[BenchRecord]) -> String {
    let mut output = csv_header();
    for record in records {
        output.push('\n');
        output.push_str(&record.csv_row());
    }
    output
}

/// Render as a box-drawing table
fn render_table(records: &[BenchRecord]) -> String {
    const COLUMNS: [(&str, usize); 7] = [
        ("Size", 8),
        ("Time (ns)", 12),
        ("Comparisons", 12),
        ("Accesses", 12),
        ("Allocations", 12),
        ("Passes", 6),
        ("Majority", 8),
    ];

    let mut output = String::new();

    let rule = |left: &str, mid: &str, right: &str| {
        let mut line = String::from(left);
        for (idx, (_, width)) in COLUMNS.iter().enumerate() {
            line.push_str(&"─".repeat(width + 2));
            line.push_str(if idx == COLUMNS.len() - 1 { right } else { mid });
        }
        line.push('\n');
        line
    };

    output.push_str(&rule("┌", "┬", "┐"));
    let mut header = String::from("│");
    for (name, width) in COLUMNS {
        header.push_str(&format!(" {:>width$} │", name, width = width));
    }
    output.push_str(&header);
    output.push('\n');
    output.push_str(&rule("├", "┼", "┤"));

    for record in records {
        output.push_str(&format!(
            "│ {:>8} │ {:>12} │ {:>12} │ {:>12} │ {:>12} │ {:>6} │ {:>8} │\n",
            record.array_size,
            record.time_nanos,
            record.counter.comparisons,
            record.counter.accesses,
            record.counter.allocations,
            record.counter.passes,
            record.counter.majority_found,
        ));
    }

    output.push_str(&rule("└", "┴", "┘"));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::counter::OpCounter;

    fn sample_records() -> Vec<BenchRecord> {
        let mut counter = OpCounter::new();
        counter.comparisons = 15;
        counter.accesses = 20;
        counter.allocations = 5;
        counter.passes = 2;
        counter.majority_found = true;
        vec![
            BenchRecord::new(10, 1000, counter.clone()),
            BenchRecord::new(100, 9000, counter),
        ]
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_format_parse_case_insensitive() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JsonL".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
    }

    #[test]
    fn test_format_parse_invalid() {
        let result = "yaml".parse::<OutputFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_format_default_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_render_jsonl() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&sample_records());
        assert_eq!(output.lines().count(), 2);
        for line in output.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("arraySize").is_some());
            assert!(value.get("timeNanos").is_some());
        }
    }

    #[test]
    fn test_render_json_is_array() {
        let output = Renderer::new(OutputFormat::Json).render(&sample_records());
        let values: Vec<serde_json::Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_render_csv_matches_export_shape() {
        let output = Renderer::new(OutputFormat::Csv).render(&sample_records());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], csv_header());
        assert_eq!(lines[1], "10,1000,15,20,5,2,true");
    }

    #[test]
    fn test_render_table_has_borders_and_rows() {
        let output = Renderer::new(OutputFormat::Table).render(&sample_records());
        assert!(output.contains("┌"));
        assert!(output.contains("│"));
        assert!(output.contains("└"));
        assert!(output.contains("Comparisons"));
        assert!(output.contains("1000"));
    }

    #[test]
    fn test_render_empty_records() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&[]);
        assert!(output.is_empty());
    }
}
