//! Cleaning report export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{DegenerateColumn, RedundantPair, ShapeChange};

/// Metadata about the cleaning run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Colsift version
    pub colsift_version: String,
    /// Input file path
    pub input_file: String,
    /// Correlation threshold used for redundancy screening
    pub correlation_threshold: f64,
}

/// Complete cleaning report for one run
#[derive(Serialize)]
pub struct CleaningExport {
    pub metadata: RunMetadata,
    /// Shape before and after dropping degenerate columns
    pub shape: ShapeChange,
    /// Columns remaining after cleaning, in order
    pub columns: Vec<String>,
    /// Numeric columns remaining after cleaning, in order
    pub numeric_columns: Vec<String>,
    /// Degenerate columns that were detected, with their value breakdown
    pub degenerate_columns: Vec<DegenerateColumn>,
    /// Redundant pairs in reported (row-major) order, both orderings kept
    pub redundant_pairs: Vec<RedundantPair>,
    /// Number of exactly duplicated rows
    pub duplicate_rows: usize,
    /// Missing-value count per remaining column
    pub null_counts: Vec<(String, usize)>,
}

impl RunMetadata {
    pub fn new(input_file: &Path, correlation_threshold: f64) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            colsift_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            correlation_threshold,
        }
    }
}

/// Write the cleaning report to a JSON file
pub fn export_cleaning_report(export: &CleaningExport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(export)
        .context("Failed to serialize cleaning report to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write cleaning report to {}",
            output_path.display()
        )
    })?;

    Ok(())
}
