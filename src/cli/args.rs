//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Colsift - Clean and explore tabular datasets using degenerate-column and
/// correlation screening
#[derive(Parser, Debug)]
#[command(name = "colsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path for the cleaned dataset (CSV or Parquet, determined
    /// by extension). Defaults to the input directory with a '_cleaned'
    /// suffix (e.g. data.csv → data_cleaned.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Correlation threshold - report numeric column pairs whose absolute
    /// correlation coefficient is at or above this value
    #[arg(long, default_value = "0.99", value_parser = validate_correlation_threshold)]
    pub correlation_threshold: f64,

    /// Number of rows to show when previewing the dataset
    #[arg(long, default_value = "5")]
    pub head_rows: usize,

    /// Write a JSON cleaning report next to the input file
    #[arg(long, default_value = "false")]
    pub report: bool,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render terminal charts for columns of the dataset
    Visualize {
        /// Input file path (CSV or Parquet)
        input: PathBuf,

        /// Columns to chart (comma-separated). Defaults to every column with
        /// at most --max-categories distinct values, plus histograms for the
        /// remaining numeric columns.
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Number of bins for numeric histograms
        #[arg(long, default_value = "15")]
        bins: usize,

        /// Maximum distinct values for a frequency chart
        #[arg(long, default_value = "20")]
        max_categories: usize,

        /// Summarize a numeric column per category of another, written as
        /// 'group_column:numeric_column' (e.g. OverTime:Age)
        #[arg(long, value_parser = parse_group_spec)]
        group: Option<GroupSpec>,

        /// Number of rows to use for schema inference (CSV only).
        /// Use 0 for full table scan.
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },
}

/// A 'group_column:numeric_column' pair for the grouped summary chart.
#[derive(Debug, Clone)]
pub struct GroupSpec {
    pub group_by: String,
    pub measure: String,
}

impl Cli {
    /// Get the input path, if provided.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path will be in the same directory as the input with a
    /// '_cleaned' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = input.extension().and_then(|e| e.to_str()).unwrap_or("csv");
            parent.join(format!("{}_cleaned.{}", stem, extension))
        }))
    }

    /// Get the JSON report path, derived from the input file.
    /// The derived path will be in the same directory as the input with a
    /// '_cleaning_report.json' suffix.
    pub fn report_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
        let stem = input.file_stem().and_then(|s| s.to_str())?;
        Some(parent.join(format!("{}_cleaning_report.json", stem)))
    }
}

/// Validator for the correlation threshold parameter
fn validate_correlation_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(0.0..=1.0).contains(&value) {
        Err(format!(
            "correlation threshold must be between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}

/// Parser for the 'group_column:numeric_column' argument
fn parse_group_spec(s: &str) -> Result<GroupSpec, String> {
    match s.split_once(':') {
        Some((group_by, measure)) if !group_by.is_empty() && !measure.is_empty() => Ok(GroupSpec {
            group_by: group_by.to_string(),
            measure: measure.to_string(),
        }),
        _ => Err(format!(
            "'{}' is not a valid group spec; expected 'group_column:numeric_column'",
            s
        )),
    }
}
