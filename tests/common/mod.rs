//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create an HR-style test DataFrame with known characteristics
///
/// This DataFrame includes:
/// - `employee_count`, `standard_hours`, `over_18`: degenerate (single value)
/// - `years_total` / `years_double`: perfectly correlated (double = 2 * total)
/// - `distance`: uncorrelated numeric noise
/// - `over_time`, `department`: categorical columns for frequency charts
pub fn create_attrition_frame() -> DataFrame {
    df! {
        "age" => [34i32, 41, 29, 35, 41, 38],
        "years_total" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0],
        "years_double" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0],
        "distance" => [5.0f64, 1.0, 9.0, 2.0, 7.0, 3.0],
        "employee_count" => [1i32; 6],
        "standard_hours" => [80i32; 6],
        "over_18" => ["Y", "Y", "Y", "Y", "Y", "Y"],
        "over_time" => ["Yes", "No", "No", "Yes", "No", "No"],
        "department" => ["Sales", "R&D", "R&D", "Sales", "HR", "R&D"],
    }
    .unwrap()
}

/// Create a DataFrame with known correlation patterns
pub fn create_correlation_frame() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0], // b = 2*a
        "c" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], // negatively correlated with a
        "d" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0], // uncorrelated noise
    }
    .unwrap()
}

/// Create a single-column DataFrame where every row holds the same value
pub fn create_degenerate_only_frame() -> DataFrame {
    df! {
        "z" => ["A", "A", "A"],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}
