//! Unit tests for table quality checks

use colsift::pipeline::{duplicate_row_count, null_counts};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_no_duplicate_rows() {
    let df = common::create_attrition_frame();

    assert_eq!(duplicate_row_count(&df).unwrap(), 0);
}

#[test]
fn test_duplicate_rows_counted() {
    let df = df! {
        "a" => [1i32, 2, 1, 1],
        "b" => ["x", "y", "x", "x"],
    }
    .unwrap();

    // Rows 2 and 3 repeat row 0
    assert_eq!(duplicate_row_count(&df).unwrap(), 2);
}

#[test]
fn test_same_value_different_rows_not_duplicates() {
    let df = df! {
        "a" => [1i32, 1, 1],
        "b" => ["x", "y", "z"],
    }
    .unwrap();

    assert_eq!(duplicate_row_count(&df).unwrap(), 0);
}

#[test]
fn test_empty_frame_has_no_duplicates() {
    let df = DataFrame::empty();

    assert_eq!(duplicate_row_count(&df).unwrap(), 0);
}

#[test]
fn test_null_counts_per_column() {
    let df = df! {
        "complete" => [1.0f64, 2.0, 3.0],
        "holey" => [Some(1.0f64), None, None],
    }
    .unwrap();

    let counts = null_counts(&df);

    assert_eq!(
        counts,
        vec![("complete".to_string(), 0), ("holey".to_string(), 2)]
    );
}

#[test]
fn test_null_counts_all_zero_for_full_frame() {
    let df = common::create_attrition_frame();

    let counts = null_counts(&df);

    assert_eq!(counts.len(), 9);
    assert!(counts.iter().all(|(_, n)| *n == 0));
}
