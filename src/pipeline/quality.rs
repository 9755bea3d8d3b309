//! Table-level quality checks: duplicate rows and missing values

use anyhow::Result;
use polars::prelude::*;

/// Count rows that are exact duplicates of an earlier row.
pub fn duplicate_row_count(df: &DataFrame) -> Result<usize> {
    if df.height() == 0 {
        return Ok(0);
    }
    let unique = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    Ok(df.height() - unique.height())
}

/// Missing-value count per column, in column order.
pub fn null_counts(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), col.null_count()))
        .collect()
}
