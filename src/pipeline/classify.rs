//! Column classification: numeric partition and degenerate detection

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::counts::{value_counts, ValueCounts};

/// Names of every column with a primitive numeric dtype, in the dataset's
/// original column order. Classification is type-driven; a string column
/// holding digits stays non-numeric.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect()
}

/// A column whose set of distinct values has cardinality exactly 1.
#[derive(Debug, Clone, Serialize)]
pub struct DegenerateColumn {
    pub name: String,
    /// Frequency breakdown of the column, printed by the cleaning report.
    pub counts: ValueCounts,
}

/// Find every degenerate (single distinct value) column, in original column
/// order. Deterministic: running twice on an unchanged frame yields the
/// same result.
pub fn degenerate_columns(df: &DataFrame) -> Result<Vec<DegenerateColumn>> {
    let mut degenerate = Vec::new();

    for col in df.get_columns() {
        if col.as_materialized_series().n_unique()? == 1 {
            let name = col.name().to_string();
            let counts = value_counts(df, &name)?;
            degenerate.push(DegenerateColumn { name, counts });
        }
    }

    Ok(degenerate)
}
