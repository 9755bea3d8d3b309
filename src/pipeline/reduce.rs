//! Table reduction: dropping degenerate columns

use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::classify::DegenerateColumn;

/// Row/column shape on both sides of a reduction.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShapeChange {
    pub before: (usize, usize),
    pub after: (usize, usize),
}

/// Drop the named columns, preserving the order of the remaining ones.
///
/// A name absent from the frame is skipped for that name rather than
/// failing the whole operation; callers normally derive the names from the
/// same frame, so the case is tolerated, not expected.
pub fn drop_columns(df: &DataFrame, names: &[String]) -> DataFrame {
    df.drop_many(names.iter().map(String::as_str))
}

/// Drop every degenerate column, recording the shape on both sides so the
/// report can show the before/after column count.
///
/// Dropping invalidates previously derived numeric-column lists; recompute
/// them from the returned frame.
pub fn drop_degenerate(df: &DataFrame, degenerate: &[DegenerateColumn]) -> (DataFrame, ShapeChange) {
    let names: Vec<String> = degenerate.iter().map(|d| d.name.clone()).collect();
    let before = df.shape();
    let reduced = drop_columns(df, &names);
    let after = reduced.shape();
    (reduced, ShapeChange { before, after })
}
