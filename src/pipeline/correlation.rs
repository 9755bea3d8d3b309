//! Correlation screening over numeric columns

use anyhow::Result;
use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::pipeline::classify::numeric_columns;

/// Default near-unity threshold for flagging a pair as redundant.
pub const DEFAULT_REDUNDANCY_THRESHOLD: f64 = 0.99;

/// An ordered pair of distinct numeric columns whose correlation coefficient
/// is at or beyond the redundancy threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedundantPair {
    pub left: String,
    pub right: String,
    pub coefficient: f64,
}

/// Numeric columns pre-cast to Float64 for correlation arithmetic.
fn float_columns(df: &DataFrame) -> Vec<(String, Column)> {
    numeric_columns(df)
        .into_iter()
        .filter_map(|name| {
            df.column(&name)
                .ok()
                .and_then(|col| col.cast(&DataType::Float64).ok())
                .map(|col| (name, col))
        })
        .collect()
}

/// Pearson correlation coefficient via a single-pass Welford update.
///
/// Only rows where both columns hold a value contribute. Returns `None` when
/// fewer than two such rows exist or either side has zero variance (the
/// coefficient is undefined for a constant column).
pub fn pearson(ca1: &Float64Chunked, ca2: &Float64Chunked) -> Option<f64> {
    if ca1.is_empty() || ca1.len() != ca2.len() {
        return None;
    }

    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in ca1.iter().zip(ca2.iter()) {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n < 2.0 {
        return None;
    }

    let std_x = (var_x / n).sqrt();
    let std_y = (var_y / n).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return None;
    }

    Some(cov_xy / (n * std_x * std_y))
}

/// Whether a coefficient falls in [-1, -threshold] or [threshold, 1].
///
/// Spelled as four clauses so the exact floating-point boundaries at +/-1
/// are handled explicitly: -1 and 1 themselves are always in.
pub fn is_redundant(coefficient: f64, threshold: f64) -> bool {
    coefficient == -1.0
        || (coefficient > -1.0 && coefficient <= -threshold)
        || coefficient == 1.0
        || (coefficient < 1.0 && coefficient >= threshold)
}

/// Screen every ordered pair of numeric columns for near-unity correlation.
///
/// The full grid is walked in row-major order (outer column, then inner),
/// so a redundant unordered pair shows up twice, once as (A, B) and once as
/// (B, A). The duplication is intentional: it keeps the symmetry of the
/// coefficient observable in the output. Self-pairs are computed during
/// iteration and filtered by the name-equality check before reporting.
///
/// An empty result means no pair met the threshold; the caller prints a
/// human-readable message instead of an empty table.
pub fn screen_redundant_pairs(df: &DataFrame, threshold: f64) -> Result<Vec<RedundantPair>> {
    let columns = float_columns(df);
    let n = columns.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let grid: Vec<(usize, usize)> = (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect();

    // Rayon's collect preserves the grid order, so reporting stays row-major
    let pairs: Vec<RedundantPair> = grid
        .par_iter()
        .filter_map(|&(i, j)| {
            let (left_name, left) = &columns[i];
            let (right_name, right) = &columns[j];
            let coefficient = pearson(left.f64().ok()?, right.f64().ok()?)?;
            if is_redundant(coefficient, threshold) && left_name != right_name {
                Some(RedundantPair {
                    left: left_name.clone(),
                    right: right_name.clone(),
                    coefficient,
                })
            } else {
                None
            }
        })
        .collect();

    Ok(pairs)
}

/// Full symmetric correlation matrix over the numeric columns, for the
/// heatmap view. The diagonal is 1 by definition; cells whose coefficient is
/// undefined (constant column) are NaN.
pub fn correlation_matrix(df: &DataFrame) -> Result<(Mat<f64>, Vec<String>)> {
    let columns = float_columns(df);
    let names: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
    let n = columns.len();

    let mut matrix = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        matrix[(i, i)] = 1.0;
        for j in (i + 1)..n {
            let coefficient = match (columns[i].1.f64(), columns[j].1.f64()) {
                (Ok(a), Ok(b)) => pearson(a, b).unwrap_or(f64::NAN),
                _ => f64::NAN,
            };
            matrix[(i, j)] = coefficient;
            matrix[(j, i)] = coefficient;
        }
    }

    Ok((matrix, names))
}
