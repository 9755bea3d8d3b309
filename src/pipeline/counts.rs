//! Per-column summaries: value frequencies, histograms, grouped statistics

use std::collections::HashMap;

use anyhow::Result;
use polars::prelude::*;
use serde::Serialize;

use crate::pipeline::error::SiftError;

/// One distinct value and how many rows hold it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: u32,
}

/// Value-frequency breakdown of a single column, sorted by count descending.
/// Ties keep first-appearance order, so the result is deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct ValueCounts {
    pub column: String,
    pub total: u32,
    pub entries: Vec<ValueCount>,
}

impl ValueCounts {
    /// Share of rows holding `entry`'s value, in percent.
    pub fn percentage(&self, entry: &ValueCount) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            entry.count as f64 * 100.0 / self.total as f64
        }
    }
}

fn resolve_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| anyhow::Error::new(SiftError::ColumnNotFound { name: name.to_string() }))
}

fn require_numeric(column: &Column) -> Result<()> {
    if column.dtype().is_primitive_numeric() {
        Ok(())
    } else {
        Err(anyhow::Error::new(SiftError::NotNumeric {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
        }))
    }
}

fn value_label(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Count how often each distinct value occurs in `column`.
///
/// A column name that does not exist is a [`SiftError::ColumnNotFound`],
/// never an empty table that could be mistaken for "no data". Counts are
/// recomputed on every call; frames are in-memory and the scan is cheap.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<ValueCounts> {
    let col = resolve_column(df, column)?;
    // Series::iter requires a single-chunk series
    let series = col.as_materialized_series().rechunk();

    let mut first_seen: Vec<String> = Vec::new();
    let mut frequency: HashMap<String, u32> = HashMap::new();

    for value in series.iter() {
        let label = value_label(&value);
        if !frequency.contains_key(&label) {
            first_seen.push(label.clone());
        }
        *frequency.entry(label).or_insert(0) += 1;
    }

    let mut entries: Vec<ValueCount> = first_seen
        .into_iter()
        .map(|value| {
            let count = frequency.get(&value).copied().unwrap_or(0);
            ValueCount { value, count }
        })
        .collect();

    // Stable sort keeps first-appearance order for equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(ValueCounts {
        column: column.to_string(),
        total: series.len() as u32,
        entries,
    })
}

/// One equal-width histogram bin; the last bin includes its upper edge.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u32,
}

/// Equal-width histogram of a numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// Bin a numeric column into `bin_count` equal-width bins.
pub fn histogram(df: &DataFrame, column: &str, bin_count: usize) -> Result<Histogram> {
    let col = resolve_column(df, column)?;
    require_numeric(col)?;

    let casted = col.cast(&DataType::Float64)?;
    let values: Vec<f64> = casted.f64()?.iter().flatten().collect();

    if values.is_empty() || bin_count == 0 {
        return Ok(Histogram {
            column: column.to_string(),
            bins: Vec::new(),
        });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        // Constant column: everything lands in one bin
        return Ok(Histogram {
            column: column.to_string(),
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: values.len() as u32,
            }],
        });
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0u32; bin_count];
    for &v in &values {
        let index = (((v - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect();

    Ok(Histogram {
        column: column.to_string(),
        bins,
    })
}

/// Five-number summary of a numeric column within one category of a
/// grouping column.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub group: String,
    pub count: u32,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize `measure` per distinct value of `group_by`, in the groups'
/// first-appearance order.
pub fn grouped_summary(df: &DataFrame, group_by: &str, measure: &str) -> Result<Vec<GroupSummary>> {
    let group_col = resolve_column(df, group_by)?;
    let measure_col = resolve_column(df, measure)?;
    require_numeric(measure_col)?;

    let casted = measure_col.cast(&DataType::Float64)?;
    let measures = casted.f64()?;

    let mut first_seen: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    let group_series = group_col.as_materialized_series().rechunk();
    for (label, value) in group_series.iter().zip(measures.iter()) {
        if let Some(value) = value {
            let label = value_label(&label);
            if !groups.contains_key(&label) {
                first_seen.push(label.clone());
            }
            groups.entry(label).or_default().push(value);
        }
    }

    let summaries = first_seen
        .into_iter()
        .filter_map(|label| {
            let mut values = groups.remove(&label)?;
            values.sort_by(f64::total_cmp);
            Some(GroupSummary {
                count: values.len() as u32,
                min: values[0],
                q1: quantile(&values, 0.25),
                median: quantile(&values, 0.5),
                q3: quantile(&values, 0.75),
                max: values[values.len() - 1],
                group: label,
            })
        })
        .collect();

    Ok(summaries)
}

/// Quantile of a sorted slice with linear interpolation between ranks.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
