//! Typed errors for pipeline operations.
//!
//! Lookup failures must be distinguishable from legitimately empty results,
//! so column resolution never degrades into an empty table silently.

use thiserror::Error;

/// Errors raised by the cleaning pipeline.
#[derive(Debug, Error)]
pub enum SiftError {
    /// A requested column name does not exist in the dataset.
    #[error("column '{name}' not found in dataset")]
    ColumnNotFound { name: String },

    /// A numeric operation was requested on a non-numeric column.
    #[error("column '{name}' is not numeric (dtype: {dtype})")]
    NotNumeric { name: String, dtype: String },

    /// The input file extension is not a supported format.
    #[error("unsupported file format: {extension}. Supported formats: csv, parquet")]
    UnsupportedFormat { extension: String },
}
