//! Colsift: Dataset Cleaning Library
//!
//! A library for cleaning and exploring tabular datasets using
//! degenerate-column detection and correlation-based screening.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
