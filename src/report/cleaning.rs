//! Terminal rendering for the data-cleaning walkthrough

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use polars::prelude::*;

use crate::pipeline::{DegenerateColumn, RedundantPair, ShapeChange, ValueCounts};

fn print_table(table: &Table) {
    for line in table.to_string().lines() {
        println!("      {}", line);
    }
}

/// Show the first rows of the frame, polars-formatted.
pub fn render_head(df: &DataFrame, rows: usize) {
    let head = df.head(Some(rows));
    for line in format!("{}", head).lines() {
        println!("      {}", line);
    }
}

/// Column inventory: every column name with its dtype.
pub fn render_column_inventory(df: &DataFrame) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Dtype").add_attribute(Attribute::Bold),
    ]);
    for col in df.get_columns() {
        table.add_row(vec![
            Cell::new(col.name().as_str()),
            Cell::new(col.dtype().to_string()).fg(if col.dtype().is_primitive_numeric() {
                Color::Cyan
            } else {
                Color::White
            }),
        ]);
    }
    print_table(&table);
}

/// List of numeric column names, comma-joined.
pub fn render_numeric_columns(names: &[String]) {
    println!("      {}", style(names.join(", ")).cyan());
}

/// One line per redundant pair, in the order the screener reported them.
/// Both (A, B) and (B, A) appear; the duplication is part of the contract.
pub fn render_redundant_pairs(pairs: &[RedundantPair]) {
    for pair in pairs {
        println!(
            "      The correlation between {} and {} is: {}",
            style(&pair.left).yellow(),
            style(&pair.right).yellow(),
            style(pair.coefficient).bold()
        );
    }
}

/// Frequency table for one column.
pub fn render_value_counts(counts: &ValueCounts) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new(&counts.column).add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    for entry in &counts.entries {
        table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
    }
    print_table(&table);
}

/// Degenerate columns with their value breakdown.
pub fn render_degenerate(degenerate: &[DegenerateColumn]) {
    for column in degenerate {
        render_value_counts(&column.counts);
    }
}

/// Shape before and after a column drop.
pub fn render_shape_change(change: &ShapeChange) {
    println!(
        "      Data shape before dropping: {}",
        style(format!("({}, {})", change.before.0, change.before.1)).bold()
    );
    println!(
        "      Data shape after dropping:  {}",
        style(format!("({}, {})", change.after.0, change.after.1)).bold()
    );
}

/// Per-column missing-value counts.
pub fn render_null_counts(counts: &[(String, usize)]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Missing").add_attribute(Attribute::Bold),
    ]);
    for (name, count) in counts {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(*count).fg(if *count == 0 { Color::White } else { Color::Red }),
        ]);
    }
    print_table(&table);
}
