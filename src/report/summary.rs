//! Cleaning summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one cleaning run
#[derive(Debug, Default)]
pub struct CleaningSummary {
    pub rows: usize,
    pub initial_columns: usize,
    pub final_columns: usize,
    pub dropped_degenerate: Vec<String>,
    pub redundant_pairs: usize,
    pub duplicate_rows: usize,
}

impl CleaningSummary {
    pub fn new(initial_columns: usize, rows: usize) -> Self {
        Self {
            rows,
            initial_columns,
            final_columns: initial_columns,
            ..Default::default()
        }
    }

    pub fn add_degenerate_drops(&mut self, columns: Vec<String>) {
        self.final_columns -= columns.len();
        self.dropped_degenerate = columns;
    }

    pub fn set_redundant_pairs(&mut self, count: usize) {
        self.redundant_pairs = count;
    }

    pub fn set_duplicate_rows(&mut self, count: usize) {
        self.duplicate_rows = count;
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CLEANING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Rows"), Cell::new(self.rows)]);

        table.add_row(vec![
            Cell::new("📁 Initial Columns"),
            Cell::new(self.initial_columns),
        ]);

        table.add_row(vec![
            Cell::new("🔗 Redundant Pairs"),
            Cell::new(self.redundant_pairs).fg(if self.redundant_pairs == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("♻️  Duplicate Rows"),
            Cell::new(self.duplicate_rows).fg(if self.duplicate_rows == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Dropped (Degenerate)"),
            Cell::new(self.dropped_degenerate.len()).fg(if self.dropped_degenerate.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Final Columns"),
            Cell::new(self.final_columns)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped_degenerate.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Dropped single-value columns").yellow(),
                style(format!("({})", self.dropped_degenerate.len())).dim()
            );
            for column in &self.dropped_degenerate {
                println!("        {} {}", style("•").dim(), column);
            }
        }
    }
}
