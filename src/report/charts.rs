//! Terminal chart rendering: frequency bars, histograms, heatmap

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use faer::Mat;

use crate::pipeline::{GroupSummary, Histogram, ValueCounts};
use crate::utils::CHART;

const BAR_WIDTH: usize = 40;

fn bar(count: u32, max_count: u32) -> String {
    if max_count == 0 {
        return String::new();
    }
    let filled = (count as usize * BAR_WIDTH) / max_count as usize;
    "█".repeat(filled.max(usize::from(count > 0)))
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("      {}", line);
    }
}

/// Value-frequency bar chart for one column.
pub fn render_frequency_chart(counts: &ValueCounts) {
    println!();
    println!(
        "    {}{}",
        CHART,
        style(&counts.column).white().bold()
    );

    let max_count = counts.entries.iter().map(|e| e.count).max().unwrap_or(0);
    let label_width = counts
        .entries
        .iter()
        .map(|e| e.value.len())
        .max()
        .unwrap_or(0);

    for entry in &counts.entries {
        println!(
            "      {:<label_width$}  {} {} {}",
            entry.value,
            style(bar(entry.count, max_count)).cyan(),
            style(entry.count).yellow(),
            style(format!("({:.1}%)", counts.percentage(entry))).dim(),
        );
    }
}

/// Histogram of a numeric column, one bar per bin.
pub fn render_histogram(histogram: &Histogram) {
    println!();
    println!(
        "    {}{} {}",
        CHART,
        style(&histogram.column).white().bold(),
        style("(histogram)").dim()
    );

    let max_count = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in &histogram.bins {
        println!(
            "      {:>9.2} - {:<9.2}  {} {}",
            bin.lower,
            bin.upper,
            style(bar(bin.count, max_count)).cyan(),
            style(bin.count).yellow(),
        );
    }
}

/// Correlation heatmap as a colored table. NaN cells (constant columns)
/// render dim.
pub fn render_heatmap(matrix: &Mat<f64>, names: &[String]) {
    if names.is_empty() {
        println!("      {}", style("No numeric columns to correlate.").dim());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("")];
    header.extend(names.iter().map(|n| Cell::new(n).add_attribute(Attribute::Bold)));
    table.set_header(header);

    for (i, name) in names.iter().enumerate() {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        for j in 0..names.len() {
            let coefficient = matrix[(i, j)];
            row.push(heat_cell(coefficient));
        }
        table.add_row(row);
    }

    print_indented(&table);
}

fn heat_cell(coefficient: f64) -> Cell {
    if coefficient.is_nan() {
        return Cell::new("nan").fg(Color::DarkGrey);
    }
    let cell = Cell::new(format!("{:.2}", coefficient));
    match coefficient.abs() {
        a if a >= 0.99 => cell.fg(Color::Blue).add_attribute(Attribute::Bold),
        a if a >= 0.7 => cell.fg(Color::Blue),
        a if a >= 0.4 => cell.fg(Color::Cyan),
        _ => cell.fg(Color::White),
    }
}

/// Five-number summary per group, boxplot stand-in for the terminal.
pub fn render_group_summary(group_by: &str, measure: &str, summaries: &[GroupSummary]) {
    println!();
    println!(
        "    {}{} {}",
        CHART,
        style(format!("{} by {}", measure, group_by)).white().bold(),
        style("(five-number summary)").dim()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new(group_by).add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Min").add_attribute(Attribute::Bold),
        Cell::new("Q1").add_attribute(Attribute::Bold),
        Cell::new("Median").add_attribute(Attribute::Bold),
        Cell::new("Q3").add_attribute(Attribute::Bold),
        Cell::new("Max").add_attribute(Attribute::Bold),
    ]);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.group),
            Cell::new(summary.count),
            Cell::new(format!("{:.1}", summary.min)),
            Cell::new(format!("{:.1}", summary.q1)),
            Cell::new(format!("{:.1}", summary.median)),
            Cell::new(format!("{:.1}", summary.q3)),
            Cell::new(format!("{:.1}", summary.max)),
        ]);
    }
    print_indented(&table);
}
