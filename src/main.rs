//! Colsift: Dataset Cleaning CLI Tool
//!
//! A command-line tool for cleaning and exploring tabular datasets:
//! column inventory, correlation screening, duplicate and missing-value
//! checks, and degenerate (single-value) column pruning.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use colsift::cli::{confirm_drop_columns, Cli, Commands, GroupSpec};
use colsift::pipeline::{
    correlation_matrix, degenerate_columns, drop_degenerate, duplicate_row_count, grouped_summary,
    histogram, load_dataset_with_progress, null_counts, numeric_columns, save_dataset,
    screen_redundant_pairs, value_counts, ShapeChange,
};
use colsift::report::{
    export_cleaning_report, render_column_inventory, render_degenerate, render_frequency_chart,
    render_group_summary, render_head, render_heatmap, render_histogram, render_null_counts,
    render_numeric_columns, render_redundant_pairs, render_shape_change, CleaningExport,
    CleaningSummary, RunMetadata,
};
use colsift::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config, print_count,
    print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return match command {
            Commands::Visualize {
                input,
                columns,
                bins,
                max_categories,
                group,
                infer_schema_length,
            } => run_visualize(
                input,
                columns,
                *bins,
                *max_categories,
                group.as_ref(),
                *infer_schema_length,
            ),
        };
    }

    run_clean(&cli)
}

fn run_clean(cli: &Cli) -> Result<()> {
    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let output_path = cli
        .output_path()
        .ok_or_else(|| anyhow::anyhow!("Could not derive an output path from the input path"))?;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(input, &output_path, cli.correlation_threshold);

    // Load dataset once; everything downstream derives from this frame
    let step_start = Instant::now();
    println!();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(input, cli.infer_schema_length)?;
    print_success("Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let mut summary = CleaningSummary::new(cols, rows);
    print_step_time(step_start.elapsed());

    // Step 1: Column inventory
    print_step_header(1, "Column Inventory");
    render_head(&df, cli.head_rows);
    render_column_inventory(&df);
    let numeric = numeric_columns(&df);
    print_count("numeric column(s)", numeric.len(), None);
    render_numeric_columns(&numeric);

    // Step 2: Correlation screening
    print_step_header(2, "Correlation Screening");
    let step_start = Instant::now();
    let spinner = create_spinner("Screening numeric column pairs...");
    let (matrix, matrix_names) = correlation_matrix(&df)?;
    let redundant = screen_redundant_pairs(&df, cli.correlation_threshold)?;
    finish_with_success(&spinner, "Correlation screening complete");
    render_heatmap(&matrix, &matrix_names);
    if redundant.is_empty() {
        print_info("No columns with a high correlation coefficient. There is no redundant column to be deleted.");
    } else {
        print_count(
            "redundant pair(s)",
            redundant.len(),
            Some(&format!("(|r| >= {:.2})", cli.correlation_threshold)),
        );
        render_redundant_pairs(&redundant);
    }
    summary.set_redundant_pairs(redundant.len());
    print_step_time(step_start.elapsed());

    // Step 3: Duplicate rows
    print_step_header(3, "Duplicate Rows");
    let duplicates = duplicate_row_count(&df)?;
    if duplicates == 0 {
        print_info("No duplicated rows found");
    } else {
        print_count("duplicated row(s)", duplicates, None);
    }
    summary.set_duplicate_rows(duplicates);

    // Step 4: Degenerate columns
    print_step_header(4, "Degenerate Columns");
    let degenerate = degenerate_columns(&df)?;
    let shape: ShapeChange;
    let mut df = if degenerate.is_empty() {
        print_info("No single-value columns found");
        shape = ShapeChange {
            before: df.shape(),
            after: df.shape(),
        };
        df
    } else {
        print_count("single-value column(s)", degenerate.len(), None);
        render_degenerate(&degenerate);

        if cli.no_confirm || confirm_drop_columns(degenerate.len())? {
            let (reduced, change) = drop_degenerate(&df, &degenerate);
            shape = change;
            render_shape_change(&shape);
            render_head(&reduced, cli.head_rows);
            summary.add_degenerate_drops(degenerate.iter().map(|d| d.name.clone()).collect());
            print_success("Dropped single-value columns");
            reduced
        } else {
            println!("      Skipped dropping columns.");
            shape = ShapeChange {
                before: df.shape(),
                after: df.shape(),
            };
            df
        }
    };

    // Step 5: Missing values
    print_step_header(5, "Missing Values");
    let nulls = null_counts(&df);
    render_null_counts(&nulls);
    let total_nulls: usize = nulls.iter().map(|(_, n)| n).sum();
    if total_nulls == 0 {
        print_info("There is not a single missing value");
    }

    // Step 6: Save results
    print_step_header(6, "Save Results");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut df, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
    print_step_time(step_start.elapsed());

    if cli.report {
        let report_path = cli
            .report_path()
            .ok_or_else(|| anyhow::anyhow!("Could not derive a report path from the input path"))?;
        let export = CleaningExport {
            metadata: RunMetadata::new(input, cli.correlation_threshold),
            shape,
            columns: df
                .get_column_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            // Recomputed after the drop; the pre-drop list is stale
            numeric_columns: numeric_columns(&df),
            degenerate_columns: degenerate,
            redundant_pairs: redundant,
            duplicate_rows: duplicates,
            null_counts: nulls,
        };
        export_cleaning_report(&export, &report_path)?;
        print_success(&format!("Report written to {}", report_path.display()));
    }

    summary.display();
    print_completion();

    Ok(())
}

fn run_visualize(
    input: &Path,
    columns: &[String],
    bins: usize,
    max_categories: usize,
    group: Option<&GroupSpec>,
    infer_schema_length: usize,
) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    println!();
    let (df, rows, cols, _) = load_dataset_with_progress(input, infer_schema_length)?;
    print_success(&format!("Dataset loaded ({} rows, {} columns)", rows, cols));

    // Prune single-value columns first so charts reflect the cleaned table
    let degenerate = degenerate_columns(&df)?;
    let (df, _) = drop_degenerate(&df, &degenerate);
    if !degenerate.is_empty() {
        print_info(&format!(
            "Dropped {} single-value column(s) before charting",
            degenerate.len()
        ));
    }

    print_step_header(1, "Correlation Map");
    let (matrix, names) = correlation_matrix(&df)?;
    render_heatmap(&matrix, &names);

    print_step_header(2, "Column Charts");
    let selected: Vec<String> = if columns.is_empty() {
        default_chart_columns(&df, max_categories)
    } else {
        columns.to_vec()
    };

    for column in &selected {
        // Fails loudly on an unknown column name instead of skipping it
        let counts = value_counts(&df, column)?;
        let is_numeric = df
            .column(column)
            .map(|c| c.dtype().is_primitive_numeric())
            .unwrap_or(false);

        if counts.entries.len() <= max_categories {
            render_frequency_chart(&counts);
        } else if is_numeric {
            render_histogram(&histogram(&df, column, bins)?);
        } else {
            print_info(&format!(
                "'{}' has {} distinct values; skipping chart",
                column,
                counts.entries.len()
            ));
        }
    }

    if let Some(spec) = group {
        print_step_header(3, "Grouped Summary");
        let summaries = grouped_summary(&df, &spec.group_by, &spec.measure)?;
        render_group_summary(&spec.group_by, &spec.measure, &summaries);
    }

    print_completion();
    Ok(())
}

/// Default chart selection: every low-cardinality column, plus the numeric
/// columns that are too spread out for a frequency chart (histogrammed).
fn default_chart_columns(df: &polars::prelude::DataFrame, max_categories: usize) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| {
            let low_cardinality = col
                .as_materialized_series()
                .n_unique()
                .map(|n| n <= max_categories)
                .unwrap_or(false);
            low_cardinality || col.dtype().is_primitive_numeric()
        })
        .map(|col| col.name().to_string())
        .collect()
}
