use crate::error::Result;
use crate::types::ResolutionReport;
use crate::utils::{column_series, text_cells};
use polars::prelude::*;
use std::fmt::Write;

/// Rows shown by [`head`].
pub const HEAD_ROWS: usize = 5;

/// The first [`HEAD_ROWS`] rows of the dataset.
pub fn head(df: &DataFrame) -> DataFrame {
    df.head(Some(HEAD_ROWS))
}

/// Missing flag per row of `column`, in row order.
pub fn null_mask(df: &DataFrame, column: &str) -> Result<Vec<bool>> {
    let mask = column_series(df, column)?.is_null();
    Ok(mask.into_iter().map(|v| v.unwrap_or(false)).collect())
}

/// One `index  value` line per row, followed by the column name and dtype.
pub fn column_preview(df: &DataFrame, column: &str) -> Result<String> {
    let series = column_series(df, column)?;
    let cells = text_cells(series)?;
    let lines = cells
        .iter()
        .map(|c| c.as_deref().unwrap_or("null").to_string())
        .collect::<Vec<_>>();
    Ok(render_indexed(column, &series.dtype().to_string(), &lines))
}

/// Same layout as [`column_preview`] with `true` where the cell is missing.
pub fn null_mask_preview(df: &DataFrame, column: &str) -> Result<String> {
    let lines = null_mask(df, column)?
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>();
    Ok(render_indexed(column, "bool", &lines))
}

fn render_indexed(name: &str, dtype: &str, lines: &[String]) -> String {
    let index_width = lines.len().saturating_sub(1).to_string().len();
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(out, "{:<index_width$}    {}", i, line, index_width = index_width);
    }
    let _ = write!(out, "Name: {}, dtype: {}", name, dtype);
    out
}

/// Human-readable summary of one resolver run.
pub fn render_report(report: &ResolutionReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "MISSING VALUES RESOLVED");
    let _ = writeln!(out, "{}", rule);
    if let Some(ref input) = report.input_file {
        let _ = writeln!(out, "Input: {}", input);
    }
    let _ = writeln!(
        out,
        "Shape: {} rows x {} columns",
        report.shape.0, report.shape.1
    );
    let _ = writeln!(out);

    for v in &report.violations {
        let domain = if v.expected.is_empty() {
            String::new()
        } else {
            format!(" (expected {})", v.expected.join("/"))
        };
        let _ = writeln!(
            out,
            "Reclassified {} numeric value(s) in '{}'{} as missing",
            v.reclassified, v.column, domain
        );
    }

    let _ = writeln!(out, "\nMissing values per column:");
    let _ = writeln!(out, "{}", report.summary_before);
    let _ = writeln!(out, "Any missing: {}", report.summary_before.any_missing());
    let _ = writeln!(out, "Total missing: {}", report.summary_before.total);

    if !report.steps.is_empty() {
        let _ = writeln!(out, "\nImputation:");
        for step in &report.steps {
            let _ = writeln!(out, "  - {}", step);
        }
    }

    let _ = writeln!(
        out,
        "\nMissing after imputation: {} ({} resolved)",
        report.summary_after.total,
        report.resolved()
    );
    let _ = write!(out, "{}", rule);
    out
}
