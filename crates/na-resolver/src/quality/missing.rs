use crate::types::{ColumnMissing, MissingSummary};
use polars::prelude::*;
use tracing::debug;

pub struct MissingValueAnalyzer;

impl MissingValueAnalyzer {
    /// Count missing cells per column and in total.
    ///
    /// The total is always the sum of the per-column counts.
    pub fn summarize(df: &DataFrame) -> MissingSummary {
        let rows = df.height();
        let columns: Vec<ColumnMissing> = df
            .get_columns()
            .iter()
            .map(|col| {
                let missing = col.null_count();
                let percentage = if rows > 0 {
                    (missing as f64 / rows as f64) * 100.0
                } else {
                    0.0
                };
                ColumnMissing {
                    name: col.name().to_string(),
                    missing,
                    percentage,
                }
            })
            .collect();

        let total = columns.iter().map(|c| c.missing).sum();
        debug!("Missing cells: {} across {} columns", total, columns.len());

        MissingSummary {
            rows,
            columns,
            total,
        }
    }
}
