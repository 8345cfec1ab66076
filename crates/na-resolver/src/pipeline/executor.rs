//! Imputation step executor.
//!
//! Dispatches each configured [`ImputationStep`] to its imputer.

use crate::error::{Result, ResultExt};
use crate::imputers::{PositionalImputer, StatisticalImputer};
use crate::types::ImputationStep;
use polars::prelude::*;
use tracing::info;

/// Applies imputation steps to a DataFrame.
pub struct StepExecutor;

impl StepExecutor {
    /// Apply one step. Human-readable descriptions of what changed are
    /// appended to `processing_steps`.
    pub fn apply(
        df: &mut DataFrame,
        step: &ImputationStep,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        match step {
            ImputationStep::ConstantFill { column, value } => {
                StatisticalImputer::fill_constant(df, column, value, processing_steps)
                    .context(format!("Constant fill of '{}'", column))?;
            }
            ImputationStep::Override { row, column, value } => {
                PositionalImputer::set_cell(df, *row, column, value, processing_steps)
                    .context(format!("Override of '{}' row {}", column, row))?;
            }
            ImputationStep::MedianFill { column } => {
                StatisticalImputer::fill_median(df, column, processing_steps)
                    .context(format!("Median fill of '{}'", column))?;
            }
        }
        Ok(())
    }

    /// Apply every step in order. The first failing step aborts the run;
    /// steps already applied stay applied.
    pub fn apply_all(
        df: &mut DataFrame,
        steps: &[ImputationStep],
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            info!("Step {}/{}: {:?}", i + 1, steps.len(), step);
            Self::apply(df, step, processing_steps)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolverError;
    use crate::types::CellValue;
    use crate::utils::numeric_cells;

    #[test]
    fn test_apply_all_in_order() {
        let mut df = df![
            "ST_NUM" => [Some(104i64), None, None],
        ]
        .unwrap();
        let steps = vec![
            ImputationStep::ConstantFill {
                column: "ST_NUM".to_string(),
                value: CellValue::Number(125.0),
            },
            ImputationStep::Override {
                row: 0,
                column: "ST_NUM".to_string(),
                value: CellValue::Number(1.0),
            },
        ];
        let mut log = Vec::new();

        StepExecutor::apply_all(&mut df, &steps, &mut log).unwrap();

        let values = numeric_cells(df.column("ST_NUM").unwrap().as_materialized_series()).unwrap();
        assert_eq!(values, vec![Some(1.0), Some(125.0), Some(125.0)]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_apply_all_stops_at_first_error() {
        let mut df = df![
            "ST_NUM" => [Some(104i64), None],
        ]
        .unwrap();
        let steps = vec![
            ImputationStep::MedianFill {
                column: "MISSING_COL".to_string(),
            },
            ImputationStep::ConstantFill {
                column: "ST_NUM".to_string(),
                value: CellValue::Number(125.0),
            },
        ];
        let mut log = Vec::new();

        let err = StepExecutor::apply_all(&mut df, &steps, &mut log).unwrap_err();

        assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
        assert!(matches!(err, ResolverError::WithContext { .. }));
        assert_eq!(df.column("ST_NUM").unwrap().null_count(), 1);
    }
}
