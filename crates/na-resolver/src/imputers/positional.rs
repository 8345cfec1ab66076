//! Single-cell overrides addressed by row position and column name.

use super::type_mismatch;
use crate::error::{ResolverError, Result, ResultExt};
use crate::types::CellValue;
use crate::utils::{column_series, is_numeric_dtype, is_text_dtype, numeric_cells, text_cells};
use polars::prelude::*;
use tracing::debug;

/// Writes one value at a fixed (row, column) address.
pub struct PositionalImputer;

impl PositionalImputer {
    /// Overwrite the cell at `row` in `col_name` with `value`.
    ///
    /// The write is unconditional: the previous content is replaced whether
    /// or not it was missing, and a later write to the same address wins.
    /// [`CellValue::Missing`] clears the cell.
    pub fn set_cell(
        df: &mut DataFrame,
        row: usize,
        col_name: &str,
        value: &CellValue,
        processing_steps: &mut Vec<String>,
    ) -> Result<()> {
        let series = column_series(df, col_name)?;
        let height = series.len();
        if row >= height {
            return Err(ResolverError::RowOutOfBounds {
                row,
                column: col_name.to_string(),
                height,
            });
        }

        let dtype = series.dtype().clone();
        let rebuilt = if is_numeric_dtype(&dtype) {
            let mut cells = numeric_cells(series)?;
            cells[row] = match value {
                CellValue::Number(n) => Some(*n),
                CellValue::Missing => None,
                CellValue::Text(_) => return Err(type_mismatch(col_name, &dtype, value.kind())),
            };
            Series::new(col_name.into(), cells)
        } else if is_text_dtype(&dtype) {
            let mut cells = text_cells(series)?;
            cells[row] = match value {
                CellValue::Number(n) => Some(n.to_string()),
                CellValue::Text(s) => Some(s.clone()),
                CellValue::Missing => None,
            };
            Series::new(col_name.into(), cells)
        } else {
            return Err(type_mismatch(col_name, &dtype, value.kind()));
        };

        df.replace(col_name, rebuilt)
            .context(format!("Overriding '{}' row {}", col_name, row))?;

        debug!("Set '{}' row {} to {}", col_name, row, value);
        processing_steps.push(format!("Set '{}' row {} to {}", col_name, row, value));

        Ok(())
    }
}
