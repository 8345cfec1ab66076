//! Detection of out-of-domain numeric values in categorical columns.

use crate::error::{Result, ResultExt};
use crate::types::{CategoricalColumn, ViolationRecord};
use crate::utils::{column_series, text_cells, try_parse_number};
use polars::prelude::*;
use tracing::{debug, info};

/// Reclassifies numeric-looking cells in text-valued columns as missing.
///
/// A column such as `OWN_OCCUPIED` is expected to hold `Y` or `N`. A value
/// like `12` that parses as a number cannot belong to that domain, so it is
/// overwritten with null. Anything that does not parse is left as it is.
pub struct TypeViolationDetector;

impl TypeViolationDetector {
    /// Scan `column` in row order and null out every cell that parses as a
    /// number. Returns how many cells were reclassified.
    ///
    /// Columns that are not text are read through their text form, so a
    /// column polars inferred as numeric loses all of its values and comes
    /// back as text. A column with nothing reclassified keeps its dtype.
    pub fn detect_numeric_violations(df: &mut DataFrame, column: &str) -> Result<usize> {
        let series = column_series(df, column)?;
        let mut cells = text_cells(series)?;

        let mut reclassified = 0;
        for (row, cell) in cells.iter_mut().enumerate() {
            let Some(raw) = cell.as_deref() else {
                continue;
            };
            if let Some(number) = try_parse_number(raw) {
                debug!(
                    "'{}' row {}: numeric value {} is out of domain",
                    column, row, number
                );
                *cell = None;
                reclassified += 1;
            }
        }

        if reclassified > 0 {
            let rebuilt = Series::new(column.into(), cells);
            df.replace(column, rebuilt)
                .context(format!("Rewriting '{}'", column))?;
        }

        info!(
            "Reclassified {} numeric value(s) in '{}' as missing",
            reclassified, column
        );
        Ok(reclassified)
    }

    /// Run detection for every configured categorical column, in order.
    pub fn detect_all(
        df: &mut DataFrame,
        columns: &[CategoricalColumn],
    ) -> Result<Vec<ViolationRecord>> {
        let mut records = Vec::with_capacity(columns.len());
        for col in columns {
            let reclassified = Self::detect_numeric_violations(df, &col.name)?;
            records.push(ViolationRecord {
                column: col.name.clone(),
                reclassified,
                expected: col.expected.clone(),
            });
        }
        Ok(records)
    }
}
