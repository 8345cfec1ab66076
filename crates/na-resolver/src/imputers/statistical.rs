//! Statistical imputation methods.
//!
//! Provides constant and median fills for a single column.

use super::type_mismatch;
use crate::error::{ResolverError, Result, ResultExt};
use crate::types::CellValue;
use crate::utils::{
    column_series, fill_numeric_nulls, fill_string_nulls, is_numeric_dtype, is_text_dtype,
};
use polars::prelude::*;
use tracing::{debug, warn};

/// Statistical imputation methods for filling missing values.
pub struct StatisticalImputer;

impl StatisticalImputer {
    /// Replace every missing cell of `col_name` with `value`.
    ///
    /// Numeric columns take a [`CellValue::Number`] and come back as
    /// `Float64`. Text columns take text, or a number written as text.
    /// Returns the number of cells filled.
    pub fn fill_constant(
        df: &mut DataFrame,
        col_name: &str,
        value: &CellValue,
        processing_steps: &mut Vec<String>,
    ) -> Result<usize> {
        if value.is_missing() {
            return Err(ResolverError::InvalidFillValue(col_name.to_string()));
        }

        let series = column_series(df, col_name)?;
        let missing = series.null_count();
        let dtype = series.dtype().clone();

        let filled = match (value, is_numeric_dtype(&dtype), is_text_dtype(&dtype)) {
            (CellValue::Number(n), true, _) => fill_numeric_nulls(series, *n)?,
            (CellValue::Number(n), false, true) => fill_string_nulls(series, &n.to_string())?,
            (CellValue::Text(s), false, true) => fill_string_nulls(series, s)?,
            _ => return Err(type_mismatch(col_name, &dtype, value.kind())),
        };

        if missing == 0 {
            debug!("No missing values in '{}', constant fill skipped", col_name);
            return Ok(0);
        }

        df.replace(col_name, filled)
            .context(format!("Constant fill of '{}'", col_name))?;

        processing_steps.push(format!(
            "Filled {} missing value(s) in '{}' with constant {}",
            missing, col_name, value
        ));

        Ok(missing)
    }

    /// Replace every missing cell of `col_name` with the median of its
    /// non-missing values.
    ///
    /// The median is computed once, before any cell is written. Returns the
    /// median used, or `None` when the column has no values to take it from.
    pub fn fill_median(
        df: &mut DataFrame,
        col_name: &str,
        processing_steps: &mut Vec<String>,
    ) -> Result<Option<f64>> {
        let series = column_series(df, col_name)?;
        if !is_numeric_dtype(series.dtype()) {
            return Err(ResolverError::NotNumeric {
                column: col_name.to_string(),
                dtype: series.dtype().to_string(),
            });
        }

        let Some(median_val) = series.median() else {
            warn!("Column '{}' has no values, median fill skipped", col_name);
            return Ok(None);
        };

        if series.null_count() == 0 {
            debug!("No missing values in '{}', median fill skipped", col_name);
            return Ok(Some(median_val));
        }

        Self::fill_with_value(df, col_name, median_val, processing_steps, "median")?;
        Ok(Some(median_val))
    }

    /// Fill numeric column with a specific value.
    fn fill_with_value(
        df: &mut DataFrame,
        col_name: &str,
        fill_value: f64,
        processing_steps: &mut Vec<String>,
        method: &str,
    ) -> Result<()> {
        let series = column_series(df, col_name)?;
        let missing = series.null_count();
        let result = fill_numeric_nulls(series, fill_value)?;
        df.replace(col_name, result)
            .context(format!("Filling '{}' with {}", col_name, method))?;

        processing_steps.push(format!(
            "Filled {} missing value(s) in '{}' with {}: {:.2}",
            missing, col_name, method, fill_value
        ));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{numeric_cells, text_cells};

    fn values(df: &DataFrame, col: &str) -> Vec<Option<f64>> {
        numeric_cells(df.column(col).unwrap().as_materialized_series()).unwrap()
    }

    // ========================================================================
    // fill_median() tests
    // ========================================================================

    #[test]
    fn test_fill_median_bedrooms_scenario() {
        let mut df = df![
            "NUM_BEDROOMS" => [Some(3i64), None, Some(2), None, Some(4)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let median =
            StatisticalImputer::fill_median(&mut df, "NUM_BEDROOMS", &mut steps).unwrap();

        assert_eq!(median, Some(3.0));
        assert_eq!(
            values(&df, "NUM_BEDROOMS"),
            vec![Some(3.0), Some(3.0), Some(2.0), Some(3.0), Some(4.0)]
        );
        assert!(steps[0].contains("median"));
        assert!(steps[0].contains("3.00"));
    }

    #[test]
    fn test_fill_median_even_count() {
        let mut df = df![
            "values" => [Some(1.0), None, Some(3.0)],
        ]
        .unwrap();
        let mut steps = Vec::new();

        StatisticalImputer::fill_median(&mut df, "values", &mut steps).unwrap();

        // median of [1, 3] = 2
        assert_eq!(values(&df, "values"), vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_fill_median_idempotent() {
        let mut df = df![
            "values" => [Some(1.0), None, Some(5.0), None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let first = StatisticalImputer::fill_median(&mut df, "values", &mut steps).unwrap();
        let after_first = values(&df, "values");
        let second = StatisticalImputer::fill_median(&mut df, "values", &mut steps).unwrap();

        assert_eq!(first, Some(3.0));
        assert_eq!(second, Some(3.0));
        assert_eq!(values(&df, "values"), after_first);
        // Only the first run did any work
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_fill_median_all_missing() {
        let mut df = df![
            "values" => [Option::<f64>::None, None, None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let median = StatisticalImputer::fill_median(&mut df, "values", &mut steps).unwrap();

        assert_eq!(median, None);
        assert_eq!(df.column("values").unwrap().null_count(), 3);
        assert!(steps.is_empty());
    }

    #[test]
    fn test_fill_median_text_column() {
        let mut df = df![
            "ST_NAME" => [Some("PUTNAM"), None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let result = StatisticalImputer::fill_median(&mut df, "ST_NAME", &mut steps);
        assert!(matches!(result, Err(ResolverError::NotNumeric { .. })));
    }

    #[test]
    fn test_fill_median_nonexistent_column() {
        let mut df = df!["other" => [1.0, 2.0]].unwrap();
        let mut steps = Vec::new();

        let result = StatisticalImputer::fill_median(&mut df, "values", &mut steps);
        assert!(matches!(result, Err(ResolverError::ColumnNotFound(_))));
    }

    // ========================================================================
    // fill_constant() tests
    // ========================================================================

    #[test]
    fn test_fill_constant_numeric() {
        let mut df = df![
            "ST_NUM" => [Some(104i64), Some(197), None, Some(201), None],
        ]
        .unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::fill_constant(
            &mut df,
            "ST_NUM",
            &CellValue::Number(125.0),
            &mut steps,
        )
        .unwrap();

        assert_eq!(filled, 2);
        assert_eq!(
            values(&df, "ST_NUM"),
            vec![Some(104.0), Some(197.0), Some(125.0), Some(201.0), Some(125.0)]
        );
        assert!(steps[0].contains("ST_NUM"));
    }

    #[test]
    fn test_fill_constant_text() {
        let mut df = df![
            "OWN_OCCUPIED" => [Some("Y"), None, Some("N")],
        ]
        .unwrap();
        let mut steps = Vec::new();

        StatisticalImputer::fill_constant(&mut df, "OWN_OCCUPIED", &"Y".into(), &mut steps)
            .unwrap();

        let cells = text_cells(df.column("OWN_OCCUPIED").unwrap().as_materialized_series())
            .unwrap();
        assert_eq!(
            cells,
            vec![
                Some("Y".to_string()),
                Some("Y".to_string()),
                Some("N".to_string())
            ]
        );
    }

    #[test]
    fn test_fill_constant_number_into_text_column() {
        let mut df = df![
            "NUM_BATH" => [Some("1"), None, Some("HURLEY")],
        ]
        .unwrap();
        let mut steps = Vec::new();

        StatisticalImputer::fill_constant(&mut df, "NUM_BATH", &CellValue::Number(1.0), &mut steps)
            .unwrap();

        let cells = text_cells(df.column("NUM_BATH").unwrap().as_materialized_series()).unwrap();
        assert_eq!(cells[1], Some("1".to_string()));
    }

    #[test]
    fn test_fill_constant_text_into_numeric_column() {
        let mut df = df!["ST_NUM" => [Some(1i64), None]].unwrap();
        let mut steps = Vec::new();

        let result =
            StatisticalImputer::fill_constant(&mut df, "ST_NUM", &"none".into(), &mut steps);

        assert!(matches!(result, Err(ResolverError::TypeMismatch { .. })));
        assert_eq!(df.column("ST_NUM").unwrap().null_count(), 1);
    }

    #[test]
    fn test_fill_constant_missing_value_rejected() {
        let mut df = df!["ST_NUM" => [Some(1i64), None]].unwrap();
        let mut steps = Vec::new();

        let result =
            StatisticalImputer::fill_constant(&mut df, "ST_NUM", &CellValue::Missing, &mut steps);

        assert!(matches!(result, Err(ResolverError::InvalidFillValue(_))));
    }

    #[test]
    fn test_fill_constant_no_missing() {
        let mut df = df!["ST_NUM" => [1i64, 2]].unwrap();
        let mut steps = Vec::new();

        let filled = StatisticalImputer::fill_constant(
            &mut df,
            "ST_NUM",
            &CellValue::Number(125.0),
            &mut steps,
        )
        .unwrap();

        assert_eq!(filled, 0);
        assert_eq!(df.column("ST_NUM").unwrap().dtype(), &DataType::Int64);
        assert!(steps.is_empty());
    }
}
