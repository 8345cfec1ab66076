//! Shared utilities for the resolver.
//!
//! This module contains the column helpers used by the detector and the
//! imputers so each of them reads and rebuilds columns the same way.

use crate::error::{ResolverError, Result};
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType holds text.
#[inline]
pub fn is_text_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String | DataType::Categorical(_, _))
}

/// Look up a column and return it as a materialized Series.
pub fn column_series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| ResolverError::ColumnNotFound(name.to_string()))
}

// =============================================================================
// String Parsing Utilities
// =============================================================================

/// Try to interpret a raw cell as a number.
///
/// Surrounding whitespace is ignored. Empty strings and non-finite spellings
/// such as `inf` or `NaN` are not numbers.
///
/// This is wider than an integer-only check: decimal and exponent forms
/// (`1.5`, `.5`, `1e3`) count as numbers too, so a categorical cell holding
/// any of them is treated as missing.
///
/// # Example
///
/// ```rust,ignore
/// use na_resolver::utils::try_parse_number;
///
/// assert_eq!(try_parse_number(" 12 "), Some(12.0));
/// assert_eq!(try_parse_number("Y"), None);
/// ```
pub fn try_parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<i64>()
        .map(|n| n as f64)
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill null values in a numeric Series with a specific value.
///
/// The result is always `Float64`.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let values = series.cast(&DataType::Float64)?;
    let result: Vec<Option<f64>> = values
        .f64()?
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value)))
        .collect();

    Ok(Series::new(series.name().clone(), result))
}

/// Fill null values in a string Series with a specific value.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let values = series.cast(&DataType::String)?;
    let result: Vec<Option<String>> = values
        .str()?
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value).to_string()))
        .collect();

    Ok(Series::new(series.name().clone(), result))
}

/// Collect a Series into owned text cells, nulls preserved.
pub fn text_cells(series: &Series) -> PolarsResult<Vec<Option<String>>> {
    let values = series.cast(&DataType::String)?;
    Ok(values
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Collect a numeric Series into `f64` cells, nulls preserved.
pub fn numeric_cells(series: &Series) -> PolarsResult<Vec<Option<f64>>> {
    let values = series.cast(&DataType::Float64)?;
    Ok(values.f64()?.into_iter().collect())
}

// =============================================================================
// Tests
// =============================================================================
