//! Imputation module for handling missing values.
//!
//! This module provides the replacement rules:
//! - Statistical imputation (constant fill, median fill)
//! - Positional override of a single cell

mod positional;
mod statistical;

pub use positional::PositionalImputer;
pub use statistical::StatisticalImputer;

use crate::error::ResolverError;
use polars::prelude::DataType;

fn type_mismatch(column: &str, dtype: &DataType, value_kind: &str) -> ResolverError {
    ResolverError::TypeMismatch {
        column: column.to_string(),
        dtype: dtype.to_string(),
        value_kind: value_kind.to_string(),
    }
}
