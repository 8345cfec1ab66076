//! Custom error types for the missing-value resolver.
//!
//! This module provides the error hierarchy using `thiserror` so that each
//! failing operation reports which column, row or value it choked on.
//!
//! Errors are serializable, allowing them to be emitted alongside the JSON
//! report produced by the binary.

use crate::config::ConfigValidationError;
use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the resolver.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Input file does not exist.
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    /// Positional write outside the frame.
    #[error("Row {row} is out of bounds for column '{column}' (height {height})")]
    RowOutOfBounds {
        row: usize,
        column: String,
        height: usize,
    },

    /// A value of the wrong kind was written into a column.
    #[error("Cannot write {value_kind} value into column '{column}' of type {dtype}")]
    TypeMismatch {
        column: String,
        dtype: String,
        value_kind: String,
    },

    /// Numeric statistic requested on a non-numeric column.
    #[error("Column '{column}' is not numeric (found {dtype})")]
    NotNumeric { column: String, dtype: String },

    /// The missing-marker cannot be used as a fill value.
    #[error("Invalid fill value for column '{0}': the missing marker cannot fill itself")]
    InvalidFillValue(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ResolverError>,
    },
}

impl ResolverError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ResolverError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code, used in the JSON form of the error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::RowOutOfBounds { .. } => "ROW_OUT_OF_BOUNDS",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::NotNumeric { .. } => "NOT_NUMERIC",
            Self::InvalidFillValue(_) => "INVALID_FILL_VALUE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for ResolverError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ResolverError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ResolverError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            ResolverError::ColumnNotFound("ST_NUM".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            ResolverError::RowOutOfBounds {
                row: 9,
                column: "ST_NUM".to_string(),
                height: 3,
            }
            .error_code(),
            "ROW_OUT_OF_BOUNDS"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let error: ResolverError =
            ConfigValidationError::DuplicateToken("--".to_string()).into();
        assert_eq!(error.error_code(), "INVALID_CONFIG");
        assert!(error.to_string().contains("--"));
    }

    #[test]
    fn test_error_serialization() {
        let error = ResolverError::ColumnNotFound("OWN_OCCUPIED".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("OWN_OCCUPIED"));
    }

    #[test]
    fn test_with_context() {
        let error = ResolverError::NotNumeric {
            column: "ST_NAME".to_string(),
            dtype: "str".to_string(),
        }
        .with_context("During median fill");
        assert!(error.to_string().contains("During median fill"));
        assert_eq!(error.error_code(), "NOT_NUMERIC"); // Preserves original code
    }
}
