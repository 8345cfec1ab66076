//! Configuration types for the missing-value resolver.
//!
//! This module provides configuration options using the builder pattern.
//! The defaults reproduce the property-data walkthrough: extra missing
//! tokens `n/a`, `na`, `--`, the `OWN_OCCUPIED` Y/N column, a constant fill
//! and positional override on `ST_NUM`, and a median fill on `NUM_BEDROOMS`.

use crate::types::{CategoricalColumn, CellValue, ImputationStep};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Input path used when none is given.
pub const DEFAULT_INPUT_PATH: &str = "data/property_data.csv";

/// Extra missing-token spellings used when none are given.
pub const DEFAULT_EXTRA_TOKENS: [&str; 3] = ["n/a", "na", "--"];

/// Configuration for the resolver.
///
/// Use [`ResolverConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use na_resolver::config::ResolverConfig;
/// use na_resolver::types::ImputationStep;
///
/// let config = ResolverConfig::builder()
///     .extra_missing_tokens(["--", "?"])
///     .categorical_column("OWN_OCCUPIED")
///     .step(ImputationStep::MedianFill { column: "NUM_BEDROOMS".into() })
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// CSV file to load.
    /// Default: "data/property_data.csv"
    pub input_path: PathBuf,

    /// Spellings read as missing in addition to the built-in defaults.
    /// Default: ["n/a", "na", "--"]
    pub extra_missing_tokens: Vec<String>,

    /// Columns scanned for numeric-looking values that should be missing.
    /// Default: OWN_OCCUPIED (Y/N)
    pub categorical_columns: Vec<CategoricalColumn>,

    /// Imputations applied in order after the summary is taken.
    pub steps: Vec<ImputationStep>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            extra_missing_tokens: DEFAULT_EXTRA_TOKENS.iter().map(|s| s.to_string()).collect(),
            categorical_columns: vec![
                CategoricalColumn::new("OWN_OCCUPIED").with_expected(["Y", "N"]),
            ],
            steps: default_steps(),
        }
    }
}

fn default_steps() -> Vec<ImputationStep> {
    vec![
        ImputationStep::ConstantFill {
            column: "ST_NUM".to_string(),
            value: CellValue::Number(125.0),
        },
        ImputationStep::Override {
            row: 2,
            column: "ST_NUM".to_string(),
            value: CellValue::Number(125.0),
        },
        ImputationStep::MedianFill {
            column: "NUM_BEDROOMS".to_string(),
        },
    ]
}

impl ResolverConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let mut seen = HashSet::new();
        for token in &self.extra_missing_tokens {
            if !seen.insert(token.as_str()) {
                return Err(ConfigValidationError::DuplicateToken(token.clone()));
            }
        }

        for col in &self.categorical_columns {
            if col.name.trim().is_empty() {
                return Err(ConfigValidationError::EmptyColumnName(
                    "categorical_columns".to_string(),
                ));
            }
        }

        for (i, step) in self.steps.iter().enumerate() {
            if step.column().trim().is_empty() {
                return Err(ConfigValidationError::EmptyColumnName(format!("steps[{}]", i)));
            }
            if let ImputationStep::ConstantFill { column, value } = step
                && value.is_missing()
            {
                return Err(ConfigValidationError::MissingFillValue(column.clone()));
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing token '{0}' is listed more than once")]
    DuplicateToken(String),

    #[error("Empty column name in {0}")]
    EmptyColumnName(String),

    #[error("Constant fill for '{0}' uses the missing marker as its value")]
    MissingFillValue(String),
}

/// Builder for [`ResolverConfig`] with fluent API.
///
/// Unset fields fall back to [`ResolverConfig::default`]; list setters
/// replace the default list on first use.
#[derive(Debug, Default)]
pub struct ResolverConfigBuilder {
    input_path: Option<PathBuf>,
    extra_missing_tokens: Option<Vec<String>>,
    categorical_columns: Option<Vec<CategoricalColumn>>,
    steps: Option<Vec<ImputationStep>>,
}

impl ResolverConfigBuilder {
    /// Set the CSV file to load.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the extra missing-token spellings.
    pub fn extra_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_missing_tokens = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Add a categorical column with no declared domain.
    pub fn categorical_column(self, name: impl Into<String>) -> Self {
        self.categorical(CategoricalColumn::new(name))
    }

    /// Add a categorical column.
    pub fn categorical(mut self, column: CategoricalColumn) -> Self {
        self.categorical_columns
            .get_or_insert_with(Vec::new)
            .push(column);
        self
    }

    /// Append an imputation step.
    pub fn step(mut self, step: ImputationStep) -> Self {
        self.steps.get_or_insert_with(Vec::new).push(step);
        self
    }

    /// Replace all imputation steps. An empty list disables imputation.
    pub fn steps(mut self, steps: Vec<ImputationStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `ResolverConfig` or an error if validation fails.
    pub fn build(self) -> Result<ResolverConfig, ConfigValidationError> {
        let defaults = ResolverConfig::default();
        let config = ResolverConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            extra_missing_tokens: self
                .extra_missing_tokens
                .unwrap_or(defaults.extra_missing_tokens),
            categorical_columns: self
                .categorical_columns
                .unwrap_or(defaults.categorical_columns),
            steps: self.steps.unwrap_or(defaults.steps),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.extra_missing_tokens, vec!["n/a", "na", "--"]);
        assert_eq!(config.categorical_columns.len(), 1);
        assert_eq!(config.categorical_columns[0].name, "OWN_OCCUPIED");
        assert_eq!(config.steps.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ResolverConfig::builder().build().unwrap();
        assert_eq!(config.steps, ResolverConfig::default().steps);
    }

    #[test]
    fn test_builder_custom_values() {
        let config = ResolverConfig::builder()
            .input_path("other.csv")
            .extra_missing_tokens(["?"])
            .categorical_column("FLAG")
            .step(ImputationStep::MedianFill {
                column: "AGE".to_string(),
            })
            .build()
            .unwrap();

        assert_eq!(config.input_path, PathBuf::from("other.csv"));
        assert_eq!(config.extra_missing_tokens, vec!["?"]);
        assert_eq!(config.categorical_columns, vec![CategoricalColumn::new("FLAG")]);
        assert_eq!(config.steps.len(), 1);
    }

    #[test]
    fn test_builder_empty_steps() {
        let config = ResolverConfig::builder().steps(Vec::new()).build().unwrap();
        assert!(config.steps.is_empty());
    }

    #[test]
    fn test_validation_duplicate_token() {
        let result = ResolverConfig::builder()
            .extra_missing_tokens(["--", "--"])
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::DuplicateToken(_)
        ));
    }

    #[test]
    fn test_validation_empty_column_name() {
        let result = ResolverConfig::builder()
            .step(ImputationStep::MedianFill {
                column: "  ".to_string(),
            })
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::EmptyColumnName(_)
        ));
    }

    #[test]
    fn test_validation_missing_fill_value() {
        let result = ResolverConfig::builder()
            .step(ImputationStep::ConstantFill {
                column: "ST_NUM".to_string(),
                value: CellValue::Missing,
            })
            .build();

        assert!(matches!(
            result.unwrap_err(),
            ConfigValidationError::MissingFillValue(_)
        ));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "input_path": "raw/houses.csv",
            "extra_missing_tokens": ["--", "?"],
            "categorical_columns": [{"name": "OWN_OCCUPIED", "expected": ["Y", "N"]}],
            "steps": [
                {"kind": "constant_fill", "column": "ST_NUM", "value": 125},
                {"kind": "median_fill", "column": "NUM_BEDROOMS"}
            ]
        }"#;

        let config: ResolverConfig =
            serde_json::from_str(json).expect("Should deserialize from JSON");

        assert_eq!(config.input_path, PathBuf::from("raw/houses.csv"));
        assert_eq!(config.extra_missing_tokens, vec!["--", "?"]);
        assert_eq!(config.categorical_columns[0].expected, vec!["Y", "N"]);
        assert_eq!(
            config.steps[0],
            ImputationStep::ConstantFill {
                column: "ST_NUM".to_string(),
                value: CellValue::Number(125.0),
            }
        );
        assert!(config.validate().is_ok());
    }
}
