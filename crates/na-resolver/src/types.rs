use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value as seen by the imputers.
///
/// Inside a [`polars::prelude::DataFrame`] the missing marker is a null; this
/// enum is how callers name a value to write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Number(_) => "numeric",
            CellValue::Text(_) => "text",
            CellValue::Missing => "missing",
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "'{}'", s),
            CellValue::Missing => write!(f, "null"),
        }
    }
}

/// A column whose values are expected to come from a small text domain
/// (e.g. `Y`/`N`). Numeric-looking cells in such a column are treated as
/// missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub name: String,
    /// Expected literals, shown in the report. The detector flags numbers,
    /// not out-of-domain text.
    #[serde(default)]
    pub expected: Vec<String>,
}

impl CategoricalColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: Vec::new(),
        }
    }

    pub fn with_expected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected = values.into_iter().map(Into::into).collect();
        self
    }
}

/// One imputation applied by the resolver, in configured order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImputationStep {
    /// Replace every missing cell of `column` with `value`.
    ConstantFill { column: String, value: CellValue },
    /// Write `value` at (`row`, `column`) whether or not it was missing.
    Override {
        row: usize,
        column: String,
        value: CellValue,
    },
    /// Replace every missing cell of `column` with the column median.
    MedianFill { column: String },
}

impl ImputationStep {
    pub fn column(&self) -> &str {
        match self {
            ImputationStep::ConstantFill { column, .. }
            | ImputationStep::Override { column, .. }
            | ImputationStep::MedianFill { column } => column,
        }
    }
}

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMissing {
    pub name: String,
    pub missing: usize,
    pub percentage: f64,
}

/// Per-column and total missing-value counts for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSummary {
    pub rows: usize,
    pub columns: Vec<ColumnMissing>,
    pub total: usize,
}

impl MissingSummary {
    /// Whether any cell in the dataset is missing.
    pub fn any_missing(&self) -> bool {
        self.total > 0
    }

    /// Missing count for a named column, if present.
    pub fn missing_in(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.name == column)
            .map(|c| c.missing)
    }
}

impl fmt::Display for MissingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max(6);
        for col in &self.columns {
            writeln!(f, "{:<width$} {:>6}", col.name, col.missing, width = width)?;
        }
        write!(f, "{:<width$} {:>6}", "TOTAL", self.total, width = width)
    }
}

/// Cells reclassified as missing in one categorical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub column: String,
    pub reclassified: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expected: Vec<String>,
}

/// Everything the resolver did to a dataset in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
    pub shape: (usize, usize),
    pub violations: Vec<ViolationRecord>,
    pub summary_before: MissingSummary,
    pub summary_after: MissingSummary,
    pub steps: Vec<String>,
}

impl ResolutionReport {
    /// Number of missing cells the imputation steps resolved.
    pub fn resolved(&self) -> usize {
        self.summary_before
            .total
            .saturating_sub(self.summary_after.total)
    }
}
