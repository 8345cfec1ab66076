//! Missing-Value Resolver
//!
//! Detects, counts and replaces missing values in a delimited tabular dataset,
//! built on Polars.
//!
//! # Overview
//!
//! One dataset is loaded, then mutated in place by a fixed sequence of steps:
//!
//! - **Load**: CSV parsing where an extended set of raw spellings
//!   (`n/a`, `--`, ...) is read as missing alongside the usual defaults
//! - **Type-violation detection**: numeric-looking values in a categorical
//!   column (e.g. `12` in a `Y`/`N` column) become missing
//! - **Summary**: missing counts per column and in total
//! - **Imputation**: constant fill, positional override and median fill
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use na_resolver::{Resolver, ResolverConfig, ImputationStep};
//!
//! let config = ResolverConfig::builder()
//!     .input_path("data/property_data.csv")
//!     .extra_missing_tokens(["n/a", "na", "--"])
//!     .categorical_column("OWN_OCCUPIED")
//!     .steps(vec![ImputationStep::MedianFill { column: "NUM_BEDROOMS".into() }])
//!     .build()?;
//!
//! let (df, report) = Resolver::new(config).load_and_run()?;
//! println!("{}", report.summary_before);
//! println!("Any missing after: {}", report.summary_after.any_missing());
//! ```
//!
//! # Individual operations
//!
//! Each step is also usable on its own against a `&mut DataFrame`:
//!
//! ```rust,ignore
//! use na_resolver::{MissingTokens, MissingValueAnalyzer, StatisticalImputer, TypeViolationDetector};
//! use na_resolver::loader::load_csv;
//!
//! let mut df = load_csv("data/property_data.csv", &MissingTokens::with_extra(["--"]))?;
//! TypeViolationDetector::detect_numeric_violations(&mut df, "OWN_OCCUPIED")?;
//! let summary = MissingValueAnalyzer::summarize(&df);
//! let mut steps = Vec::new();
//! StatisticalImputer::fill_median(&mut df, "NUM_BEDROOMS", &mut steps)?;
//! ```

pub mod cleaner;
pub mod config;
pub mod error;
pub mod imputers;
pub mod loader;
pub mod pipeline;
pub mod quality;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use cleaner::TypeViolationDetector;
pub use config::{ConfigValidationError, ResolverConfig, ResolverConfigBuilder};
pub use error::{ResolverError, Result as ResolverResult, ResultExt};
pub use imputers::{PositionalImputer, StatisticalImputer};
pub use loader::{DEFAULT_NA_VALUES, MissingTokens};
pub use pipeline::{Resolver, StepExecutor};
pub use quality::MissingValueAnalyzer;
pub use types::{
    CategoricalColumn, CellValue, ColumnMissing, ImputationStep, MissingSummary,
    ResolutionReport, ViolationRecord,
};
pub use utils::{is_numeric_dtype, try_parse_number};
