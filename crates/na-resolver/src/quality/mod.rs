//! Data quality module for missing-value accounting.
//!
//! Provides per-column and total missing counts over a dataset.

mod missing;

pub use missing::MissingValueAnalyzer;
