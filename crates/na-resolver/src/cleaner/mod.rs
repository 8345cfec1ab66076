//! Data cleaning module for categorical columns.
//!
//! This module provides functionality for:
//! - Reclassifying numeric-looking values in a categorical column as missing

mod type_violations;

pub use type_violations::TypeViolationDetector;
