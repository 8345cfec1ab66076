//! Pipeline module.
//!
//! This module provides the resolver that runs detection, summary and
//! imputation over one dataset, in that order.

mod executor;
mod resolver;

pub use executor::StepExecutor;
pub use resolver::Resolver;
