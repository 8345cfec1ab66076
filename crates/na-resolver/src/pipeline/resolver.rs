//! The missing-value resolver.
//!
//! Runs the fixed sequence over one exclusively owned dataset:
//! type-violation detection, missing summary, imputation, final summary.

use crate::cleaner::TypeViolationDetector;
use crate::config::ResolverConfig;
use crate::error::{Result, ResultExt};
use crate::loader::{MissingTokens, load_csv};
use crate::pipeline::StepExecutor;
use crate::quality::MissingValueAnalyzer;
use crate::types::ResolutionReport;
use polars::prelude::*;
use tracing::info;

/// Resolves missing values in a dataset according to a [`ResolverConfig`].
///
/// # Example
///
/// ```rust,ignore
/// use na_resolver::{Resolver, ResolverConfig};
///
/// let resolver = Resolver::new(ResolverConfig::default());
/// let (df, report) = resolver.load_and_run()?;
/// println!("{} missing cells left", report.summary_after.total);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The token set used when loading: built-in defaults plus the
    /// configured extras.
    pub fn missing_tokens(&self) -> MissingTokens {
        MissingTokens::with_extra(self.config.extra_missing_tokens.iter().cloned())
    }

    /// Load the configured input file.
    pub fn load(&self) -> Result<DataFrame> {
        self.config.validate()?;
        load_csv(&self.config.input_path, &self.missing_tokens())
            .context(format!("Loading '{}'", self.config.input_path.display()))
    }

    /// Load the configured input file and resolve it.
    pub fn load_and_run(&self) -> Result<(DataFrame, ResolutionReport)> {
        let df = self.load()?;
        let (df, mut report) = self.run(df)?;
        report.input_file = Some(self.config.input_path.display().to_string());
        Ok((df, report))
    }

    /// Resolve an already loaded dataset.
    pub fn run(&self, mut df: DataFrame) -> Result<(DataFrame, ResolutionReport)> {
        self.config.validate()?;
        info!("Resolving missing values in {:?} dataset", df.shape());

        let violations = TypeViolationDetector::detect_all(&mut df, &self.config.categorical_columns)?;

        let summary_before = MissingValueAnalyzer::summarize(&df);
        info!(
            "{} missing value(s) across {} column(s)",
            summary_before.total,
            summary_before.columns.iter().filter(|c| c.missing > 0).count()
        );

        let mut steps = Vec::new();
        StepExecutor::apply_all(&mut df, &self.config.steps, &mut steps)?;

        let summary_after = MissingValueAnalyzer::summarize(&df);
        info!(
            "Resolution complete: {} -> {} missing value(s)",
            summary_before.total, summary_after.total
        );

        let report = ResolutionReport {
            input_file: None,
            shape: df.shape(),
            violations,
            summary_before,
            summary_after,
            steps,
        };
        Ok((df, report))
    }
}
