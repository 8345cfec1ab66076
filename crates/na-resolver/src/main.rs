//! CLI entry point for the missing-value resolver.

use anyhow::{Context, Result};
use clap::Parser;
use na_resolver::config::DEFAULT_INPUT_PATH;
use na_resolver::loader::load_csv;
use na_resolver::reporting::{column_preview, head, null_mask_preview, render_report};
use na_resolver::{MissingTokens, Resolver, ResolverConfig};
use polars::prelude::*;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Detect, count and impute missing values in a CSV dataset",
    long_about = "Loads a CSV file, maps non-standard missing spellings to null, \
                  flags numeric values in categorical columns, prints missing-value \
                  counts and applies the configured imputations.\n\n\
                  Nothing is written back to disk."
)]
struct Args {
    /// Path to the CSV file to process
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Print the resolution report as JSON instead of the console walkthrough
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is disabled so stdout only carries
/// the report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = ResolverConfig::builder()
        .input_path(&args.input)
        .build()
        .context("Invalid resolver configuration")?;
    let resolver = Resolver::new(config);

    if args.json {
        let (_, report) = resolver.load_and_run()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    run_walkthrough(&resolver)
}

/// Print each stage the way the cleaning walkthrough presents it.
///
/// Note: This function uses `println!` intentionally for user-facing output.
fn run_walkthrough(resolver: &Resolver) -> Result<()> {
    let config = resolver.config();
    let preview_columns = preview_columns(config);

    // Standard spellings only, to show what the defaults miss
    let standard = load_csv(&config.input_path, &MissingTokens::default())?;
    section("FIRST ROWS");
    println!("{}", head(&standard));

    section("STANDARD MISSING VALUES");
    print_previews(&standard, &preview_columns)?;

    // Reload with the extended token set
    let df = resolver.load()?;
    section(&format!(
        "WITH EXTRA MISSING TOKENS {:?}",
        config.extra_missing_tokens
    ));
    print_previews(&df, &preview_columns)?;

    info!("Running resolver over {:?} dataset", df.shape());
    let (df, mut report) = resolver.run(df)?;
    report.input_file = Some(config.input_path.display().to_string());

    println!("{}", render_report(&report));

    section("RESOLVED DATASET");
    println!("{}", df);

    Ok(())
}

/// Columns named by the categorical list or an imputation step, first
/// mention first.
fn preview_columns(config: &ResolverConfig) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    let names = config
        .steps
        .iter()
        .map(|s| s.column())
        .chain(config.categorical_columns.iter().map(|c| c.name.as_str()));
    for name in names {
        if !columns.iter().any(|c| c == name) {
            columns.push(name.to_string());
        }
    }
    columns
}

fn print_previews(df: &DataFrame, columns: &[String]) -> Result<()> {
    for column in columns {
        println!("{}\n", column_preview(df, column)?);
        println!("{}\n", null_mask_preview(df, column)?);
    }
    Ok(())
}

fn section(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(40));
}
