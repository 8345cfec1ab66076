//! CSV loading with an extended set of missing-value spellings.
//!
//! Every field whose raw text exactly matches one of the tokens is read as
//! null, in every column, before polars infers the column types. A numeric
//! column containing `--` therefore still loads as numeric.

use crate::error::{ResolverError, Result};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions, NullValues};
use polars::io::mmap::MmapBytesReader;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Spellings read as missing without any configuration.
pub const DEFAULT_NA_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Rows sampled for schema inference.
const INFER_SCHEMA_ROWS: usize = 100;

/// The full set of raw spellings mapped to the missing marker on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTokens {
    tokens: Vec<String>,
}

impl Default for MissingTokens {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MissingTokens {
    /// Built-in defaults plus `extra`. Duplicates are dropped, order kept.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = Self::default();
        for token in extra {
            let token = token.into();
            if !tokens.contains(&token) {
                tokens.tokens.push(token);
            }
        }
        tokens
    }

    /// Exact, case-sensitive match against the whole raw field.
    pub fn contains(&self, raw: &str) -> bool {
        self.tokens.iter().any(|t| t == raw)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn to_null_values(&self) -> NullValues {
        NullValues::AllColumns(self.tokens.iter().map(|t| t.as_str().into()).collect())
    }
}

fn read_options(tokens: &MissingTokens) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(tokens.to_null_values())),
        )
}

/// Load a CSV file, reading every token in `tokens` as missing.
pub fn load_csv(path: impl AsRef<Path>, tokens: &MissingTokens) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ResolverError::FileNotFound(path.display().to_string()));
    }

    info!("Loading dataset from: {}", path.display());
    debug!("Missing tokens: {:?}", tokens.as_slice());

    let df = read_options(tokens)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}

/// Load CSV content from any in-memory or file handle source.
pub fn load_csv_from_reader<R>(reader: R, tokens: &MissingTokens) -> Result<DataFrame>
where
    R: MmapBytesReader,
{
    let df = read_options(tokens)
        .into_reader_with_file_handle(reader)
        .finish()?;

    debug!("Dataset loaded from reader: {:?}", df.shape());
    Ok(df)
}
