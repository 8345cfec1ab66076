//! Console rendering of datasets and resolver results.
//!
//! Nothing here writes to disk. Every function returns text for the caller
//! to print, which keeps the binary the only place that touches stdout.
//!
//! # Example
//!
//! ```rust,ignore
//! use na_resolver::reporting::{column_preview, null_mask_preview};
//!
//! println!("{}", column_preview(&df, "ST_NUM")?);
//! println!("{}", null_mask_preview(&df, "ST_NUM")?);
//! ```

mod preview;

pub use preview::{
    HEAD_ROWS, column_preview, head, null_mask, null_mask_preview, render_report,
};
