//! Error types for catalog construction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a school catalog.
///
/// Any of these aborts the load entirely; no partial catalog is produced.
/// Query operations never fail: unmatched criteria yield empty results.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV input")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' not found in header")]
    MissingColumn(String),

    #[error("row {row}: cannot parse {field} from '{value}'")]
    Parse {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: {field} {value} is outside the valid coordinate range")]
    OutOfRange {
        row: usize,
        field: &'static str,
        value: f64,
    },
}
