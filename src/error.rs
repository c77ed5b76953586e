//! Error types for fpgrowth.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fpgrowth operations
pub type FpResult<T> = Result<T, FpError>;

#[derive(Error, Debug)]
pub enum FpError {
    /// A mining parameter is outside its valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transaction source could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transaction source is not valid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has no column with the requested name
    #[error("column '{column}' not found in {file}")]
    MissingColumn { column: String, file: PathBuf },
}
