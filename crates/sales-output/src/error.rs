//! Error types for prepared output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing an output file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or truncate the output file.
    #[error("failed to create file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Polars failed to serialize the frame.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: polars::error::PolarsError,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
