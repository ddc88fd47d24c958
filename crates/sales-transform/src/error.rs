//! Error types for the cleaning pipeline.

use thiserror::Error;

/// Errors that can occur while cleaning a dataset.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransformError {
    /// Column not found in the frame.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns collapse to the same name after trimming.
    #[error("columns {first:?} and {second:?} both trim to {trimmed:?}")]
    DuplicateColumn {
        first: String,
        second: String,
        trimmed: String,
    },

    /// A hook rule rejected the frame.
    #[error("rule {rule} failed: {message}")]
    Rule { rule: String, message: String },

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_column_message() {
        let err = TransformError::DuplicateColumn {
            first: "Name".to_string(),
            second: " Name".to_string(),
            trimmed: "Name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"columns "Name" and " Name" both trim to "Name""#
        );
    }
}
