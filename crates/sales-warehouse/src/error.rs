//! Error types for the warehouse load.

use std::path::PathBuf;

use sales_ingest::IngestError;
use thiserror::Error;

/// Errors that can occur while loading the warehouse.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// Failed to create the warehouse directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or configure the database file.
    #[error("failed to open warehouse {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to start the load transaction.
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] rusqlite::Error),

    /// A DROP or CREATE statement failed.
    #[error("schema reset failed on table {table}: {source}")]
    Schema {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// Clearing a table failed.
    #[error("failed to delete records from {table}: {source}")]
    Delete {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// The INSERT statement could not be prepared.
    #[error("failed to prepare insert into {table}: {source}")]
    Prepare {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A row was rejected by the database.
    #[error("failed to insert row {row} into {table}: {source}")]
    Insert {
        table: &'static str,
        row: usize,
        #[source]
        source: rusqlite::Error,
    },

    /// The prepared frame does not match the table's declared columns.
    #[error("table {table} expects {expected} columns, prepared data has {found}")]
    ColumnCountMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// A prepared CSV could not be read.
    #[error(transparent)]
    Read(#[from] IngestError),

    /// Failed to read a cell from the prepared frame.
    #[error("failed to read prepared data for {table}: {source}")]
    Frame {
        table: &'static str,
        #[source]
        source: polars::error::PolarsError,
    },

    /// A query against the warehouse failed.
    #[error("query on {table} failed: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// COMMIT failed; the transaction was rolled back.
    #[error("failed to commit load: {0}")]
    Commit(#[source] rusqlite::Error),

    /// The connection could not be closed cleanly.
    #[error("failed to close warehouse connection: {0}")]
    Close(#[source] rusqlite::Error),
}

/// Result type for warehouse operations.
pub type Result<T> = std::result::Result<T, WarehouseError>;
