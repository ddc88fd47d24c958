//! Raw data ingestion.
//!
//! Reads comma-separated extracts with a header row into Polars
//! DataFrames. Two entry points:
//!
//! - [`read_csv_frame`]: strict, returns [`IngestError`] on any failure
//! - [`read_raw_data`]: tolerant, resolves a file name under the raw data
//!   directory and falls back to an empty frame when the file is missing or
//!   malformed, recording the error for the caller
//!
//! # Example
//!
//! ```ignore
//! use sales_ingest::read_raw_data;
//! use sales_model::EtlPaths;
//!
//! let raw = read_raw_data(&EtlPaths::from_env(), "sales_data.csv");
//! if raw.is_empty() {
//!     return; // skip downstream processing
//! }
//! ```

mod csv;
mod error;
mod raw;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_frame, read_header_line, validate_encoding};

// === Raw Data ===
pub use raw::{RawRead, read_raw_data, try_read_raw_data};
