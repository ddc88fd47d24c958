//! Shared utilities for the Smart Sales ETL crates.
//!
//! Polars `AnyValue` helpers used by both the cleaning steps and the
//! warehouse loader.

mod values;

pub use values::{
    any_to_f64, any_to_i64, any_to_string, column_strings, format_numeric, is_missing, parse_f64,
};
