//! Small DataFrame helpers shared by the cleaning steps.

use polars::prelude::*;

use sales_common::is_missing;

use crate::error::{Result, TransformError};

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

pub(crate) fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

pub(crate) fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| TransformError::ColumnNotFound(name.to_string()))
}

/// Counts null, blank and NaN cells in a column.
pub(crate) fn count_missing(column: &Column) -> Result<usize> {
    let mut count = 0;
    for idx in 0..column.len() {
        if is_missing(&column.get(idx)?) {
            count += 1;
        }
    }
    Ok(count)
}
