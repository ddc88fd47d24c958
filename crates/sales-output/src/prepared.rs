//! Prepared output naming and persistence.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tracing::info;

use sales_model::{DatasetConfig, EtlPaths};

use crate::csv::write_csv;
use crate::error::Result;

/// Writes a cleaned frame to its output location and returns the path.
///
/// The location is [`EtlPaths::output_file`]: the config's naming picks
/// the directory and the `_prepared` / `_clean` suffix.
pub fn save_prepared_data(
    df: &DataFrame,
    paths: &EtlPaths,
    config: &DatasetConfig,
) -> Result<PathBuf> {
    let path = paths.output_file(config);
    write_csv(df, &path)?;
    info!(
        dataset = %config.kind,
        path = %path.display(),
        rows = df.height(),
        "saved prepared data"
    );
    Ok(path)
}
