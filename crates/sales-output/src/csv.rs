//! CSV serialization.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::*;

use crate::error::{OutputError, Result};

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Writes `df` to `path` with a header row and no index column.
///
/// Missing parent directories are created; an existing file is replaced.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut file = File::create(path).map_err(|source| OutputError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut df.clone())
        .map_err(|source| OutputError::CsvWrite {
            path: path.to_path_buf(),
            source,
        })
}
