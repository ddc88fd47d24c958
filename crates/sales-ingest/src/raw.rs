//! Raw extract loading with the empty-frame fallback.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tracing::{error, info};

use sales_model::EtlPaths;

use crate::csv::read_csv_frame;
use crate::error::{IngestError, Result};

/// Outcome of reading a raw extract.
///
/// A failed read yields an empty frame with the error recorded; callers
/// treat an empty frame as "skip downstream processing".
#[derive(Debug)]
pub struct RawRead {
    pub path: PathBuf,
    pub frame: DataFrame,
    pub error: Option<IngestError>,
}

impl RawRead {
    /// True when there are no rows to process (failed read or header-only file).
    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }
}

/// Reads `file_name` from the raw data directory, propagating any error.
pub fn try_read_raw_data(paths: &EtlPaths, file_name: &str) -> Result<DataFrame> {
    read_csv_frame(&paths.raw_file(file_name))
}

/// Reads `file_name` from the raw data directory.
///
/// Never fails: a missing or unparseable file is logged and produces an
/// empty frame.
pub fn read_raw_data(paths: &EtlPaths, file_name: &str) -> RawRead {
    let path = paths.raw_file(file_name);
    info!(path = %path.display(), "reading raw data");
    match read_csv_frame(&path) {
        Ok(frame) => {
            info!(
                path = %path.display(),
                rows = frame.height(),
                columns = frame.width(),
                "loaded raw data"
            );
            RawRead {
                path,
                frame,
                error: None,
            }
        }
        Err(err) => {
            if err.is_not_found() {
                error!(path = %path.display(), "file not found");
            } else {
                error!(path = %path.display(), error = %err, "error reading raw data");
            }
            RawRead {
                path,
                frame: DataFrame::empty(),
                error: Some(err),
            }
        }
    }
}
