//! Project directory layout.

use std::path::{Path, PathBuf};

use crate::dataset::{DatasetConfig, OutputNaming};

/// Environment variable for overriding the project root.
pub const ROOT_ENV_VAR: &str = "SMART_SALES_ROOT";

pub const DATA_DIR: &str = "data";
pub const RAW_DIR: &str = "raw";
pub const PREPARED_DIR: &str = "prepared";
pub const CLEAN_DIR: &str = "clean";
pub const WAREHOUSE_DIR: &str = "dw";
pub const WAREHOUSE_FILE: &str = "smart_sales.db";

/// Locations of raw input, cleaned output and the warehouse file.
///
/// Passed explicitly to every stage so tests can point the pipeline at a
/// temporary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtlPaths {
    pub root: PathBuf,
    pub raw_dir: PathBuf,
    pub prepared_dir: PathBuf,
    pub clean_dir: PathBuf,
    pub warehouse_path: PathBuf,
}

impl Default for EtlPaths {
    fn default() -> Self {
        Self::from_root(".")
    }
}

impl EtlPaths {
    /// Standard `data/...` layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data = root.join(DATA_DIR);
        Self {
            raw_dir: data.join(RAW_DIR),
            prepared_dir: data.join(PREPARED_DIR),
            clean_dir: data.join(CLEAN_DIR),
            warehouse_path: data.join(WAREHOUSE_DIR).join(WAREHOUSE_FILE),
            root,
        }
    }

    /// Resolution order:
    /// 1. `SMART_SALES_ROOT` environment variable
    /// 2. current working directory
    pub fn from_env() -> Self {
        match std::env::var(ROOT_ENV_VAR) {
            Ok(root) if !root.trim().is_empty() => Self::from_root(root),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn with_raw_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.raw_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_prepared_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prepared_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_warehouse_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.warehouse_path = path.into();
        self
    }

    /// Raw file path for a file name.
    pub fn raw_file(&self, file_name: &str) -> PathBuf {
        self.raw_dir.join(file_name)
    }

    /// Directory a naming convention writes into.
    pub fn output_dir(&self, naming: OutputNaming) -> &Path {
        match naming {
            OutputNaming::Prepared => &self.prepared_dir,
            OutputNaming::Clean => &self.clean_dir,
        }
    }

    /// Full output path for a dataset's cleaned file.
    pub fn output_file(&self, config: &DatasetConfig) -> PathBuf {
        self.output_dir(config.naming)
            .join(config.output_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetKind;

    #[test]
    fn test_from_root_layout() {
        let paths = EtlPaths::from_root("/project");
        assert_eq!(paths.raw_dir, PathBuf::from("/project/data/raw"));
        assert_eq!(paths.prepared_dir, PathBuf::from("/project/data/prepared"));
        assert_eq!(paths.clean_dir, PathBuf::from("/project/data/clean"));
        assert_eq!(
            paths.warehouse_path,
            PathBuf::from("/project/data/dw/smart_sales.db")
        );
    }

    #[test]
    fn test_output_file_follows_naming() {
        let paths = EtlPaths::from_root("/project");
        let prepared = DatasetConfig::for_kind(DatasetKind::Sales);
        let clean = prepared.clone().with_naming(OutputNaming::Clean);

        assert_eq!(
            paths.output_file(&prepared),
            PathBuf::from("/project/data/prepared/sales_data_prepared.csv")
        );
        assert_eq!(
            paths.output_file(&clean),
            PathBuf::from("/project/data/clean/sales_data_clean.csv")
        );
    }

    #[test]
    fn test_overrides() {
        let paths = EtlPaths::from_root("/project")
            .with_raw_dir("/elsewhere/raw")
            .with_prepared_dir("/elsewhere/prepared")
            .with_warehouse_path("/tmp/dw.db");
        assert_eq!(
            paths.raw_file("sales_data.csv"),
            PathBuf::from("/elsewhere/raw/sales_data.csv")
        );
        assert_eq!(
            paths.output_file(&DatasetConfig::for_kind(DatasetKind::Products)),
            PathBuf::from("/elsewhere/prepared/products_data_prepared.csv")
        );
        assert_eq!(paths.clean_dir, PathBuf::from("/project/data/clean"));
        assert_eq!(paths.warehouse_path, PathBuf::from("/tmp/dw.db"));
    }
}
