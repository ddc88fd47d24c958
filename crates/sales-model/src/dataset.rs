//! Per-dataset configuration records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::MissingValueRules;

/// The three raw extracts the pipeline knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Customers,
    Products,
    Sales,
}

impl DatasetKind {
    /// All datasets in load order (parents before `sale`).
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Customers,
        DatasetKind::Products,
        DatasetKind::Sales,
    ];

    /// Short lowercase name used in logs and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Customers => "customers",
            DatasetKind::Products => "products",
            DatasetKind::Sales => "sales",
        }
    }

    /// File name of the raw extract under `data/raw`.
    pub fn raw_file_name(self) -> &'static str {
        match self {
            DatasetKind::Customers => "customers_data.csv",
            DatasetKind::Products => "products_data.csv",
            DatasetKind::Sales => "sales_data.csv",
        }
    }

    /// Warehouse table the prepared file is loaded into.
    pub fn table_name(self) -> &'static str {
        match self {
            DatasetKind::Customers => "customer",
            DatasetKind::Products => "product",
            DatasetKind::Sales => "sale",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset-specific post-processing applied after the generic cleaning steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleanupRule {
    /// No dataset-specific cleanup.
    None,
    /// Lower-case and trim every value of a text column.
    LowercaseTrim { column: String },
    /// Parse a column into ISO 8601 calendar dates (`YYYY-MM-DD`).
    ParseDates { column: String },
}

impl CleanupRule {
    pub fn lowercase_trim(column: impl Into<String>) -> Self {
        Self::LowercaseTrim {
            column: column.into(),
        }
    }

    pub fn parse_dates(column: impl Into<String>) -> Self {
        Self::ParseDates {
            column: column.into(),
        }
    }

    /// Column the rule targets, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            CleanupRule::None => None,
            CleanupRule::LowercaseTrim { column } | CleanupRule::ParseDates { column } => {
                Some(column)
            }
        }
    }
}

/// How the cleaned output file is named and where it lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputNaming {
    /// `data/prepared/<stem>_prepared.csv`
    #[default]
    Prepared,
    /// `data/clean/<stem>_clean.csv`
    Clean,
}

impl OutputNaming {
    /// Suffix inserted before the `.csv` extension.
    pub fn suffix(self) -> &'static str {
        match self {
            OutputNaming::Prepared => "_prepared",
            OutputNaming::Clean => "_clean",
        }
    }

    /// Derive the output file name from a raw file name.
    ///
    /// `sales_data.csv` becomes `sales_data_prepared.csv`; a name without a
    /// `.csv` extension gets the suffix and extension appended.
    pub fn output_file_name(self, raw_file_name: &str) -> String {
        let stem = raw_file_name
            .strip_suffix(".csv")
            .unwrap_or(raw_file_name);
        format!("{stem}{}.csv", self.suffix())
    }
}

/// Everything the pipeline needs to know about one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub kind: DatasetKind,
    /// Raw file name, resolved against the raw data directory.
    pub file_name: String,
    pub cleanup: CleanupRule,
    pub naming: OutputNaming,
    pub missing: MissingValueRules,
}

impl DatasetConfig {
    /// Default configuration for a dataset kind.
    pub fn for_kind(kind: DatasetKind) -> Self {
        let cleanup = match kind {
            DatasetKind::Customers => CleanupRule::lowercase_trim("Name"),
            DatasetKind::Products => CleanupRule::None,
            DatasetKind::Sales => CleanupRule::parse_dates("SaleDate"),
        };
        Self {
            kind,
            file_name: kind.raw_file_name().to_string(),
            cleanup,
            naming: OutputNaming::default(),
            missing: MissingValueRules::standard(),
        }
    }

    pub fn customers() -> Self {
        Self::for_kind(DatasetKind::Customers)
    }

    pub fn products() -> Self {
        Self::for_kind(DatasetKind::Products)
    }

    pub fn sales() -> Self {
        Self::for_kind(DatasetKind::Sales)
    }

    /// Default configurations for all datasets, in load order.
    pub fn defaults() -> Vec<Self> {
        DatasetKind::ALL.into_iter().map(Self::for_kind).collect()
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn with_cleanup(mut self, cleanup: CleanupRule) -> Self {
        self.cleanup = cleanup;
        self
    }

    #[must_use]
    pub fn with_naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub fn with_missing(mut self, missing: MissingValueRules) -> Self {
        self.missing = missing;
        self
    }

    /// Output file name derived from the raw name and naming convention.
    pub fn output_file_name(&self) -> String {
        self.naming.output_file_name(&self.file_name)
    }
}
