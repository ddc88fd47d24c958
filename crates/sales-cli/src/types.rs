use std::path::PathBuf;

use serde::Serialize;

use sales_model::DatasetKind;
use sales_transform::CleaningSummary;
use sales_warehouse::LoadSummary;

/// What happened to one raw extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DatasetStatus {
    Prepared { output: PathBuf },
    Skipped { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetOutcome {
    pub dataset: DatasetKind,
    pub raw_path: PathBuf,
    pub status: DatasetStatus,
    pub cleaning: Option<CleaningSummary>,
}

impl DatasetOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self.status, DatasetStatus::Skipped { .. })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PrepareReport {
    pub datasets: Vec<DatasetOutcome>,
}

impl PrepareReport {
    pub fn prepared_count(&self) -> usize {
        self.datasets.iter().filter(|d| !d.is_skipped()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.datasets.iter().filter(|d| d.is_skipped()).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub prepare: PrepareReport,
    pub load: LoadSummary,
}

/// Result of a CLI command, ready for printing.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Prepare(PrepareReport),
    Load(LoadSummary),
    Run(RunReport),
}
