//! Stage runners shared by every binary.
//!
//! Each runner opens a `tracing` span for its stage, calls into the
//! library crates, and turns their results into the report types the
//! summary printer understands. Missing or unreadable raw files skip the
//! dataset; a failed warehouse load is returned as an error.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use sales_ingest::read_raw_data;
use sales_model::{DatasetConfig, DatasetKind, EtlPaths, OutputNaming};
use sales_output::save_prepared_data;
use sales_transform::{CleaningPipeline, TracingObserver};
use sales_warehouse::{LoadSummary, load_datasets};

use crate::types::{DatasetOutcome, DatasetStatus, PrepareReport, RunReport};

/// Reads, cleans, and writes one dataset.
pub fn prepare_dataset(paths: &EtlPaths, config: &DatasetConfig) -> Result<DatasetOutcome> {
    let span = info_span!("prepare", dataset = %config.kind);
    let _guard = span.enter();
    let start = Instant::now();

    let raw = read_raw_data(paths, &config.file_name);
    if raw.is_empty() {
        let reason = raw
            .error
            .as_ref()
            .map_or_else(|| "no data rows".to_string(), ToString::to_string);
        warn!(reason = %reason, "skipping dataset");
        return Ok(DatasetOutcome {
            dataset: config.kind,
            raw_path: raw.path,
            status: DatasetStatus::Skipped { reason },
            cleaning: None,
        });
    }

    let outcome = CleaningPipeline::from_config(config)
        .run(&raw.frame, &mut TracingObserver)
        .with_context(|| format!("clean {}", raw.path.display()))?;
    let output = save_prepared_data(&outcome.frame, paths, config)
        .with_context(|| format!("save prepared {}", config.kind))?;

    info!(
        rows = outcome.frame.height(),
        duration_ms = start.elapsed().as_millis() as u64,
        "dataset prepared"
    );
    Ok(DatasetOutcome {
        dataset: config.kind,
        raw_path: raw.path,
        status: DatasetStatus::Prepared { output },
        cleaning: Some(outcome.summary),
    })
}

/// Prepares every configured dataset in order.
pub fn prepare_all(paths: &EtlPaths, configs: &[DatasetConfig]) -> Result<PrepareReport> {
    let mut report = PrepareReport::default();
    for config in configs {
        report.datasets.push(prepare_dataset(paths, config)?);
    }
    info!(
        prepared = report.prepared_count(),
        skipped = report.skipped_count(),
        "data preparation complete"
    );
    Ok(report)
}

/// Loads the CSVs written under `configs` into the warehouse.
pub fn load_warehouse(paths: &EtlPaths, configs: &[DatasetConfig]) -> Result<LoadSummary> {
    let span = info_span!("load", path = %paths.warehouse_path.display());
    let _guard = span.enter();
    load_datasets(paths, configs)
        .with_context(|| format!("load warehouse {}", paths.warehouse_path.display()))
}

/// Configs for every warehouse table, read with one naming convention.
pub fn load_configs(naming: OutputNaming) -> Vec<DatasetConfig> {
    DatasetKind::ALL
        .into_iter()
        .map(|kind| DatasetConfig::for_kind(kind).with_naming(naming))
        .collect()
}

/// Prepares every dataset, then loads the warehouse from the files just
/// written.
///
/// Tables whose dataset was not selected read the file of the same naming
/// convention left by an earlier run.
pub fn run_all(paths: &EtlPaths, configs: &[DatasetConfig]) -> Result<RunReport> {
    let prepare = prepare_all(paths, configs)?;
    let naming = configs
        .first()
        .map_or(OutputNaming::Prepared, |config| config.naming);
    let sources: Vec<DatasetConfig> = load_configs(naming)
        .into_iter()
        .map(|default| {
            configs
                .iter()
                .find(|config| config.kind == default.kind)
                .cloned()
                .unwrap_or(default)
        })
        .collect();
    let load = load_warehouse(paths, &sources)?;
    Ok(RunReport { prepare, load })
}
