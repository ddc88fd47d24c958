use anyhow::Result;

use sales_cli::pipeline::{load_configs, load_warehouse, prepare_all, run_all};
use sales_cli::types::Report;
use sales_model::{DatasetConfig, DatasetKind, EtlPaths, MissingValueRules};

use crate::cli::{Command, PrepareArgs};

/// Dataset configurations selected by the prepare flags, in load order.
pub fn dataset_configs(args: &PrepareArgs) -> Vec<DatasetConfig> {
    let selected: Vec<DatasetKind> = args.datasets.iter().map(|&arg| arg.into()).collect();
    let missing = MissingValueRules::standard().with_fill_remaining(args.fill_missing.clone());
    DatasetKind::ALL
        .into_iter()
        .filter(|kind| selected.is_empty() || selected.contains(kind))
        .map(|kind| {
            DatasetConfig::for_kind(kind)
                .with_naming(args.naming.into())
                .with_missing(missing.clone())
        })
        .collect()
}

pub fn execute(command: &Command, paths: &EtlPaths) -> Result<Report> {
    match command {
        Command::Prepare(args) => Ok(Report::Prepare(prepare_all(paths, &dataset_configs(args))?)),
        Command::Load(args) => Ok(Report::Load(load_warehouse(
            paths,
            &load_configs(args.naming.into()),
        )?)),
        Command::Run(args) => Ok(Report::Run(run_all(paths, &dataset_configs(args))?)),
    }
}
