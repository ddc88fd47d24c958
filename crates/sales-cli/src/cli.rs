//! CLI argument definitions for the Smart Sales ETL.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use sales_model::{DatasetKind, OutputNaming, ROOT_ENV_VAR};
use sales_cli::summary::SummaryFormat;

#[derive(Parser)]
#[command(
    name = "smart-sales",
    version,
    about = "Smart Sales ETL - clean raw sales extracts and load the warehouse",
    long_about = "Clean raw customer, product, and sales CSV extracts and load them into \
                  the SQLite warehouse.\n\n\
                  Without a subcommand, runs preparation followed by the warehouse load."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project root containing the data/ directory.
    #[arg(long, value_name = "DIR", env = ROOT_ENV_VAR, global = true)]
    pub root: Option<PathBuf>,

    /// How to print the final report.
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub summary: SummaryFormatArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean raw extracts and write the prepared CSVs.
    Prepare(PrepareArgs),

    /// Load the prepared CSVs into the warehouse.
    Load(LoadArgs),

    /// Prepare every dataset, then load the warehouse.
    Run(PrepareArgs),
}

#[derive(Args, Default)]
pub struct PrepareArgs {
    /// Dataset to prepare (repeatable; default: all).
    #[arg(long = "dataset", value_enum)]
    pub datasets: Vec<DatasetArg>,

    /// Output naming convention.
    #[arg(long, value_enum, default_value = "prepared")]
    pub naming: NamingArg,

    /// Fill every remaining missing cell with this value.
    #[arg(long = "fill-missing", value_name = "VALUE")]
    pub fill_missing: Option<String>,
}

#[derive(Args, Default)]
pub struct LoadArgs {
    /// Naming convention the prepare step wrote with.
    #[arg(long, value_enum, default_value = "prepared")]
    pub naming: NamingArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    Customers,
    Products,
    Sales,
}

impl From<DatasetArg> for DatasetKind {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Customers => DatasetKind::Customers,
            DatasetArg::Products => DatasetKind::Products,
            DatasetArg::Sales => DatasetKind::Sales,
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum NamingArg {
    #[default]
    Prepared,
    Clean,
}

impl From<NamingArg> for OutputNaming {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Prepared => OutputNaming::Prepared,
            NamingArg::Clean => OutputNaming::Clean,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

impl From<SummaryFormatArg> for SummaryFormat {
    fn from(arg: SummaryFormatArg) -> Self {
        match arg {
            SummaryFormatArg::Table => SummaryFormat::Table,
            SummaryFormatArg::Json => SummaryFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
