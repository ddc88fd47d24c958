//! Cleans the three raw extracts under `$SMART_SALES_ROOT` (default: the
//! current directory) and writes the prepared CSVs.

use sales_cli::logging::{LogConfig, init_logging};
use sales_cli::pipeline::prepare_all;
use sales_cli::summary::print_prepare_summary;
use sales_model::{DatasetConfig, EtlPaths};

fn main() {
    if let Err(error) = init_logging(&LogConfig::default()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let paths = EtlPaths::from_env();
    match prepare_all(&paths, &DatasetConfig::defaults()) {
        Ok(report) => print_prepare_summary(&report),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}
