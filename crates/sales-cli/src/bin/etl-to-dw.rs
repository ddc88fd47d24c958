//! Loads the prepared CSVs under `$SMART_SALES_ROOT` (default: the current
//! directory) into `data/dw/smart_sales.db`.

use sales_cli::logging::{LogConfig, init_logging};
use sales_cli::pipeline::load_warehouse;
use sales_cli::summary::print_load_summary;
use sales_model::{DatasetConfig, EtlPaths};

fn main() {
    if let Err(error) = init_logging(&LogConfig::default()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let paths = EtlPaths::from_env();
    match load_warehouse(&paths, &DatasetConfig::defaults()) {
        Ok(summary) => print_load_summary(&summary),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}
