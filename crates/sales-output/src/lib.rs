//! Writes cleaned frames as prepared CSV files.
//!
//! Output lands in the prepared (or clean) directory of an [`EtlPaths`],
//! named after the raw extract it came from. Parent directories are
//! created on demand and existing files are overwritten.
//!
//! [`EtlPaths`]: sales_model::EtlPaths

mod csv;
mod error;
mod prepared;

pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use prepared::save_prepared_data;
pub use sales_model::OutputNaming;
