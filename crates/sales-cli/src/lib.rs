//! CLI library components for the Smart Sales ETL.
//!
//! The `smart-sales` binary and the argument-free `prepare-data` and
//! `etl-to-dw` entry points share the stage runners in [`pipeline`].

pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
