//! Core model types for the Smart Sales ETL pipeline.
//!
//! This crate holds configuration and schema definitions only. It performs
//! no I/O, so every stage crate can depend on it without pulling in Polars
//! or SQLite.
//!
//! # Overview
//!
//! - **Datasets**: [`DatasetKind`] and the per-dataset [`DatasetConfig`] record
//!   (cleanup rule, output naming, missing-value rules)
//! - **Paths**: [`EtlPaths`] replaces fixed project-relative constants
//! - **Warehouse schema**: [`TableSpec`] definitions for `customer`, `product`
//!   and `sale`

mod dataset;
mod paths;
mod rules;
mod schema;

pub use dataset::{CleanupRule, DatasetConfig, DatasetKind, OutputNaming};
pub use paths::{
    CLEAN_DIR, DATA_DIR, EtlPaths, PREPARED_DIR, RAW_DIR, ROOT_ENV_VAR, WAREHOUSE_DIR,
    WAREHOUSE_FILE,
};
pub use rules::{ColumnFill, MissingValueRules, RewardRule};
pub use schema::{
    CUSTOMER_TABLE, ColumnSpec, ForeignKey, PRODUCT_TABLE, SALE_TABLE, SqlType, TableSpec,
    WAREHOUSE_TABLES,
};
