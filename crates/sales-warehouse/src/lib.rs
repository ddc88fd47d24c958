//! SQLite warehouse for the cleaned sales datasets.
//!
//! Every load is a full replace: the `customer`, `product`, and `sale`
//! tables are dropped and recreated, emptied, and refilled from the
//! prepared CSVs inside a single transaction. The connection is closed on
//! every exit path; a failed load rolls back and leaves the previous
//! contents in place.

mod error;
mod insert;
mod load;
mod schema;
mod values;

pub use error::{Result, WarehouseError};
pub use insert::insert_frame;
pub use load::{
    LoadSummary, TableLoad, close_warehouse, load_datasets, load_frames, load_to_warehouse,
    open_warehouse, table_row_count,
};
pub use schema::{create_table_sql, delete_existing_records, drop_table_sql, reset_schema};
pub use values::any_to_sql;
