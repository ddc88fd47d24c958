//! Warehouse DDL and the idempotent schema reset.

use rusqlite::Connection;
use tracing::debug;

use sales_model::{TableSpec, WAREHOUSE_TABLES};

use crate::error::{Result, WarehouseError};

/// `CREATE TABLE` statement for a table definition.
pub fn create_table_sql(spec: &TableSpec) -> String {
    let mut lines: Vec<String> = spec
        .columns
        .iter()
        .map(|column| {
            if column.primary_key {
                format!("    {} {} PRIMARY KEY", column.name, column.sql_type.as_sql())
            } else {
                format!("    {} {}", column.name, column.sql_type.as_sql())
            }
        })
        .collect();
    lines.extend(spec.foreign_keys.iter().map(|fk| {
        format!(
            "    FOREIGN KEY ({}) REFERENCES {} ({})",
            fk.column, fk.references_table, fk.references_column
        )
    }));
    format!("CREATE TABLE {} (\n{}\n)", spec.name, lines.join(",\n"))
}

pub fn drop_table_sql(spec: &TableSpec) -> String {
    format!("DROP TABLE IF EXISTS {}", spec.name)
}

/// Drops the three warehouse tables (children first) and recreates them.
pub fn reset_schema(conn: &Connection) -> Result<()> {
    for spec in WAREHOUSE_TABLES.iter().rev() {
        conn.execute(&drop_table_sql(spec), [])
            .map_err(|source| WarehouseError::Schema {
                table: spec.name,
                source,
            })?;
    }
    for spec in WAREHOUSE_TABLES {
        conn.execute(&create_table_sql(spec), [])
            .map_err(|source| WarehouseError::Schema {
                table: spec.name,
                source,
            })?;
        debug!(table = spec.name, "created table");
    }
    Ok(())
}

/// Deletes every row from the warehouse tables and returns how many went.
///
/// Redundant right after [`reset_schema`], but kept as its own step so a
/// load that skips the reset still starts from empty tables.
pub fn delete_existing_records(conn: &Connection) -> Result<usize> {
    let mut deleted = 0;
    for spec in WAREHOUSE_TABLES {
        deleted += conn
            .execute(&format!("DELETE FROM {}", spec.name), [])
            .map_err(|source| WarehouseError::Delete {
                table: spec.name,
                source,
            })?;
    }
    Ok(deleted)
}
