//! Row-by-row bulk insert of a prepared frame.

use polars::prelude::DataFrame;
use rusqlite::{Connection, params_from_iter};
use tracing::debug;

use sales_model::TableSpec;

use crate::error::{Result, WarehouseError};
use crate::values::any_to_sql;

fn insert_sql(spec: &TableSpec) -> String {
    let placeholders: Vec<String> = (1..=spec.width()).map(|idx| format!("?{idx}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        spec.name,
        spec.column_names().join(", "),
        placeholders.join(", ")
    )
}

/// Appends every row of `df` to the table.
///
/// Frame columns map onto the table's columns by position, so the CSV
/// header names do not need to match the warehouse names. Returns the
/// number of rows inserted.
pub fn insert_frame(conn: &Connection, spec: &TableSpec, df: &DataFrame) -> Result<usize> {
    if df.width() != spec.width() {
        return Err(WarehouseError::ColumnCountMismatch {
            table: spec.name,
            expected: spec.width(),
            found: df.width(),
        });
    }

    let mut stmt = conn
        .prepare(&insert_sql(spec))
        .map_err(|source| WarehouseError::Prepare {
            table: spec.name,
            source,
        })?;

    let columns = df.get_columns();
    for row in 0..df.height() {
        let mut values = Vec::with_capacity(columns.len());
        for column in columns {
            let cell = column.get(row).map_err(|source| WarehouseError::Frame {
                table: spec.name,
                source,
            })?;
            values.push(any_to_sql(cell));
        }
        stmt.execute(params_from_iter(values))
            .map_err(|source| WarehouseError::Insert {
                table: spec.name,
                row,
                source,
            })?;
    }

    debug!(table = spec.name, rows = df.height(), "inserted rows");
    Ok(df.height())
}
