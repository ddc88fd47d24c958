//! Transactional full-replace load.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::DataFrame;
use rusqlite::Connection;
use serde::Serialize;
use tracing::{info, warn};

use sales_ingest::read_csv_frame;
use sales_model::{DatasetConfig, DatasetKind, EtlPaths, TableSpec, WAREHOUSE_TABLES};

use crate::error::{Result, WarehouseError};
use crate::insert::insert_frame;
use crate::schema::{delete_existing_records, reset_schema};

/// Rows loaded into one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLoad {
    pub table: &'static str,
    pub source: Option<PathBuf>,
    pub rows: usize,
}

/// Result of a warehouse load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub warehouse_path: PathBuf,
    pub tables: Vec<TableLoad>,
}

impl LoadSummary {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|table| table.rows).sum()
    }
}

/// Opens (creating if needed) the warehouse database.
///
/// Foreign keys are declared in the schema but not enforced.
pub fn open_warehouse(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| WarehouseError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let conn = Connection::open(path).map_err(|source| WarehouseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    conn.execute_batch("PRAGMA foreign_keys = OFF;")
        .map_err(|source| WarehouseError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(conn)
}

pub fn close_warehouse(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, source)| WarehouseError::Close(source))
}

/// Resets the schema and inserts each frame, all in one transaction.
///
/// Tables without a frame are left empty. Nothing is committed unless
/// every insert succeeds.
pub fn load_frames(
    conn: &mut Connection,
    frames: &[(DatasetKind, DataFrame)],
) -> Result<Vec<TableLoad>> {
    load_in_transaction(conn, |spec| {
        Ok(frames
            .iter()
            .find(|(kind, _)| *kind == spec.dataset)
            .map(|(_, frame)| (None, frame.clone())))
    })
}

/// Loads the three prepared CSVs from `paths` into the warehouse.
///
/// Reads the default `*_prepared.csv` files. The connection is closed on
/// every path. When the load fails, the original error is returned after
/// the rollback and close.
pub fn load_to_warehouse(paths: &EtlPaths) -> Result<LoadSummary> {
    load_datasets(paths, &DatasetConfig::defaults())
}

/// Loads each table from the file its dataset config writes to.
///
/// A table whose dataset has no entry in `configs` reads the default
/// prepared file.
pub fn load_datasets(paths: &EtlPaths, configs: &[DatasetConfig]) -> Result<LoadSummary> {
    let started = Instant::now();
    let warehouse_path = paths.warehouse_path.clone();
    info!(path = %warehouse_path.display(), "loading warehouse");

    let mut conn = open_warehouse(&warehouse_path)?;
    let loaded = load_in_transaction(&mut conn, |spec| {
        let source = source_file(paths, configs, spec.dataset);
        let frame = read_csv_frame(&source)?;
        Ok(Some((Some(source), frame)))
    });
    let closed = close_warehouse(conn);

    let tables = match (loaded, closed) {
        (Ok(tables), Ok(())) => tables,
        (Ok(_), Err(err)) => return Err(err),
        (Err(err), closed) => {
            if let Err(close_err) = closed {
                warn!(error = %close_err, "failed to close warehouse after load error");
            }
            return Err(err);
        }
    };

    let summary = LoadSummary {
        warehouse_path,
        tables,
    };
    info!(
        rows = summary.total_rows(),
        duration_ms = started.elapsed().as_millis() as u64,
        "warehouse load complete"
    );
    Ok(summary)
}

fn source_file(paths: &EtlPaths, configs: &[DatasetConfig], kind: DatasetKind) -> PathBuf {
    match configs.iter().find(|config| config.kind == kind) {
        Some(config) => paths.output_file(config),
        None => paths.output_file(&DatasetConfig::for_kind(kind)),
    }
}

/// Row count of a warehouse table.
pub fn table_row_count(conn: &Connection, table: &str) -> Result<usize> {
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
            row.get(0)
        })
        .map_err(|source| WarehouseError::Query {
            table: table.to_string(),
            source,
        })?;
    Ok(usize::try_from(count).unwrap_or_default())
}

fn load_in_transaction(
    conn: &mut Connection,
    mut source: impl FnMut(&TableSpec) -> Result<Option<(Option<PathBuf>, DataFrame)>>,
) -> Result<Vec<TableLoad>> {
    let tx = conn.transaction().map_err(WarehouseError::Begin)?;
    reset_schema(&tx)?;
    delete_existing_records(&tx)?;

    let mut tables = Vec::with_capacity(WAREHOUSE_TABLES.len());
    for spec in WAREHOUSE_TABLES {
        let Some((path, frame)) = source(spec)? else {
            tables.push(TableLoad {
                table: spec.name,
                source: None,
                rows: 0,
            });
            continue;
        };
        let rows = insert_frame(&tx, spec, &frame)?;
        info!(table = spec.name, rows, "loaded table");
        tables.push(TableLoad {
            table: spec.name,
            source: path,
            rows,
        });
    }

    tx.commit().map_err(WarehouseError::Commit)?;
    Ok(tables)
}
