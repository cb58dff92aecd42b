use rusqlite::Connection;
use tracing::debug;

use super::quote::quote_identifier;
use crate::error::{Result, SeekError};

/// A column of the selected table, with its 1-based position in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub position: usize,
    pub name: String,
}

/// Lists every table in the catalog, in the order SQLite yields them.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table'")
        .map_err(SeekError::Catalog)?;

    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(SeekError::Catalog)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(SeekError::Catalog)?;

    debug!(count = tables.len(), "listed tables");
    Ok(tables)
}

/// Lists the columns `SELECT *` returns for `table`, in schema order.
///
/// `table_xinfo` is used so generated columns are included; hidden columns
/// of virtual tables are skipped.
pub fn list_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>> {
    let sql = format!("PRAGMA table_xinfo({})", quote_identifier(table));
    let mut stmt = conn.prepare(&sql).map_err(SeekError::Catalog)?;

    let entries = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(1)?, row.get::<_, i64>(6)?))
        })
        .map_err(SeekError::Catalog)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(SeekError::Catalog)?;

    let columns: Vec<ColumnInfo> = entries
        .into_iter()
        .filter(|(_, hidden)| *hidden != 1)
        .enumerate()
        .map(|(i, (name, _))| ColumnInfo {
            position: i + 1,
            name,
        })
        .collect();

    debug!(table, count = columns.len(), "listed columns");
    Ok(columns)
}
