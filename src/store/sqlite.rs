use std::fmt::Write;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as _, SqlitePool, TypeInfo, ValueRef};
use tracing::debug;

use super::{DataStore, Row, StoreFactory, validate_table};
use crate::error::StoreError;

/// Local SQLite table read, used for development without a hosted project.
#[derive(Clone)]
pub struct SqliteStore {
    db: SqlitePool,
}

impl SqliteStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DataStore for SqliteStore {
    async fn fetch_all(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        validate_table(table)?;
        let sql = format!("SELECT * FROM \"{}\"", table);
        debug!("running {}", sql);

        let rows = sqlx::query(&sql).fetch_all(&self.db).await?;
        rows.iter().map(row_to_json).collect()
    }
}

/// Decodes each column by the storage class of its value, since SQLite
/// columns are not bound to a single type.
fn row_to_json(row: &SqliteRow) -> Result<Row, StoreError> {
    let mut out = Row::new();
    for (index, column) in row.columns().iter().enumerate() {
        let type_name = {
            let raw = row.try_get_raw(index)?;
            if raw.is_null() {
                out.insert(column.name().to_string(), Value::Null);
                continue;
            }
            raw.type_info().name().to_string()
        };

        let value = match type_name.as_str() {
            "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
            "REAL" => Value::from(row.try_get::<f64, _>(index)?),
            "BLOB" => Value::from(hex(&row.try_get::<Vec<u8>, _>(index)?)),
            _ => Value::from(row.try_get::<String, _>(index)?),
        };
        out.insert(column.name().to_string(), value);
    }
    Ok(out)
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// Hands out clients backed by one shared pool.
pub struct SqliteStoreFactory {
    db: SqlitePool,
}

impl SqliteStoreFactory {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreFactory for SqliteStoreFactory {
    async fn connect(&self) -> Result<Arc<dyn DataStore>, StoreError> {
        Ok(Arc::new(SqliteStore::new(self.db.clone())))
    }
}
