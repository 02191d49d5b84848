pub mod sqlite;
pub mod supabase;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;

pub use sqlite::{SqliteStore, SqliteStoreFactory};
pub use supabase::{SupabaseClient, SupabaseConfig, SupabaseFactory};

/// One record as returned by the store. The page makes no assumption about
/// which columns are present.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Read access to a table-oriented course store.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Every column of every row in `table`, in the order the store returns
    /// them.
    async fn fetch_all(&self, table: &str) -> Result<Vec<Row>, StoreError>;
}

/// Hands out a store client. Called once per listing request.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn DataStore>, StoreError>;
}

/// Table names end up in a URL path or an SQL statement, so only plain
/// identifiers are accepted.
pub fn validate_table(table: &str) -> Result<(), StoreError> {
    let ok = !table.is_empty() && table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidTable(table.to_string()))
    }
}
