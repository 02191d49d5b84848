use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{DataStore, Row, StoreFactory, validate_table};
use crate::error::{AppError, StoreError};

#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Client for a Supabase project's PostgREST endpoint.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(client: Client, config: SupabaseConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}?select=*", self.config.url, table)
    }
}

#[async_trait]
impl DataStore for SupabaseClient {
    async fn fetch_all(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        validate_table(table)?;
        let url = self.table_url(table);
        debug!("fetching all rows from {}", url);

        let response = self.client
            .get(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status { status: status.as_u16(), body });
        }

        let body_text = response.text().await?;
        let rows = serde_json::from_str::<Vec<Row>>(&body_text)?;
        Ok(rows)
    }
}

/// Builds a [`SupabaseClient`] per request on top of one shared connection
/// pool.
pub struct SupabaseFactory {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseFactory {
    pub fn new(config: SupabaseConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl StoreFactory for SupabaseFactory {
    async fn connect(&self) -> Result<Arc<dyn DataStore>, StoreError> {
        Ok(Arc::new(SupabaseClient::new(self.client.clone(), self.config.clone())))
    }
}
