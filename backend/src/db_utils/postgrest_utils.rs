//! Schemes dataset client speaking the PostgREST protocol (as exposed by
//! Supabase and similar hosted Postgres services).

use async_trait::async_trait;
use common::{predicate::Predicate, scheme_record::SchemeRecord};
use serde::Deserialize;
use tracing::debug;

use crate::{config::DatasetConfig, error::DatasetError};


/// Executes a conjunctive predicate set against the schemes table.
#[async_trait]
pub trait DatasetClient: Send + Sync {
    async fn fetch_schemes(&self, predicates: &[Predicate]) -> Result<Vec<SchemeRecord>, DatasetError>;
}

/// PostgREST filter operator and operand for one predicate, as a query pair.
pub fn predicate_query_pair(predicate: &Predicate) -> (String, String) {
    match predicate {
        Predicate::ILike { column, pattern } => (column.column_name().to_string(), format!("ilike.{pattern}")),
        Predicate::Lte { column, value } => (column.column_name().to_string(), format!("lte.{value}")),
    }
}

/// Full query string for a table read: every column, all predicates ANDed.
pub fn build_query_pairs(predicates: &[Predicate]) -> Vec<(String, String)> {
    let mut pairs = vec![("select".to_string(), "*".to_string())];
    pairs.extend(predicates.iter().map(predicate_query_pair));
    pairs
}

#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: Option<String>,
    hint: Option<String>,
}

/// Turn a PostgREST error body into a readable message, falling back to the raw text.
fn postgrest_error_message(body: &str) -> String {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(PostgrestErrorBody { message: Some(message), hint: Some(hint) }) => format!("{message} ({hint})"),
        Ok(PostgrestErrorBody { message: Some(message), hint: None }) => message,
        _ if body.trim().is_empty() => "empty response".to_string(),
        _ => body.trim().to_string(),
    }
}

#[derive(Clone)]
pub struct PostgrestDatasetClient {
    client: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl PostgrestDatasetClient {
    pub fn new(config: &DatasetConfig, timeout: std::time::Duration) -> Result<Self, DatasetError> {
        if config.api_key.trim().is_empty() {
            return Err(DatasetError::Config("API key cannot be empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DatasetError::Config(format!("Failed to create HTTP client: {}", e)))?;
        let table_url = format!("{}/rest/v1/{}", config.base_url.trim_end_matches('/'), config.table);
        Ok(Self { client, table_url, api_key: config.api_key.clone() })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }
}

impl std::fmt::Debug for PostgrestDatasetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgrestDatasetClient")
            .field("table_url", &self.table_url)
            .field("api_key", &"***")
            .finish()
    }
}

#[async_trait]
impl DatasetClient for PostgrestDatasetClient {
    async fn fetch_schemes(&self, predicates: &[Predicate]) -> Result<Vec<SchemeRecord>, DatasetError> {
        let query = build_query_pairs(predicates);
        debug!(url = %self.table_url, ?query, "dataset request");

        let response = self
            .client
            .get(&self.table_url)
            .query(&query)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DatasetError::Http { status: status.as_u16(), message: postgrest_error_message(&body) });
        }
        debug!(len = body.len(), "dataset response");

        serde_json::from_str::<Vec<SchemeRecord>>(&body).map_err(|e| DatasetError::Decode(e.to_string()))
    }
}
