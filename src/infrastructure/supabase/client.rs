use derive_more::Display;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;

use crate::settings::AppConfig;

use super::query::TableQuery;
use super::storage::StorageBucket;

/// Thin client over the managed backend's REST and storage endpoints.
///
/// Everything behind the two base URLs is opaque: this type only knows how
/// to shape requests, attach credentials, and surface errors. Query
/// semantics live with the backend itself.
pub struct SupabaseClient {
    pub(crate) http: reqwest::Client,
    pub(crate) rest_base: String,
    pub(crate) storage_base: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Result<Self, SupabaseError> {
        let key = HeaderValue::from_str(&config.supabase_service_key)
            .map_err(|e| SupabaseError::Configuration(e.to_string()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.supabase_service_key))
            .map_err(|e| SupabaseError::Configuration(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SupabaseError::Configuration(e.to_string()))?;

        let base = config.supabase_base();

        Ok(SupabaseClient {
            http,
            rest_base: format!("{base}/rest/v1"),
            storage_base: format!("{base}/storage/v1"),
        })
    }

    /// Table-scoped query builder.
    pub fn table<'a>(&'a self, name: &'a str) -> TableQuery<'a> {
        TableQuery::new(self, name)
    }

    /// File-storage interface scoped to one bucket.
    pub fn bucket<'a>(&'a self, name: &'a str) -> StorageBucket<'a> {
        StorageBucket::new(self, name)
    }

    /// Cheap reachability probe against the REST root.
    pub async fn ping(&self) -> Result<(), SupabaseError> {
        let response = self.http
            .get(format!("{}/", self.rest_base))
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response).await.map(|_| ())
    }
}

/// Maps a non-2xx response to a backend error, extracting the `message`
/// field both PostgREST and the storage API put in their error bodies.
pub(crate) async fn error_for_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, SupabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    Err(SupabaseError::Backend {
        status: status.as_u16(),
        message,
    })
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Display)]
pub enum SupabaseError {
    #[display("Client misconfigured: {_0}")]
    Configuration(String),

    #[display("Request failed: {_0}")]
    Transport(String),

    #[display("Backend responded {status}: {message}")]
    Backend { status: u16, message: String },

    #[display("Failed to decode response: {_0}")]
    Decode(String),

    #[display("Failed to serialize payload: {_0}")]
    Serialize(String),

    #[display("Refusing to run an unfiltered {_0}")]
    MissingFilter(&'static str),
}
