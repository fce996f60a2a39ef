use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{errors::AppError, supabase::client::SupabaseClient};

/// Durable storage for project thumbnails.
#[automock]
#[async_trait]
pub trait ThumbnailStore: Send + Sync {
    /// Stores the bytes under `key`; keys are never overwritten.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<(), AppError>;

    /// Public URL for a stored key.
    fn public_url(&self, key: &str) -> String;
}

#[derive(Clone)]
pub struct SupabaseThumbnailStore {
    pub client: Arc<SupabaseClient>,
    pub bucket: String,
}

impl SupabaseThumbnailStore {
    pub fn new(client: Arc<SupabaseClient>, bucket: impl Into<String>) -> Self {
        SupabaseThumbnailStore {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ThumbnailStore for SupabaseThumbnailStore {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<(), AppError> {
        self.client
            .bucket(&self.bucket)
            .upload(key, bytes, content_type.as_deref())
            .await
            .map_err(|e| AppError::UploadFailed(e.to_string()))
    }

    fn public_url(&self, key: &str) -> String {
        self.client.bucket(&self.bucket).public_url(key)
    }
}
