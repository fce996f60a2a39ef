use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};

use crate::constants::THUMBNAIL_CACHE_SECS;

use super::client::{error_for_status, SupabaseClient, SupabaseError};

/// One bucket of the backend's file storage.
pub struct StorageBucket<'a> {
    client: &'a SupabaseClient,
    bucket: &'a str,
}

impl<'a> StorageBucket<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, bucket: &'a str) -> Self {
        StorageBucket { client, bucket }
    }

    /// Uploads an object under `key`. Existing objects are never
    /// overwritten (`x-upsert: false`); key collisions surface as errors.
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), SupabaseError> {
        let url = format!(
            "{}/object/{}/{}",
            self.client.storage_base,
            self.bucket,
            encode_key(key)
        );

        let mut request = self.client.http
            .post(url)
            .header(CACHE_CONTROL, format!("max-age={THUMBNAIL_CACHE_SECS}"))
            .header("x-upsert", "false")
            .body(bytes);

        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type.to_string());
        }

        let response = request
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response).await.map(|_| ())
    }

    /// Public URL for an object key. Purely local string construction; the
    /// bucket must be marked public on the backend for the URL to resolve.
    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.client.storage_base,
            self.bucket,
            encode_key(key)
        )
    }
}

/// Percent-encodes each path segment of an object key, preserving `/`.
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
