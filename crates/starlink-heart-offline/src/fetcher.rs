//! Network fetch seam and the reqwest-backed adapter.

use crate::error::OfflineError;
use crate::types::{FetchRequest, StoredResponse};
use async_trait::async_trait;

/// Network transport used for cache misses and precache installs.
///
/// No timeout or retry is imposed at this layer; the transport's own
/// behavior applies.
#[async_trait]
pub trait NetworkFetcher: Send + Sync {
    /// Perform the network round trip for a request.
    async fn fetch(&self, request: &FetchRequest) -> Result<StoredResponse, OfflineError>;
}

/// HTTP fetcher backed by a shared reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NetworkFetcher for HttpFetcher {
    /// GET a URL and snapshot the response.
    async fn fetch(&self, request: &FetchRequest) -> Result<StoredResponse, OfflineError> {
        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(|err| OfflineError::Fetch {
                url: request.url.clone(),
                message: err.to_string(),
            })?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|err| OfflineError::Fetch {
                url: request.url.clone(),
                message: err.to_string(),
            })?
            .to_vec();
        Ok(StoredResponse {
            url: request.url.clone(),
            status,
            content_type,
            body,
        })
    }
}
