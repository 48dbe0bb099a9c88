//! Cache bucket storage seam and the in-memory adapter.

use crate::error::OfflineError;
use crate::types::StoredResponse;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Named, versioned store of URL → response snapshots.
///
/// Puts are atomic per key; concurrent fetch handlers share nothing else.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Store a response snapshot under its URL in the given bucket.
    async fn put(&self, bucket: &str, response: StoredResponse) -> Result<(), OfflineError>;

    /// Look up a stored response by URL.
    async fn lookup(
        &self,
        bucket: &str,
        url: &str,
    ) -> Result<Option<StoredResponse>, OfflineError>;

    /// List existing bucket names.
    async fn buckets(&self) -> Result<Vec<String>, OfflineError>;

    /// Delete a bucket and all of its entries.
    async fn delete_bucket(&self, bucket: &str) -> Result<(), OfflineError>;
}

/// In-memory cache store for tests and single-session hosts.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    buckets: RwLock<HashMap<String, HashMap<String, StoredResponse>>>,
}

impl MemoryCacheStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    /// Store a snapshot, replacing any previous entry for the URL.
    async fn put(&self, bucket: &str, response: StoredResponse) -> Result<(), OfflineError> {
        let mut buckets = self.buckets.write();
        let entries = buckets.entry(bucket.to_string()).or_default();
        debug!(
            "cache put (bucket={}, url={}, bytes={})",
            bucket,
            response.url,
            response.body.len()
        );
        entries.insert(response.url.clone(), response);
        Ok(())
    }

    /// Look up a snapshot by URL.
    async fn lookup(
        &self,
        bucket: &str,
        url: &str,
    ) -> Result<Option<StoredResponse>, OfflineError> {
        let buckets = self.buckets.read();
        Ok(buckets
            .get(bucket)
            .and_then(|entries| entries.get(url))
            .cloned())
    }

    /// List bucket names.
    async fn buckets(&self) -> Result<Vec<String>, OfflineError> {
        Ok(self.buckets.read().keys().cloned().collect())
    }

    /// Drop a whole bucket.
    async fn delete_bucket(&self, bucket: &str) -> Result<(), OfflineError> {
        self.buckets.write().remove(bucket);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CacheStore, MemoryCacheStore};
    use crate::types::StoredResponse;
    use pretty_assertions::assert_eq;

    fn response(url: &str, body: &str) -> StoredResponse {
        StoredResponse {
            url: url.to_string(),
            status: 200,
            content_type: Some("text/plain".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn put_replaces_previous_entry() {
        let store = MemoryCacheStore::new();
        store
            .put("v1", response("https://a/x", "one"))
            .await
            .expect("put");
        store
            .put("v1", response("https://a/x", "two"))
            .await
            .expect("put");

        let hit = store.lookup("v1", "https://a/x").await.expect("lookup");
        assert_eq!(hit.expect("hit").body, b"two".to_vec());
    }

    #[tokio::test]
    async fn delete_bucket_removes_all_entries() {
        let store = MemoryCacheStore::new();
        store
            .put("v0", response("https://a/x", "one"))
            .await
            .expect("put");
        store.delete_bucket("v0").await.expect("delete");

        assert_eq!(store.lookup("v0", "https://a/x").await.expect("lookup"), None);
        assert_eq!(store.buckets().await.expect("buckets"), Vec::<String>::new());
    }
}
