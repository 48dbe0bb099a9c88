//! Offline worker lifecycle: install, activate, and fetch interception.

use crate::config::OfflineConfig;
use crate::error::OfflineError;
use crate::fetcher::NetworkFetcher;
use crate::store::CacheStore;
use crate::types::{FetchDecision, FetchRequest, HttpMethod, ResponseSource};
use log::{debug, info, warn};
use std::sync::Arc;

/// Request-interception worker applying the cache-first policy.
///
/// One worker serves the whole shell lifetime; fetch handlers are
/// independent per event and share only the cache store.
pub struct OfflineWorker {
    config: OfflineConfig,
    store: Arc<dyn CacheStore>,
    fetcher: Arc<dyn NetworkFetcher>,
}

impl OfflineWorker {
    /// Create a worker over a cache store and network fetcher.
    pub fn new(
        config: OfflineConfig,
        store: Arc<dyn CacheStore>,
        fetcher: Arc<dyn NetworkFetcher>,
    ) -> Self {
        Self {
            config,
            store,
            fetcher,
        }
    }

    /// Pre-populate the current bucket with the static asset manifest.
    ///
    /// Any entry that cannot be fetched fails the whole install; the host
    /// platform retries installation later.
    pub async fn install(&self) -> Result<(), OfflineError> {
        for path in &self.config.precache {
            let url = self.absolute_url(path);
            let request = FetchRequest::get(url);
            let response =
                self.fetcher
                    .fetch(&request)
                    .await
                    .map_err(|err| OfflineError::Install {
                        path: path.clone(),
                        message: err.to_string(),
                    })?;
            if !response.is_success() {
                return Err(OfflineError::Install {
                    path: path.clone(),
                    message: format!("status {}", response.status),
                });
            }
            self.store.put(&self.config.cache_name, response).await?;
        }
        info!(
            "precached {} assets (cache={})",
            self.config.precache.len(),
            self.config.cache_name
        );
        Ok(())
    }

    /// Drop stale cache versions and take control of open pages.
    pub async fn activate(&self) -> Result<(), OfflineError> {
        let mut removed = 0usize;
        for bucket in self.store.buckets().await? {
            if bucket != self.config.cache_name {
                self.store.delete_bucket(&bucket).await?;
                removed += 1;
            }
        }
        info!(
            "activated cache version (cache={}, removed={})",
            self.config.cache_name, removed
        );
        Ok(())
    }

    /// Intercept one fetch event.
    ///
    /// Non-GET, API-marked, and cross-origin requests pass through. Cached
    /// entries are served without a network round trip or freshness check;
    /// misses are fetched and written through. A failed navigation falls
    /// back to the cached shell document.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> Result<FetchDecision, OfflineError> {
        if request.method != HttpMethod::Get {
            return Ok(FetchDecision::Passthrough);
        }
        let Some(path) = self.same_origin_path(&request.url) else {
            return Ok(FetchDecision::Passthrough);
        };
        if path.contains(&self.config.api_marker) {
            return Ok(FetchDecision::Passthrough);
        }

        let key = self.absolute_url(&path);
        if let Some(hit) = self.store.lookup(&self.config.cache_name, &key).await? {
            debug!("cache hit ({key})");
            return Ok(FetchDecision::Respond {
                response: hit,
                source: ResponseSource::Cache,
            });
        }

        let network_request = FetchRequest {
            url: key.clone(),
            ..request.clone()
        };
        match self.fetcher.fetch(&network_request).await {
            Ok(response) => {
                if response.is_success() {
                    self.store
                        .put(&self.config.cache_name, response.clone())
                        .await?;
                    debug!("cache populated ({key})");
                }
                Ok(FetchDecision::Respond {
                    response,
                    source: ResponseSource::Network,
                })
            }
            Err(err) => {
                if request.is_navigation {
                    let shell_key = self.absolute_url(&self.config.shell_document);
                    if let Some(shell) = self
                        .store
                        .lookup(&self.config.cache_name, &shell_key)
                        .await?
                    {
                        warn!("serving shell fallback for offline navigation ({key})");
                        return Ok(FetchDecision::Respond {
                            response: shell,
                            source: ResponseSource::ShellFallback,
                        });
                    }
                }
                Err(err)
            }
        }
    }

    /// Resolve a path against the configured origin.
    fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let origin = self.config.origin.trim_end_matches('/');
        if path == "/" {
            return format!("{origin}/");
        }
        format!("{origin}{path}")
    }

    /// Path component for same-origin URLs; `None` for cross-origin ones.
    fn same_origin_path(&self, url: &str) -> Option<String> {
        if url.starts_with('/') {
            return Some(url.to_string());
        }
        let origin = self.config.origin.trim_end_matches('/');
        let rest = url.strip_prefix(origin)?;
        if rest.is_empty() {
            return Some("/".to_string());
        }
        // Reject prefix lookalikes such as https://origin.evil.com.
        if rest.starts_with('/') || rest.starts_with('?') {
            return Some(rest.to_string());
        }
        None
    }
}
