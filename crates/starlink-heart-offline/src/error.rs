//! Error types for offline cache operations.

use thiserror::Error;

/// Errors returned by the offline worker and its adapters.
#[derive(Debug, Error)]
pub enum OfflineError {
    /// IO error from a file-backed cache store.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error for stored cache entries.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Network fetch failed.
    #[error("fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },
    /// A precache manifest entry could not be installed.
    #[error("install failed for {path}: {message}")]
    Install { path: String, message: String },
}
