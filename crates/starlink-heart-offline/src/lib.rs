//! Offline cache worker for the Starlink Heart application shell.
//!
//! Implements the install/activate/fetch lifecycle: static assets are
//! precached at install time, stale cache versions are swept on activation,
//! and GET requests are served cache-first with write-through population and
//! a shell-document fallback for offline navigations. Storage and network
//! transport sit behind trait seams so the worker runs against any host.

pub mod config;
pub mod disk;
pub mod error;
pub mod fetcher;
pub mod store;
pub mod types;
pub mod worker;

/// Worker configuration.
pub use config::OfflineConfig;
/// File-backed cache store.
pub use disk::FileCacheStore;
/// Offline error type.
pub use error::OfflineError;
/// Network seam and the reqwest-backed adapter.
pub use fetcher::{HttpFetcher, NetworkFetcher};
/// Cache bucket seam and the in-memory adapter.
pub use store::{CacheStore, MemoryCacheStore};
/// Request, response, and decision types.
pub use types::{FetchDecision, FetchRequest, HttpMethod, ResponseSource, StoredResponse};
/// The worker lifecycle itself.
pub use worker::OfflineWorker;
