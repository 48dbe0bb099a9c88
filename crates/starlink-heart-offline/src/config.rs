//! Offline worker configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the offline cache worker.
///
/// The bucket name and precache manifest are the only externally visible
/// knobs; bumping `cache_name` invalidates the previous version's entries
/// wholesale on the next activation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfflineConfig {
    /// Versioned cache bucket name.
    #[serde(default = "default_cache_name")]
    pub cache_name: String,
    /// Static asset paths pre-populated at install time.
    #[serde(default = "default_precache")]
    pub precache: Vec<String>,
    /// Path segment marking API requests, which are never cached.
    #[serde(default = "default_api_marker")]
    pub api_marker: String,
    /// Origin the worker serves; cross-origin requests pass through.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Shell document served when a navigation fails offline.
    #[serde(default = "default_shell_document")]
    pub shell_document: String,
}

impl Default for OfflineConfig {
    /// Production shell settings.
    fn default() -> Self {
        Self {
            cache_name: default_cache_name(),
            precache: default_precache(),
            api_marker: default_api_marker(),
            origin: default_origin(),
            shell_document: default_shell_document(),
        }
    }
}

/// Current cache bucket version.
fn default_cache_name() -> String {
    "starlink-heart-v1".to_string()
}

/// Static assets required for the shell to boot offline.
fn default_precache() -> Vec<String> {
    vec![
        "/".to_string(),
        "/index.html".to_string(),
        "/manifest.json".to_string(),
    ]
}

/// Default API path marker.
fn default_api_marker() -> String {
    "/api/".to_string()
}

/// Default deployed origin.
fn default_origin() -> String {
    "https://starlinkheart.app".to_string()
}

/// Default shell document path.
fn default_shell_document() -> String {
    "/index.html".to_string()
}
