//! Request and response types handled by the offline worker.

use serde::{Deserialize, Serialize};

/// HTTP method of an intercepted request. Only GET is interceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET.
    Get,
    /// HEAD.
    Head,
    /// POST.
    Post,
    /// PUT.
    Put,
    /// DELETE.
    Delete,
    /// PATCH.
    Patch,
    /// OPTIONS.
    Options,
}

/// A request observed by the worker's fetch hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Request method.
    pub method: HttpMethod,
    /// Request URL, absolute or origin-relative.
    pub url: String,
    /// Whether the request is a page navigation (document load).
    pub is_navigation: bool,
}

impl FetchRequest {
    /// Plain GET for a URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            is_navigation: false,
        }
    }

    /// Navigation GET for a URL.
    pub fn navigation(url: impl Into<String>) -> Self {
        Self {
            is_navigation: true,
            ..Self::get(url)
        }
    }
}

/// Snapshot of a response, as stored in a cache bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResponse {
    /// Absolute URL the response was served for; doubles as the cache key.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Content type, if the server sent one.
    pub content_type: Option<String>,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl StoredResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where a served response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    /// Served from the cache bucket without a network round trip.
    Cache,
    /// Served fresh from the network.
    Network,
    /// Cached shell document served for a failed navigation.
    ShellFallback,
}

/// Outcome of intercepting one fetch event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchDecision {
    /// The worker does not answer; default fetch behavior applies.
    Passthrough,
    /// The worker answers with the given response.
    Respond {
        /// Response handed back to the requester.
        response: StoredResponse,
        /// Diagnostic tag for where the response came from.
        source: ResponseSource,
    },
}
