//! Offline worker policy tests against stub transport and storage.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use starlink_heart_offline::{
    CacheStore, FetchDecision, FetchRequest, HttpMethod, MemoryCacheStore, NetworkFetcher,
    OfflineConfig, OfflineError, OfflineWorker, ResponseSource, StoredResponse,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Canned-response fetcher that counts round trips and can go offline.
struct StubFetcher {
    responses: HashMap<String, StoredResponse>,
    calls: AtomicUsize,
    offline: AtomicBool,
}

impl StubFetcher {
    fn new(responses: impl IntoIterator<Item = (String, StoredResponse)>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            calls: AtomicUsize::new(0),
            offline: AtomicBool::new(false),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl NetworkFetcher for StubFetcher {
    async fn fetch(&self, request: &FetchRequest) -> Result<StoredResponse, OfflineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(OfflineError::Fetch {
                url: request.url.clone(),
                message: "network unreachable".to_string(),
            });
        }
        self.responses
            .get(&request.url)
            .cloned()
            .ok_or_else(|| OfflineError::Fetch {
                url: request.url.clone(),
                message: "no canned response".to_string(),
            })
    }
}

fn response(url: &str, body: &str) -> StoredResponse {
    StoredResponse {
        url: url.to_string(),
        status: 200,
        content_type: Some("text/html".to_string()),
        body: body.as_bytes().to_vec(),
    }
}

fn asset(path: &str, body: &str) -> (String, StoredResponse) {
    let url = format!("https://starlinkheart.app{path}");
    (url.clone(), response(&url, body))
}

fn worker_with(
    fetcher: Arc<StubFetcher>,
) -> (OfflineWorker, Arc<MemoryCacheStore>, Arc<StubFetcher>) {
    let store = Arc::new(MemoryCacheStore::new());
    let worker = OfflineWorker::new(OfflineConfig::default(), store.clone(), fetcher.clone());
    (worker, store, fetcher)
}

#[tokio::test]
async fn cache_first_skips_network_on_second_request() {
    let fetcher = Arc::new(StubFetcher::new([asset("/app.js", "console.log(1)")]));
    let (worker, _store, fetcher) = worker_with(fetcher);

    let request = FetchRequest::get("/app.js");
    let first = worker.handle_fetch(&request).await.expect("first");
    let second = worker.handle_fetch(&request).await.expect("second");

    assert!(matches!(
        first,
        FetchDecision::Respond {
            source: ResponseSource::Network,
            ..
        }
    ));
    match second {
        FetchDecision::Respond { response, source } => {
            assert_eq!(source, ResponseSource::Cache);
            assert_eq!(response.body, b"console.log(1)".to_vec());
        }
        other => panic!("expected cache hit, got {other:?}"),
    }
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn absolute_and_relative_urls_share_one_cache_entry() {
    let fetcher = Arc::new(StubFetcher::new([asset("/app.js", "console.log(1)")]));
    let (worker, _store, fetcher) = worker_with(fetcher);

    worker
        .handle_fetch(&FetchRequest::get("https://starlinkheart.app/app.js"))
        .await
        .expect("absolute");
    let relative = worker
        .handle_fetch(&FetchRequest::get("/app.js"))
        .await
        .expect("relative");

    assert!(matches!(
        relative,
        FetchDecision::Respond {
            source: ResponseSource::Cache,
            ..
        }
    ));
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn non_get_requests_pass_through() {
    let fetcher = Arc::new(StubFetcher::new([]));
    let (worker, _store, fetcher) = worker_with(fetcher);

    let request = FetchRequest {
        method: HttpMethod::Post,
        url: "/chat".to_string(),
        is_navigation: false,
    };
    let decision = worker.handle_fetch(&request).await.expect("decision");

    assert_eq!(decision, FetchDecision::Passthrough);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn api_and_cross_origin_requests_pass_through() {
    let fetcher = Arc::new(StubFetcher::new([]));
    let (worker, _store, fetcher) = worker_with(fetcher);

    for url in [
        "/api/chat/completions",
        "https://starlinkheart.app/api/profile",
        "https://fonts.example.com/star.woff2",
        "https://starlinkheart.app.evil.com/",
    ] {
        let decision = worker
            .handle_fetch(&FetchRequest::get(url))
            .await
            .expect("decision");
        assert_eq!(decision, FetchDecision::Passthrough, "url: {url}");
    }
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn unsuccessful_responses_are_served_but_not_cached() {
    let url = "https://starlinkheart.app/missing.png".to_string();
    let not_found = StoredResponse {
        url: url.clone(),
        status: 404,
        content_type: None,
        body: Vec::new(),
    };
    let fetcher = Arc::new(StubFetcher::new([(url, not_found)]));
    let (worker, _store, fetcher) = worker_with(fetcher);

    let request = FetchRequest::get("/missing.png");
    for _ in 0..2 {
        let decision = worker.handle_fetch(&request).await.expect("decision");
        assert!(matches!(
            decision,
            FetchDecision::Respond {
                source: ResponseSource::Network,
                ..
            }
        ));
    }
    // No write-through for non-2xx, so both requests hit the network.
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn offline_navigation_falls_back_to_cached_shell() {
    let fetcher = Arc::new(StubFetcher::new([
        asset("/", "<html>shell</html>"),
        asset("/index.html", "<html>shell</html>"),
        asset("/manifest.json", "{}"),
    ]));
    let (worker, _store, fetcher) = worker_with(fetcher);

    worker.install().await.expect("install");
    fetcher.set_offline(true);

    let decision = worker
        .handle_fetch(&FetchRequest::navigation("/friends"))
        .await
        .expect("decision");

    match decision {
        FetchDecision::Respond { response, source } => {
            assert_eq!(source, ResponseSource::ShellFallback);
            assert_eq!(response.url, "https://starlinkheart.app/index.html");
            assert_eq!(response.body, b"<html>shell</html>".to_vec());
        }
        other => panic!("expected shell fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn offline_subresource_failure_propagates() {
    let fetcher = Arc::new(StubFetcher::new([]));
    let (worker, _store, fetcher) = worker_with(fetcher);
    fetcher.set_offline(true);

    let result = worker.handle_fetch(&FetchRequest::get("/sprite.png")).await;
    assert!(matches!(result, Err(OfflineError::Fetch { .. })));
}

#[tokio::test]
async fn install_fails_when_a_manifest_entry_is_missing() {
    // "/manifest.json" has no canned response.
    let fetcher = Arc::new(StubFetcher::new([
        asset("/", "<html>shell</html>"),
        asset("/index.html", "<html>shell</html>"),
    ]));
    let (worker, store, _fetcher) = worker_with(fetcher);

    let result = worker.install().await;
    assert!(matches!(result, Err(OfflineError::Install { .. })));

    // The failed entry was never stored.
    let miss = store
        .lookup("starlink-heart-v1", "https://starlinkheart.app/manifest.json")
        .await
        .expect("lookup");
    assert_eq!(miss, None);
}

#[tokio::test]
async fn activate_sweeps_stale_buckets() {
    let fetcher = Arc::new(StubFetcher::new([]));
    let (worker, store, _fetcher) = worker_with(fetcher);

    store
        .put("starlink-heart-v0", response("https://starlinkheart.app/", "old"))
        .await
        .expect("put old");
    store
        .put(
            "starlink-heart-v1",
            response("https://starlinkheart.app/", "new"),
        )
        .await
        .expect("put new");

    worker.activate().await.expect("activate");

    let buckets = store.buckets().await.expect("buckets");
    assert_eq!(buckets, vec!["starlink-heart-v1".to_string()]);
    let kept = store
        .lookup("starlink-heart-v1", "https://starlinkheart.app/")
        .await
        .expect("lookup")
        .expect("hit");
    assert_eq!(kept.body, b"new".to_vec());
}
