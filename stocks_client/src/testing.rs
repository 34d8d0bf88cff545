//! In-memory `HttpFetch` with scripted replies, for tests and demos.
//!
//! Replies are queued per URL path and served in order. A gated reply holds
//! the request until its `oneshot::Sender` fires (or is dropped), which lets a
//! test decide exactly when a response arrives.
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use stocks_common::http::{HttpFetch, HttpResponse};
use stocks_common::{ApiConfig, Result, StocksError};
use tokio::sync::oneshot;
use url::Url;

/// Smallest byte string that sniffs as PNG.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// Configuration whose routes match the paths used with `ScriptedFetcher`:
/// `/list`, `/stock/{symbol}/quote`, `/logos/{symbol}.png`.
pub fn test_config() -> ApiConfig {
    ApiConfig {
        list_endpoint: "http://stocks.test/list".to_string(),
        quote_endpoint_template: "http://stocks.test/stock/{symbol}/quote".to_string(),
        logo_endpoint_template: "http://stocks.test/logos/{symbol}.png".to_string(),
        api_token: "test-token".to_string(),
        request_timeout: Duration::from_secs(1),
    }
}

enum Reply {
    Ready(Result<HttpResponse>),
    Gated(oneshot::Receiver<()>, Result<HttpResponse>),
}

/// Scripted transport keyed by URL path.
#[derive(Default)]
pub struct ScriptedFetcher {
    routes: Mutex<HashMap<String, VecDeque<Reply>>>,
    hits: Mutex<HashMap<String, usize>>,
}

impl ScriptedFetcher {
    /// Creates a fetcher with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for `path`.
    pub fn respond(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.push(path, Reply::Ready(Ok(HttpResponse::new(status, body))));
    }

    /// Queues a transport failure for `path`.
    pub fn fail(&self, path: &str, message: &str) {
        self.push(path, Reply::Ready(Err(StocksError::Network(message.to_string()))));
    }

    /// Queues a response for `path` that is held until the returned sender
    /// fires or is dropped.
    pub fn gated(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(path, Reply::Gated(rx, Ok(HttpResponse::new(status, body))));
        tx
    }

    /// Number of requests made for `path`.
    pub fn hits(&self, path: &str) -> usize {
        let hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);
        hits.get(path).copied().unwrap_or(0)
    }

    /// Number of requests made for any path.
    pub fn total_hits(&self) -> usize {
        let hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);
        hits.values().sum()
    }

    fn push(&self, path: &str, reply: Reply) {
        let mut routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
        routes.entry(path.to_string()).or_default().push_back(reply);
    }
}

#[async_trait]
impl HttpFetch for ScriptedFetcher {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        let path = url.path().to_string();
        *self
            .hits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.clone())
            .or_default() += 1;

        let reply = self
            .routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&path)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(gate, result)) => {
                let _ = gate.await;
                result
            }
            None => Err(StocksError::Network(format!("no scripted reply for {}", path))),
        }
    }
}
