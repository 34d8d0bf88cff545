//! Production `HttpFetch` backed by `reqwest`.
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use stocks_common::http::{HttpFetch, HttpResponse};
use stocks_common::{Result, StocksError};
use url::Url;

/// Shared reqwest client with a per-request timeout.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Builds the underlying client.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StocksError::Network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetcher {
    async fn get(&self, url: &Url) -> Result<HttpResponse> {
        // The query carries the API token, keep it out of the logs.
        debug!("GET {}{}", url.host_str().unwrap_or_default(), url.path());

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                StocksError::Network(format!("request to {} failed: {}", url.path(), e.without_url()))
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                StocksError::Network(format!("failed to read response body: {}", e.without_url()))
            })?;

        debug!("{} -> HTTP {} ({} bytes)", url.path(), status, body.len());
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
