//! Fetches company logos. Never fails: any problem yields the fallback.
use std::sync::Arc;

use log::{debug, warn};
use stocks_common::{ApiConfig, HttpFetch, LogoImage};

/// Single-request client for the per-symbol logo endpoint.
pub struct LogoClient<H> {
    http: Arc<H>,
    config: Arc<ApiConfig>,
}

impl<H> Clone for LogoClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: HttpFetch> LogoClient<H> {
    /// Creates a client sharing `http` and `config`.
    pub fn new(http: Arc<H>, config: Arc<ApiConfig>) -> Self {
        Self { http, config }
    }

    /// Downloads the logo for `symbol`, or returns the fallback placeholder.
    pub async fn fetch_logo(&self, symbol: &str) -> LogoImage {
        let url = match self.config.logo_url(symbol) {
            Ok(url) => url,
            Err(e) => {
                warn!("Logo for {} unavailable: {}", symbol, e);
                return LogoImage::fallback(symbol);
            }
        };

        let body = match self.http.get(&url).await.and_then(|r| r.into_success_body()) {
            Ok(body) => body,
            Err(e) => {
                warn!("Logo for {} unavailable: {}", symbol, e);
                return LogoImage::fallback(symbol);
            }
        };

        let logo = LogoImage::from_bytes(symbol, body);
        match logo.format {
            Some(format) => debug!("Logo for {}: {} ({} bytes)", symbol, format, logo.bytes.len()),
            None => debug!("Logo for {} is not a known image format, using fallback", symbol),
        }
        logo
    }
}
