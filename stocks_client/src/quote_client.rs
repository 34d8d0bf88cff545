//! Fetches the latest quote for one symbol.
use std::sync::Arc;

use log::debug;
use stocks_common::{ApiConfig, HttpFetch, Quote, Result};

/// Single-request client for the per-symbol quote endpoint.
pub struct QuoteClient<H> {
    http: Arc<H>,
    config: Arc<ApiConfig>,
}

impl<H> Clone for QuoteClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: HttpFetch> QuoteClient<H> {
    /// Creates a client sharing `http` and `config`.
    pub fn new(http: Arc<H>, config: Arc<ApiConfig>) -> Self {
        Self { http, config }
    }

    /// Requests and parses the quote for `symbol`.
    ///
    /// The price change is returned signed as received.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Quote> {
        let url = self.config.quote_url(symbol)?;
        let body = self.http.get(&url).await?.into_success_body()?;
        let quote = Quote::from_json(&body)?;

        debug!(
            "QUOTE: {} Price={:.2} Change={:+.2}",
            quote.symbol, quote.price, quote.price_change
        );
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_config, ScriptedFetcher};
    use stocks_common::StocksError;

    fn client(http: &Arc<ScriptedFetcher>) -> QuoteClient<ScriptedFetcher> {
        QuoteClient::new(Arc::clone(http), Arc::new(test_config()))
    }

    #[tokio::test]
    async fn returns_exact_values() {
        let http = Arc::new(ScriptedFetcher::new());
        http.respond(
            "/stock/AAPL/quote",
            200,
            r#"{"companyName":"Apple","symbol":"AAPL","latestPrice":150.25,"change":-2.5}"#,
        );

        let quote = client(&http).fetch_quote("AAPL").await.unwrap();
        assert_eq!(quote.company_name, "Apple");
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, 150.25);
        assert_eq!(quote.price_change, -2.5);
    }

    #[tokio::test]
    async fn missing_latest_price_is_parse_error() {
        let http = Arc::new(ScriptedFetcher::new());
        http.respond(
            "/stock/AAPL/quote",
            200,
            r#"{"companyName":"Apple","symbol":"AAPL","change":-2.5}"#,
        );

        assert!(matches!(
            client(&http).fetch_quote("AAPL").await,
            Err(StocksError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let http = Arc::new(ScriptedFetcher::new());
        http.fail("/stock/AAPL/quote", "connection reset");

        assert!(client(&http).fetch_quote("AAPL").await.unwrap_err().is_network());
    }

    #[tokio::test]
    async fn empty_symbol_is_rejected_without_request() {
        let http = Arc::new(ScriptedFetcher::new());

        assert!(matches!(
            client(&http).fetch_quote(" ").await,
            Err(StocksError::NotFound(_))
        ));
        assert_eq!(http.total_hits(), 0);
    }
}
