//! Endpoint and token configuration for the stock-quote API.
//!
//! Endpoints default to the IEX Cloud routes; templates carry a `{symbol}`
//! placeholder substituted per request. The token is appended as a `token`
//! query parameter to the list and quote requests only.

use std::time::Duration;

use url::Url;

use crate::error::StocksError;
use crate::result::Result;

/// Placeholder replaced with the ticker symbol in endpoint templates.
pub const SYMBOL_PLACEHOLDER: &str = "{symbol}";
/// Default company list endpoint.
pub const DEFAULT_LIST_ENDPOINT: &str = "https://cloud.iexapis.com/stable/stock/market/list/gainers";
/// Default quote endpoint template.
pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://cloud.iexapis.com/stable/stock/{symbol}/quote";
/// Default logo endpoint template.
pub const DEFAULT_LOGO_ENDPOINT: &str = "https://storage.googleapis.com/iex/api/logos/{symbol}.png";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Validated API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Company list URL.
    pub list_endpoint: String,
    /// Quote URL template containing `{symbol}`.
    pub quote_endpoint_template: String,
    /// Logo URL template containing `{symbol}`.
    pub logo_endpoint_template: String,
    /// Static API token.
    pub api_token: String,
    /// Per-request timeout applied by the transport.
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Configuration with the default endpoints and the given token.
    pub fn with_token(api_token: impl Into<String>) -> Result<Self> {
        let config = ApiConfig {
            list_endpoint: DEFAULT_LIST_ENDPOINT.to_string(),
            quote_endpoint_template: DEFAULT_QUOTE_ENDPOINT.to_string(),
            logo_endpoint_template: DEFAULT_LOGO_ENDPOINT.to_string(),
            api_token: api_token.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the token, URL schemes and template placeholders.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(StocksError::Config("API token must not be empty".to_string()));
        }
        check_http_url("list endpoint", &self.list_endpoint)?;
        for (label, template) in [
            ("quote endpoint", &self.quote_endpoint_template),
            ("logo endpoint", &self.logo_endpoint_template),
        ] {
            if !template.contains(SYMBOL_PLACEHOLDER) {
                return Err(StocksError::Config(format!(
                    "{} '{}' has no {} placeholder",
                    label, template, SYMBOL_PLACEHOLDER
                )));
            }
            check_http_url(label, &template.replace(SYMBOL_PLACEHOLDER, "AAPL"))?;
        }
        if self.request_timeout.is_zero() {
            return Err(StocksError::Config("request timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// `{list_endpoint}?token={token}`
    pub fn list_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.list_endpoint)?;
        url.query_pairs_mut().append_pair("token", &self.api_token);
        Ok(url)
    }

    /// Quote URL for `symbol`, with the token.
    pub fn quote_url(&self, symbol: &str) -> Result<Url> {
        let mut url = expand(&self.quote_endpoint_template, symbol)?;
        url.query_pairs_mut().append_pair("token", &self.api_token);
        Ok(url)
    }

    /// Logo URL for `symbol`. No token is sent.
    pub fn logo_url(&self, symbol: &str) -> Result<Url> {
        expand(&self.logo_endpoint_template, symbol)
    }
}

fn check_http_url(label: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| StocksError::Config(format!("{} '{}': {}", label, raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(StocksError::Config(format!(
            "{} must use http or https, got '{}'",
            label, other
        ))),
    }
}

fn expand(template: &str, symbol: &str) -> Result<Url> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.contains(['/', '?', '#', '&', ' ']) {
        return Err(StocksError::NotFound(format!("invalid symbol '{}'", symbol)));
    }
    Ok(Url::parse(&template.replace(SYMBOL_PLACEHOLDER, symbol))?)
}
