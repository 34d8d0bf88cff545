//! Command-line arguments for the stocks viewer.
//!
//! Every option can also be supplied through its `STOCKS_*` environment variable.
use std::time::Duration;

use clap::Parser;
use stocks_common::config::{
    DEFAULT_LIST_ENDPOINT, DEFAULT_LOGO_ENDPOINT, DEFAULT_QUOTE_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use stocks_common::{ApiConfig, Result};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// API token sent with list and quote requests.
    #[clap(long, env = "STOCKS_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Company list endpoint.
    #[clap(long, env = "STOCKS_LIST_ENDPOINT", default_value = DEFAULT_LIST_ENDPOINT)]
    pub list_endpoint: String,

    /// Quote endpoint template; `{symbol}` is replaced with the ticker.
    #[clap(long, env = "STOCKS_QUOTE_ENDPOINT", default_value = DEFAULT_QUOTE_ENDPOINT)]
    pub quote_endpoint: String,

    /// Logo endpoint template; `{symbol}` is replaced with the ticker.
    #[clap(long, env = "STOCKS_LOGO_ENDPOINT", default_value = DEFAULT_LOGO_ENDPOINT)]
    pub logo_endpoint: String,

    /// Per-request timeout in seconds.
    #[clap(long, env = "STOCKS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Company to show instead of the first one in the list (display name).
    #[clap(long)]
    pub company: Option<String>,

    /// Print the company list before the quote.
    #[clap(long)]
    pub list: bool,
}

impl Args {
    /// Builds and validates the API configuration.
    pub fn to_config(&self) -> Result<ApiConfig> {
        let config = ApiConfig {
            list_endpoint: self.list_endpoint.trim().to_string(),
            quote_endpoint_template: self.quote_endpoint.trim().to_string(),
            logo_endpoint_template: self.logo_endpoint.trim().to_string(),
            api_token: self.token.trim().to_string(),
            request_timeout: Duration::from_secs(self.timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_valid_config() {
        let args = Args::parse_from(["stocks", "--token", " pk_123 "]);
        let config = args.to_config().unwrap();
        assert_eq!(config.api_token, "pk_123");
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!args.list);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let args = Args::parse_from(["stocks", "--token", "pk", "--timeout-secs", "0"]);
        assert!(args.to_config().is_err());
    }
}
