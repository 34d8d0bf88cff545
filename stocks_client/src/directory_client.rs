//! Fetches the company list the picker is populated from.
use std::sync::Arc;

use log::{debug, info};
use stocks_common::company::parse_company_list;
use stocks_common::{ApiConfig, Company, HttpFetch, Result};

/// Single-request client for the company list endpoint.
pub struct DirectoryClient<H> {
    http: Arc<H>,
    config: Arc<ApiConfig>,
}

impl<H> Clone for DirectoryClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: HttpFetch> DirectoryClient<H> {
    /// Creates a client sharing `http` and `config`.
    pub fn new(http: Arc<H>, config: Arc<ApiConfig>) -> Self {
        Self { http, config }
    }

    /// Downloads and parses the company list.
    ///
    /// Fails with `Network` on transport errors or a non-2xx status and with
    /// `Parse` when the body is not a JSON array. Malformed entries are
    /// skipped.
    pub async fn fetch_all(&self) -> Result<Vec<Company>> {
        let url = self.config.list_url()?;
        debug!("Fetching company list from {}", url.path());

        let body = self.http.get(&url).await?.into_success_body()?;
        let companies = parse_company_list(&body)?;

        info!("Company list loaded: {} entries", companies.len());
        Ok(companies)
    }
}
