//! The injected HTTP capability the fetch clients are built on.

use async_trait::async_trait;
use url::Url;

use crate::error::StocksError;
use crate::result::Result;

/// Status and body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body of a 2xx response, or a network error naming the
    /// status otherwise.
    pub fn into_success_body(self) -> Result<Vec<u8>> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(StocksError::Network(format!(
                "server returned HTTP {}",
                self.status
            )))
        }
    }
}

/// Asynchronous GET capability.
///
/// Transport failures (DNS, connect, timeout, body read) are reported as
/// `StocksError::Network`; any received status, including non-2xx, is an
/// `Ok(HttpResponse)`.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Performs a GET request for `url`.
    async fn get(&self, url: &Url) -> Result<HttpResponse>;
}
