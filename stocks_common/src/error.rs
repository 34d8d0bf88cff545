//! Error types shared between the fetch clients and the coordinator.
//!
//! `StocksError` covers the three failures a user can observe (network, parse,
//! invalid selection) plus the plumbing errors around them, so every crate in
//! the workspace can propagate a single error type with `?`.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type for the stocks workspace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StocksError {
    /// Transport failure or a non-2xx HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// Payload did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Selection index is out of range, or the directory is empty.
    #[error("Invalid selection: index {index} with {len} companies loaded")]
    InvalidSelection {
        /// Requested index.
        index: usize,
        /// Directory size at the time of the request.
        len: usize,
    },

    /// A selection was requested while the company list is being loaded.
    #[error("Company directory is still loading")]
    DirectoryLoading,

    /// A directory load finished after a newer load had started; its result
    /// was not applied.
    #[error("Superseded: {0}")]
    Superseded(String),

    /// A company name or symbol could not be resolved.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid endpoint, template or token configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error, kept as text so the error stays `Clone`.
    #[error("I/O error: {0}")]
    Io(String),

    /// A poisoned lock was encountered.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StocksError {
    /// Returns `true` for transport and HTTP status failures.
    pub fn is_network(&self) -> bool {
        matches!(self, StocksError::Network(_))
    }

    /// Returns `true` for payload shape failures.
    pub fn is_parse(&self) -> bool {
        matches!(self, StocksError::Parse(_))
    }
}

impl From<io::Error> for StocksError {
    fn from(err: io::Error) -> Self {
        StocksError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StocksError {
    fn from(err: serde_json::Error) -> Self {
        StocksError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for StocksError {
    fn from(err: url::ParseError) -> Self {
        StocksError::Config(format!("invalid URL: {}", err))
    }
}

impl<T> From<PoisonError<T>> for StocksError {
    fn from(err: PoisonError<T>) -> Self {
        StocksError::LockPoisoned(err.to_string())
    }
}
