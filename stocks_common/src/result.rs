//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `StocksError`, so functions can simply return
//! `Result<T>`.
use crate::error::StocksError;

/// Workspace-wide `Result` alias with `StocksError` as the default error.
pub type Result<T, E = StocksError> = std::result::Result<T, E>;
