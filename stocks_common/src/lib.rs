//!
//! Common types shared by the stock quote clients and the coordinator.
//!
//! This crate aggregates:
//! - `error` — unified error type `StocksError` used across the workspace.
//! - `result` — handy `Result<T, StocksError>` alias.
//! - `company` — companies, the ordered directory, and list parsing.
//! - `quote` — quote snapshots and quote payload parsing.
//! - `logo` — logo payloads and the fallback placeholder.
//! - `view` — the renderer-facing `ViewState` and its transitions.
//! - `config` — endpoints, token and URL building.
//! - `http` — the injected `HttpFetch` capability.
#![warn(missing_docs)]
pub mod company;
pub mod config;
pub mod error;
pub mod http;
pub mod logo;
pub mod quote;
pub mod result;
pub mod view;

pub use company::{Company, CompanyDirectory};
pub use config::ApiConfig;
pub use error::StocksError;
pub use http::{HttpFetch, HttpResponse};
pub use logo::{ImageFormat, LogoImage};
pub use quote::Quote;
pub use result::Result;
pub use view::{Phase, ViewState, ViewStatus};
