//! Stock quote clients and the coordinator that drives them.
//!
//! - `directory_client`, `quote_client`, `logo_client` — one request each,
//!   built on the injected `HttpFetch` capability.
//! - `coordinator` — `QuoteCoordinator`, which sequences the fetches and owns
//!   the renderer-facing `ViewState`.
//! - `transport` — the reqwest-backed `HttpFetch`.
//! - `testing` — a scripted in-memory `HttpFetch`.
#![warn(missing_docs)]
pub mod coordinator;
pub mod directory_client;
pub mod logo_client;
pub mod quote_client;
pub mod testing;
pub mod transport;

pub use coordinator::{QuoteCoordinator, Selection};
pub use directory_client::DirectoryClient;
pub use logo_client::LogoClient;
pub use quote_client::QuoteClient;
pub use transport::ReqwestFetcher;
