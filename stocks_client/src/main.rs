//! Stocks — a terminal viewer for the latest quote of a listed company.
//!
//! It loads the company list from the quote API, selects the first company (or
//! the one named with `--company`), waits for its quote and logo, and prints
//! the result.
//!
//! Usage example (CLI):
//! ```bash
//! STOCKS_API_TOKEN=pk_... stocks --list --company "Apple Inc"
//! ```
#![warn(missing_docs)]
mod args;
mod render;

use std::io::IsTerminal;
use std::sync::Arc;

use clap::Parser;
use log::{debug, info};
use stocks_client::{QuoteCoordinator, ReqwestFetcher};
use stocks_common::{Result, StocksError};

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<(), StocksError> {
    init_logger();
    let args = Args::parse();
    let config = args.to_config()?;

    let http = Arc::new(ReqwestFetcher::new(config.request_timeout)?);
    let coordinator = QuoteCoordinator::new(http, config);

    let mut updates = coordinator.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let line = render::status_line(&updates.borrow_and_update());
            debug!("{}", line);
        }
    });

    let mut selection = coordinator.start().await?;

    if args.list {
        for (index, company) in coordinator.directory()?.iter().enumerate() {
            info!("{:>3}  {:<6} {}", index, company.symbol, company.name);
        }
    }

    if let Some(name) = &args.company {
        selection = Some(coordinator.select_name(name)?);
    }

    if let Some(selection) = selection {
        info!("Waiting for {}...", selection.symbol());
        selection.settled().await;
    }

    let color = std::io::stdout().is_terminal();
    println!("{}", render::render(&coordinator.snapshot(), color));
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
