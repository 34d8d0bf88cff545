//! Quote data model and payload parsing.
//!
//! A `Quote` is a point-in-time snapshot of one symbol: the latest traded
//! price and the signed change against the previous close. Deciding how to
//! present the sign (colour, arrow) is left to the renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StocksError;
use crate::result::Result;

/// Latest quote for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol as reported by the API.
    pub symbol: String,
    /// Company display name as reported by the API.
    pub company_name: String,
    /// Latest traded price.
    pub price: f64,
    /// Signed change against the previous close.
    pub price_change: f64,
    /// When the quote was received.
    pub fetched_at: DateTime<Utc>,
}

/// Wire shape of the quote endpoint; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    #[serde(rename = "companyName")]
    company_name: String,
    symbol: String,
    #[serde(rename = "latestPrice")]
    latest_price: f64,
    change: f64,
}

impl Quote {
    /// Parses a quote payload.
    ///
    /// `companyName`, `symbol`, `latestPrice` and `change` are required; a
    /// missing, `null` or mistyped field is a parse error.
    pub fn from_json(body: &[u8]) -> Result<Quote> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(StocksError::Parse("empty quote payload".to_string()));
        }
        let record: QuoteRecord = serde_json::from_slice(body)?;

        Ok(Quote {
            symbol: record.symbol,
            company_name: record.company_name,
            price: record.latest_price,
            price_change: record.change,
            fetched_at: Utc::now(),
        })
    }

    /// `true` when the price went down.
    pub fn is_decline(&self) -> bool {
        self.price_change < 0.0
    }
}
