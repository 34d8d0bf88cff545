//! Companies and the ordered directory the picker is built from.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StocksError;
use crate::result::Result;

/// A company the user can pick, identified by its ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Company {
    /// Display name (e.g., `Apple Inc`).
    pub name: String,
    /// Ticker symbol (e.g., `AAPL`).
    pub symbol: String,
}

impl Company {
    /// Creates a company from a display name and a symbol.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Company {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Wire shape of one element of the company list endpoint.
#[derive(Debug, Deserialize)]
struct CompanyRecord {
    #[serde(rename = "companyName")]
    company_name: String,
    symbol: String,
}

/// Parses the company list payload.
///
/// The body must be a JSON array. Elements missing a string `companyName` or
/// `symbol` (or carrying empty ones) are skipped with a warning; the remaining
/// companies keep the order of the response.
pub fn parse_company_list(body: &[u8]) -> Result<Vec<Company>> {
    let value: Value = serde_json::from_slice(body)?;
    let Value::Array(items) = value else {
        return Err(StocksError::Parse(
            "company list payload is not a JSON array".to_string(),
        ));
    };

    let mut companies = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<CompanyRecord>(item) {
            Ok(record) => {
                let name = record.company_name.trim();
                let symbol = record.symbol.trim();
                if name.is_empty() || symbol.is_empty() {
                    warn!("Skipping company #{}: empty name or symbol", position);
                    continue;
                }
                companies.push(Company::new(name, symbol));
            }
            Err(e) => warn!("Skipping malformed company #{}: {}", position, e),
        }
    }
    Ok(companies)
}

/// Ordered company list with lookups by index, symbol and name.
///
/// A symbol seen twice keeps its first position; the later entry's name wins.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
    by_symbol: HashMap<String, usize>,
}

impl CompanyDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole directory with `entries`.
    pub fn load(&mut self, entries: impl IntoIterator<Item = Company>) {
        self.companies.clear();
        self.by_symbol.clear();

        for company in entries {
            match self.by_symbol.get(&company.symbol) {
                Some(&index) => self.companies[index].name = company.name,
                None => {
                    self.by_symbol
                        .insert(company.symbol.clone(), self.companies.len());
                    self.companies.push(company);
                }
            }
        }
    }

    /// Number of companies.
    pub fn count(&self) -> usize {
        self.companies.len()
    }

    /// `true` when nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Company at a picker row.
    pub fn company_at(&self, index: usize) -> Option<&Company> {
        self.companies.get(index)
    }

    /// Display name at a picker row.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.company_at(index).map(|c| c.name.as_str())
    }

    /// Symbol at a picker row.
    pub fn symbol_at(&self, index: usize) -> Option<&str> {
        self.company_at(index).map(|c| c.symbol.as_str())
    }

    /// Resolves a display name to its symbol.
    pub fn symbol_of(&self, name: &str) -> Result<&str> {
        self.companies
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.symbol.as_str())
            .ok_or_else(|| StocksError::NotFound(format!("company named '{}'", name)))
    }

    /// Company registered under `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&Company> {
        self.position_of(symbol).map(|i| &self.companies[i])
    }

    /// Picker row of `symbol`.
    pub fn position_of(&self, symbol: &str) -> Option<usize> {
        self.by_symbol.get(symbol).copied()
    }

    /// Companies in picker order.
    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_response_order() {
        let body = br#"[
            {"companyName":"Apple Inc","symbol":"AAPL","latestPrice":1.0},
            {"companyName":"Microsoft","symbol":"MSFT"},
            {"companyName":"Tesla","symbol":"TSLA"}
        ]"#;
        let companies = parse_company_list(body).unwrap();
        let symbols: Vec<_> = companies.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["AAPL", "MSFT", "TSLA"]);
        assert_eq!(companies[0].name, "Apple Inc");
    }

    #[test]
    fn parse_skips_malformed_records() {
        let body = br#"[
            {"companyName":"Apple Inc","symbol":"AAPL"},
            {"companyName":"No Symbol"},
            {"companyName":42,"symbol":"BAD"},
            "not an object",
            {"companyName":"","symbol":"EMPTY"},
            {"companyName":"Tesla","symbol":"TSLA"}
        ]"#;
        let companies = parse_company_list(body).unwrap();
        assert_eq!(
            companies,
            vec![Company::new("Apple Inc", "AAPL"), Company::new("Tesla", "TSLA")]
        );
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_company_list(br#"{"symbol":"AAPL"}"#).unwrap_err();
        assert!(err.is_parse());

        let err = parse_company_list(b"not json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn lookups_by_index_symbol_and_name() {
        let mut dir = CompanyDirectory::new();
        dir.load(vec![
            Company::new("Apple Inc", "AAPL"),
            Company::new("Microsoft", "MSFT"),
        ]);

        assert_eq!(dir.count(), 2);
        assert_eq!(dir.name_at(1), Some("Microsoft"));
        assert_eq!(dir.symbol_at(0), Some("AAPL"));
        assert_eq!(dir.symbol_at(2), None);
        assert_eq!(dir.symbol_of("Microsoft").unwrap(), "MSFT");
        assert_eq!(dir.position_of("MSFT"), Some(1));
        assert!(matches!(
            dir.symbol_of("Nokia"),
            Err(StocksError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_symbol_keeps_first_position_and_last_name() {
        let mut dir = CompanyDirectory::new();
        dir.load(vec![
            Company::new("Apple", "AAPL"),
            Company::new("Microsoft", "MSFT"),
            Company::new("Apple Inc", "AAPL"),
        ]);

        assert_eq!(dir.count(), 2);
        assert_eq!(dir.name_at(0), Some("Apple Inc"));
        assert_eq!(dir.get("AAPL").map(|c| c.name.as_str()), Some("Apple Inc"));
    }

    #[test]
    fn load_replaces_previous_entries() {
        let mut dir = CompanyDirectory::new();
        dir.load(vec![Company::new("Apple", "AAPL")]);
        dir.load(vec![Company::new("Tesla", "TSLA")]);

        assert_eq!(dir.count(), 1);
        assert!(dir.get("AAPL").is_none());
        assert_eq!(dir.symbol_at(0), Some("TSLA"));
    }
}
