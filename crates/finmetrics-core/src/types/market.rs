//! Market reference data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Market-wide inputs plus per-ticker price histories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Annual risk-free rate as a decimal (0.03 = 3%).
    pub risk_free_rate: f64,

    /// Expected annual market return as a decimal.
    pub market_return: f64,

    /// Market volatility as a decimal.
    pub volatility: f64,

    /// Chronological closing prices per ticker.
    pub historical_prices: BTreeMap<String, Vec<f64>>,
}

impl MarketData {
    /// Returns the price history for a ticker.
    #[must_use]
    pub fn prices(&self, ticker: &str) -> Option<&[f64]> {
        self.historical_prices.get(ticker).map(Vec::as_slice)
    }
}
