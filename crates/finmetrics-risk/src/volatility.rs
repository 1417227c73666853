//! Price volatility.
//!
//! Volatility here is the population standard deviation of simple
//! period-over-period returns.

use crate::error::{ensure_finite, RiskResult};
use finmetrics_core::stats::population_std_dev;
use finmetrics_core::MarketData;
use std::collections::BTreeMap;

/// Simple returns `(p[i] - p[i-1]) / p[i-1]` of a price series.
///
/// Steps whose previous price is zero have no defined return and are
/// skipped.
///
/// # Errors
///
/// Returns `NonFiniteInput` if any price is NaN or infinite.
pub fn period_returns(prices: &[f64]) -> RiskResult<Vec<f64>> {
    ensure_finite("prices", prices)?;

    Ok(prices
        .windows(2)
        .filter_map(|w| {
            if w[0] == 0.0 {
                log::debug!("skipping return after a zero price");
                None
            } else {
                Some((w[1] - w[0]) / w[0])
            }
        })
        .collect())
}

/// Volatility of a price series.
///
/// Returns 0 for fewer than two prices and for a constant series.
///
/// # Errors
///
/// Returns `NonFiniteInput` if any price is NaN or infinite.
pub fn volatility(prices: &[f64]) -> RiskResult<f64> {
    if prices.len() < 2 {
        ensure_finite("prices", prices)?;
        return Ok(0.0);
    }
    let returns = period_returns(prices)?;
    Ok(population_std_dev(&returns))
}

/// Volatility of every price history in the market data, keyed by ticker.
///
/// # Errors
///
/// Returns `NonFiniteInput` naming the first ticker with a bad price.
pub fn historical_volatilities(market: &MarketData) -> RiskResult<BTreeMap<String, f64>> {
    market
        .historical_prices
        .iter()
        .map(|(ticker, prices)| {
            ensure_finite(&format!("prices of {ticker}"), prices)?;
            Ok((ticker.clone(), volatility(prices)?))
        })
        .collect()
}
