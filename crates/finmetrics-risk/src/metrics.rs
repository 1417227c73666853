//! Return statistics and the Sharpe ratio.

use crate::error::{ensure_finite, RiskResult};
use finmetrics_core::stats::{mean, population_std_dev};
use serde::{Deserialize, Serialize};

/// Risk-free rate used when the caller has no better figure.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.03;

/// Summary statistics for a series of periodic returns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Arithmetic mean of the returns.
    pub avg_return: f64,
    /// Population standard deviation of the returns.
    pub volatility: f64,
    /// `(avg_return - risk_free_rate) / volatility`, or 0 when volatility is 0.
    pub sharpe_ratio: f64,
}

impl RiskMetrics {
    /// Returns `(avg_return, volatility, sharpe_ratio)`.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.avg_return, self.volatility, self.sharpe_ratio)
    }

    /// Excess return over the given risk-free rate.
    #[must_use]
    pub fn excess_return(&self, risk_free_rate: f64) -> f64 {
        self.avg_return - risk_free_rate
    }
}

/// Computes average return, volatility and Sharpe ratio.
///
/// An empty series yields all zeros.
///
/// # Errors
///
/// Returns `NonFiniteInput` if a return or the risk-free rate is NaN or
/// infinite.
pub fn risk_metrics(returns: &[f64], risk_free_rate: f64) -> RiskResult<RiskMetrics> {
    ensure_finite("returns", returns)?;
    ensure_finite("risk_free_rate", &[risk_free_rate])?;

    if returns.is_empty() {
        return Ok(RiskMetrics::default());
    }

    let avg_return = mean(returns);
    let volatility = population_std_dev(returns);

    let sharpe_ratio = if volatility > 0.0 {
        (avg_return - risk_free_rate) / volatility
    } else {
        log::debug!("zero volatility over {} returns, sharpe set to 0", returns.len());
        0.0
    };

    Ok(RiskMetrics {
        avg_return,
        volatility,
        sharpe_ratio,
    })
}

/// [`risk_metrics`] with [`DEFAULT_RISK_FREE_RATE`].
///
/// # Errors
///
/// Returns `NonFiniteInput` if a return is NaN or infinite.
pub fn risk_metrics_default(returns: &[f64]) -> RiskResult<RiskMetrics> {
    risk_metrics(returns, DEFAULT_RISK_FREE_RATE)
}
