//! Gain/loss performance analysis.

use super::parallel::maybe_parallel_map;
use super::valuation::{portfolio_value_with_config, total_cost_basis_with_config};
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{AnalyticsConfig, Period};
use finmetrics_core::stats::decimal_ratio_pct;
use finmetrics_core::{CoreError, CoreResult, Holding};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Gain/loss of a single holding since purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingPerformance {
    /// Ticker symbol.
    pub ticker: String,

    /// Change in value as a percentage of the cost basis.
    pub percent_change: f64,

    /// Change in value in currency units.
    pub dollar_change: Decimal,
}

impl HoldingPerformance {
    /// Computes the performance of one holding.
    ///
    /// A holding with zero cost basis reports a 0% change.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the position value exceeds the decimal range.
    pub fn from_holding(holding: &Holding) -> CoreResult<Self> {
        let cost = holding.cost_basis()?;
        let dollar_change = holding.unrealized_gain()?;
        Ok(Self {
            ticker: holding.ticker.clone(),
            percent_change: ratio_pct(dollar_change, cost, &holding.ticker),
            dollar_change,
        })
    }
}

/// Portfolio-level performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Current value minus total invested.
    pub total_gain_loss: Decimal,

    /// Total gain/loss as a percentage of the amount invested.
    pub percent_gain_loss: f64,

    /// Holding with the highest percent change (first one on ties).
    pub best_performer: HoldingPerformance,

    /// Holding with the lowest percent change (first one on ties).
    pub worst_performer: HoldingPerformance,

    /// Period label echoed from the request.
    pub analysis_period: Period,

    /// Total amount invested.
    pub total_invested: Decimal,

    /// Current market value.
    pub current_value: Decimal,

    /// Per-holding performance in input order.
    pub holdings: Vec<HoldingPerformance>,
}

/// Analyzes portfolio gain/loss and picks the best and worst performers.
///
/// # Errors
///
/// Returns [`PortfolioError::EmptyPortfolio`] if `holdings` is empty, or
/// `Overflow` if a value or total exceeds the decimal range.
pub fn analyze_performance(
    holdings: &[Holding],
    period: Period,
) -> PortfolioResult<PerformanceReport> {
    analyze_performance_with_config(holdings, period, &AnalyticsConfig::default())
}

/// [`analyze_performance`] with explicit analytics configuration.
///
/// # Errors
///
/// Returns [`PortfolioError::EmptyPortfolio`] if `holdings` is empty, or
/// `Overflow` if a value or total exceeds the decimal range.
pub fn analyze_performance_with_config(
    holdings: &[Holding],
    period: Period,
    config: &AnalyticsConfig,
) -> PortfolioResult<PerformanceReport> {
    let performances = maybe_parallel_map(holdings, config, HoldingPerformance::from_holding)
        .into_iter()
        .collect::<CoreResult<Vec<_>>>()?;

    let (best, worst) = best_and_worst(&performances).ok_or(PortfolioError::EmptyPortfolio)?;
    let (best_performer, worst_performer) = (best.clone(), worst.clone());

    let total_invested = total_cost_basis_with_config(holdings, config)?;
    let current_value = portfolio_value_with_config(holdings, config)?;
    let total_gain_loss = current_value
        .checked_sub(total_invested)
        .ok_or_else(|| CoreError::overflow("total gain/loss"))?;

    Ok(PerformanceReport {
        total_gain_loss,
        percent_gain_loss: ratio_pct(total_gain_loss, total_invested, "portfolio"),
        best_performer,
        worst_performer,
        analysis_period: period,
        total_invested,
        current_value,
        holdings: performances,
    })
}

/// Stable max/min selection: a later entry only wins on a strict improvement.
fn best_and_worst(
    performances: &[HoldingPerformance],
) -> Option<(&HoldingPerformance, &HoldingPerformance)> {
    let first = performances.first()?;
    let mut best = first;
    let mut worst = first;

    for p in &performances[1..] {
        if p.percent_change > best.percent_change {
            best = p;
        }
        if p.percent_change < worst.percent_change {
            worst = p;
        }
    }

    Some((best, worst))
}

/// `delta / base × 100` as `f64`, or 0 when `base` is zero.
fn ratio_pct(delta: Decimal, base: Decimal, label: &str) -> f64 {
    decimal_ratio_pct(delta, base).unwrap_or_else(|| {
        log::debug!("zero cost basis for {}, reporting 0% change", label);
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finmetrics_core::samples::sample_portfolio;
    use rust_decimal_macros::dec;

    fn holding(ticker: &str, purchase: Decimal, current: Decimal) -> Holding {
        Holding::new(ticker, dec!(10), purchase, current, "Test").unwrap()
    }

    #[test]
    fn test_sample_performance() {
        let report = analyze_performance(&sample_portfolio(), Period::OneYear).unwrap();

        assert_eq!(report.total_invested, dec!(6620));
        assert_eq!(report.current_value, dec!(7180));
        assert_eq!(report.total_gain_loss, dec!(560));
        assert_relative_eq!(report.percent_gain_loss, 560.0 / 6620.0 * 100.0, epsilon = 1e-9);
        assert_eq!(report.best_performer.ticker, "AAPL");
        assert_eq!(report.worst_performer.ticker, "JNJ");
        assert_relative_eq!(report.worst_performer.percent_change, -3.125, epsilon = 1e-9);
        assert_eq!(report.worst_performer.dollar_change, dec!(-40));
        assert_eq!(report.analysis_period, Period::OneYear);
        assert_eq!(report.holdings.len(), 5);
    }

    #[test]
    fn test_period_is_echoed() {
        let holdings = sample_portfolio();
        for period in Period::ALL {
            let report = analyze_performance(&holdings, period).unwrap();
            assert_eq!(report.analysis_period, period);
        }
    }

    #[test]
    fn test_ties_pick_first_in_order() {
        let holdings = vec![
            holding("A", dec!(100), dec!(110)),
            holding("B", dec!(50), dec!(55)),
            holding("C", dec!(10), dec!(11)),
        ];
        let report = analyze_performance(&holdings, Period::OneMonth).unwrap();
        assert_eq!(report.best_performer.ticker, "A");
        assert_eq!(report.worst_performer.ticker, "A");
    }

    #[test]
    fn test_empty_portfolio_errors() {
        assert_eq!(
            analyze_performance(&[], Period::OneYear),
            Err(PortfolioError::EmptyPortfolio)
        );
    }

    #[test]
    fn test_zero_invested_reports_zero_percent() {
        let holdings = vec![holding("FREE", Decimal::ZERO, dec!(5))];
        let report = analyze_performance(&holdings, Period::OneYear).unwrap();

        assert_eq!(report.total_gain_loss, dec!(50));
        assert_eq!(report.percent_gain_loss, 0.0);
        assert_eq!(report.best_performer.percent_change, 0.0);
        assert_eq!(report.best_performer.dollar_change, dec!(50));
    }

    #[test]
    fn test_tiny_cost_basis_stays_finite() {
        let holdings = vec![Holding::new(
            "X",
            dec!(1),
            dec!(0.0000000001),
            dec!(100000000000000000000),
            "T",
        )
        .unwrap()];
        let report = analyze_performance(&holdings, Period::OneYear).unwrap();

        assert!(report.percent_gain_loss.is_finite());
        assert_relative_eq!(report.percent_gain_loss, 1e32, max_relative = 1e-9);
        assert_relative_eq!(report.best_performer.percent_change, 1e32, max_relative = 1e-9);
    }

    #[test]
    fn test_overflowing_position_is_an_error() {
        let holdings = vec![Holding::new("BIG", dec!(10), dec!(1), Decimal::MAX, "T").unwrap()];
        assert!(matches!(
            analyze_performance(&holdings, Period::OneYear),
            Err(PortfolioError::Core(CoreError::Overflow { .. }))
        ));
    }

    #[test]
    fn test_losing_portfolio() {
        let holdings = vec![holding("DOWN", dec!(100), dec!(75))];
        let report = analyze_performance(&holdings, Period::FiveYears).unwrap();
        assert_eq!(report.total_gain_loss, dec!(-250));
        assert_relative_eq!(report.percent_gain_loss, -25.0, epsilon = 1e-9);
    }
}
