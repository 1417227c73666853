//! Portfolio market value and cost basis.
//!
//! Sums are exact and checked: a total beyond the `Decimal` range is an
//! `Overflow` error rather than a panic.

use super::parallel::maybe_parallel_fold;
use crate::error::PortfolioResult;
use crate::types::AnalyticsConfig;
use finmetrics_core::{CoreError, CoreResult, Holding};
use rust_decimal::Decimal;

/// Current market value of all holdings (Σ shares × current price).
///
/// An empty portfolio is worth zero.
///
/// # Errors
///
/// Returns `Overflow` if a position or the total exceeds the decimal range.
pub fn portfolio_value(holdings: &[Holding]) -> PortfolioResult<Decimal> {
    portfolio_value_with_config(holdings, &AnalyticsConfig::default())
}

/// [`portfolio_value`] with explicit analytics configuration.
///
/// # Errors
///
/// Returns `Overflow` if a position or the total exceeds the decimal range.
pub fn portfolio_value_with_config(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<Decimal> {
    checked_total(holdings, config, "portfolio value", Holding::market_value)
}

/// Total amount invested (Σ shares × purchase price).
///
/// # Errors
///
/// Returns `Overflow` if a position or the total exceeds the decimal range.
pub fn total_cost_basis(holdings: &[Holding]) -> PortfolioResult<Decimal> {
    total_cost_basis_with_config(holdings, &AnalyticsConfig::default())
}

/// [`total_cost_basis`] with explicit analytics configuration.
///
/// # Errors
///
/// Returns `Overflow` if a position or the total exceeds the decimal range.
pub fn total_cost_basis_with_config(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<Decimal> {
    checked_total(holdings, config, "total cost basis", Holding::cost_basis)
}

/// Adds two amounts, failing with `Overflow` on `operation`.
pub(crate) fn checked_add(a: Decimal, b: Decimal, operation: &str) -> CoreResult<Decimal> {
    a.checked_add(b).ok_or_else(|| CoreError::overflow(operation))
}

fn checked_total<F>(
    holdings: &[Holding],
    config: &AnalyticsConfig,
    operation: &str,
    value: F,
) -> PortfolioResult<Decimal>
where
    F: Fn(&Holding) -> CoreResult<Decimal> + Sync + Send,
{
    let total = maybe_parallel_fold(
        holdings,
        config,
        Ok(Decimal::ZERO),
        |acc: CoreResult<Decimal>, h| checked_add(acc?, value(h)?, operation),
        |a, b| checked_add(a?, b?, operation),
    )?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use finmetrics_core::samples::sample_portfolio;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_portfolio_value() {
        // 1750 + 1400 + 1240 + 1740 + 1050
        assert_eq!(portfolio_value(&sample_portfolio()).unwrap(), dec!(7180));
    }

    #[test]
    fn test_sample_cost_basis() {
        // 1500 + 1250 + 1280 + 1680 + 910
        assert_eq!(total_cost_basis(&sample_portfolio()).unwrap(), dec!(6620));
    }

    #[test]
    fn test_empty_portfolio() {
        assert_eq!(portfolio_value(&[]).unwrap(), Decimal::ZERO);
        assert_eq!(total_cost_basis(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_extreme_values() {
        let min = Holding::new("MIN", dec!(1), dec!(0.01), dec!(0.01), "Test").unwrap();
        let max = Holding::new("MAX", dec!(1000000), dec!(9999.99), dec!(10000.00), "Test").unwrap();

        assert_eq!(portfolio_value(&[min]).unwrap(), dec!(0.01));
        assert_eq!(portfolio_value(&[max]).unwrap(), dec!(10_000_000_000));
    }

    #[test]
    fn test_total_beyond_decimal_range() {
        let half_max = Decimal::MAX / dec!(2);
        let big = Holding::new("BIG", dec!(1), dec!(1), half_max, "Test").unwrap();
        let holdings = vec![big.clone(), big.clone(), big];

        assert_eq!(
            portfolio_value(&holdings),
            Err(PortfolioError::Core(CoreError::overflow("portfolio value")))
        );
        assert_eq!(total_cost_basis(&holdings).unwrap(), dec!(3));
    }

    #[test]
    fn test_position_beyond_decimal_range() {
        let big = Holding::new("BIG", dec!(10), dec!(1), Decimal::MAX, "Test").unwrap();
        assert_eq!(
            portfolio_value(&[big]),
            Err(PortfolioError::Core(CoreError::overflow("market value of BIG")))
        );
    }
}
