//! Descriptive statistics over `f64` samples.
//!
//! All functions treat the input as a full population (variance divides by
//! `n`, not `n - 1`) and return 0 for empty input.

use rust_decimal::Decimal;

/// Arithmetic mean; 0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance; 0 for an empty slice.
#[must_use]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for an empty slice.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Percentage change from `from` to `to`, or `None` when `from` is zero.
#[must_use]
pub fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from * 100.0)
    }
}

/// `part / whole × 100` as `f64`, or `None` when `whole` is zero.
///
/// The ratio is exact in `Decimal` when it fits. A quotient beyond the
/// decimal range is computed in `f64` instead.
#[must_use]
pub fn decimal_ratio_pct(part: Decimal, whole: Decimal) -> Option<f64> {
    if whole.is_zero() {
        return None;
    }
    match part
        .checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
    {
        Some(pct) => Some(pct.try_into().unwrap_or(0.0)),
        None => {
            log::debug!("ratio {} / {} exceeds decimal range, using f64", part, whole);
            let part: f64 = part.try_into().unwrap_or(0.0);
            let whole: f64 = whole.try_into().unwrap_or(0.0);
            Some(part / whole * 100.0)
        }
    }
}

/// Returns the index of the first NaN or infinite value.
#[must_use]
pub fn first_non_finite(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_finite())
}
