//! Savings projections.
//!
//! Invalid inputs do not fail the call. They produce
//! [`ProjectionOutcome::Error`], which serializes as `{"error": "..."}` so a
//! report pipeline can display it next to successful projections.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Savings rate used when the caller has no target of their own.
pub const DEFAULT_SAVINGS_RATE: Decimal = dec!(0.2);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Reasons a projection cannot be produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// Negative income or expenses, or fewer than one year.
    #[error("Invalid input values")]
    InvalidInput,

    /// Savings rate outside `[0, 1]`.
    #[error("Savings rate must be between 0 and 1")]
    InvalidSavingsRate,

    /// An intermediate amount does not fit a `Decimal`.
    #[error("Projection values exceed the supported range")]
    Overflow,
}

/// Savings for one projected year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProjection {
    /// Savings made during the year.
    pub yearly_savings: Decimal,
    /// Savings accumulated up to and including the year.
    pub cumulative_savings: Decimal,
}

/// A savings projection at the current monthly savings level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsProjection {
    /// Monthly income.
    pub monthly_income: Decimal,
    /// Monthly expenses.
    pub monthly_expenses: Decimal,
    /// `monthly_income - monthly_expenses`; may be negative.
    pub current_monthly_savings: Decimal,
    /// Current savings as a fraction of income, 0 when income is 0.
    pub current_savings_rate: Decimal,
    /// Requested savings rate.
    pub target_savings_rate: Decimal,
    /// `monthly_income * target_savings_rate`.
    pub target_monthly_savings: Decimal,
    /// Year number (from 1) to that year's savings.
    pub yearly_projection: BTreeMap<u32, YearProjection>,
}

impl SavingsProjection {
    /// Whether current savings reach the target.
    #[must_use]
    pub fn meets_target(&self) -> bool {
        self.current_monthly_savings >= self.target_monthly_savings
    }

    /// Monthly amount missing to reach the target, 0 if it is met.
    #[must_use]
    pub fn monthly_shortfall(&self) -> Decimal {
        (self.target_monthly_savings - self.current_monthly_savings).max(Decimal::ZERO)
    }

    /// Cumulative savings at the end of the final projected year.
    #[must_use]
    pub fn final_savings(&self) -> Decimal {
        self.yearly_projection
            .values()
            .next_back()
            .map_or(Decimal::ZERO, |y| y.cumulative_savings)
    }
}

/// Result of [`generate_savings_projection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectionOutcome {
    /// The projection.
    Projection(SavingsProjection),
    /// Why no projection was produced.
    Error {
        /// Human-readable reason.
        error: String,
    },
}

impl ProjectionOutcome {
    /// Returns `true` for an error outcome.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The projection, if one was produced.
    #[must_use]
    pub fn projection(&self) -> Option<&SavingsProjection> {
        match self {
            Self::Projection(p) => Some(p),
            Self::Error { .. } => None,
        }
    }

    /// The error message, if no projection was produced.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Projection(_) => None,
            Self::Error { error } => Some(error),
        }
    }

    /// Converts into a `Result`, with the error message as the error.
    pub fn into_result(self) -> Result<SavingsProjection, String> {
        match self {
            Self::Projection(p) => Ok(p),
            Self::Error { error } => Err(error),
        }
    }
}

impl From<ProjectionError> for ProjectionOutcome {
    fn from(e: ProjectionError) -> Self {
        Self::Error {
            error: e.to_string(),
        }
    }
}

impl From<Result<SavingsProjection, ProjectionError>> for ProjectionOutcome {
    fn from(r: Result<SavingsProjection, ProjectionError>) -> Self {
        match r {
            Ok(p) => Self::Projection(p),
            Err(e) => e.into(),
        }
    }
}

/// Projects savings over `years` at the current monthly savings level.
///
/// Returns an error outcome when income or expenses are negative, `years`
/// is below 1, `savings_rate` lies outside `[0, 1]`, or an amount along the
/// way overflows.
#[must_use]
pub fn generate_savings_projection(
    income: Decimal,
    expenses: Decimal,
    years: i32,
    savings_rate: Decimal,
) -> ProjectionOutcome {
    let outcome = project(income, expenses, years, savings_rate);
    if let Err(e) = &outcome {
        log::debug!("no savings projection: {}", e);
    }
    outcome.into()
}

fn project(
    income: Decimal,
    expenses: Decimal,
    years: i32,
    savings_rate: Decimal,
) -> Result<SavingsProjection, ProjectionError> {
    if income < Decimal::ZERO || expenses < Decimal::ZERO || years < 1 {
        return Err(ProjectionError::InvalidInput);
    }
    if savings_rate < Decimal::ZERO || savings_rate > Decimal::ONE {
        return Err(ProjectionError::InvalidSavingsRate);
    }

    let monthly_savings = income - expenses;
    let current_savings_rate = if income > Decimal::ZERO {
        monthly_savings
            .checked_div(income)
            .ok_or(ProjectionError::Overflow)?
    } else {
        Decimal::ZERO
    };

    let yearly_savings = monthly_savings
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(ProjectionError::Overflow)?;
    let mut cumulative_savings = Decimal::ZERO;
    let mut yearly_projection = BTreeMap::new();
    for year in 1..=years.unsigned_abs() {
        cumulative_savings = cumulative_savings
            .checked_add(yearly_savings)
            .ok_or(ProjectionError::Overflow)?;
        yearly_projection.insert(
            year,
            YearProjection {
                yearly_savings,
                cumulative_savings,
            },
        );
    }
    let target_monthly_savings = income
        .checked_mul(savings_rate)
        .ok_or(ProjectionError::Overflow)?;

    Ok(SavingsProjection {
        monthly_income: income,
        monthly_expenses: expenses,
        current_monthly_savings: monthly_savings,
        current_savings_rate,
        target_savings_rate: savings_rate,
        target_monthly_savings,
        yearly_projection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(outcome: ProjectionOutcome) -> SavingsProjection {
        outcome.into_result().unwrap()
    }

    #[test]
    fn test_five_year_projection() {
        let p = ok(generate_savings_projection(dec!(3000), dec!(2000), 5, dec!(0.25)));

        assert_eq!(p.current_monthly_savings, dec!(1000));
        assert_eq!(p.target_monthly_savings, dec!(750));
        assert_eq!(p.yearly_projection.len(), 5);
        assert_eq!(p.yearly_projection[&1].yearly_savings, dec!(12000));
        assert_eq!(p.yearly_projection[&5].cumulative_savings, dec!(60000));
        assert_eq!(p.final_savings(), dec!(60000));
        assert!(p.meets_target());
    }

    #[test]
    fn test_current_savings_rate() {
        let p = ok(generate_savings_projection(dec!(4000), dec!(3000), 1, DEFAULT_SAVINGS_RATE));
        assert_eq!(p.current_savings_rate, dec!(0.25));
        assert_eq!(p.target_monthly_savings, dec!(800));
    }

    #[test]
    fn test_zero_income() {
        let p = ok(generate_savings_projection(Decimal::ZERO, Decimal::ZERO, 1, dec!(0.2)));
        assert_eq!(p.current_monthly_savings, Decimal::ZERO);
        assert_eq!(p.current_savings_rate, Decimal::ZERO);
    }

    #[test]
    fn test_negative_savings_allowed() {
        let p = ok(generate_savings_projection(dec!(1000), dec!(1500), 2, dec!(0.1)));
        assert_eq!(p.current_monthly_savings, dec!(-500));
        assert_eq!(p.yearly_projection[&2].cumulative_savings, dec!(-12000));
        assert_eq!(p.monthly_shortfall(), dec!(600));
    }

    #[test]
    fn test_boundary_rates() {
        assert!(!generate_savings_projection(dec!(1), dec!(0), 1, dec!(0)).is_error());
        let p = ok(generate_savings_projection(dec!(10000), dec!(5000), 10, Decimal::ONE));
        assert_eq!(p.current_monthly_savings, dec!(5000));
        assert_eq!(p.monthly_shortfall(), dec!(5000));
    }

    #[test]
    fn test_invalid_inputs() {
        for outcome in [
            generate_savings_projection(dec!(-1000), dec!(500), 5, dec!(0.2)),
            generate_savings_projection(dec!(1000), dec!(-1), 5, dec!(0.2)),
            generate_savings_projection(dec!(1000), dec!(500), 0, dec!(0.2)),
            generate_savings_projection(dec!(1000), dec!(500), -5, dec!(0.2)),
        ] {
            assert_eq!(outcome.error(), Some("Invalid input values"));
        }
    }

    #[test]
    fn test_invalid_rate() {
        for rate in [dec!(2.0), dec!(-0.01), dec!(1.0001)] {
            let outcome = generate_savings_projection(dec!(1000), dec!(500), 5, rate);
            assert_eq!(outcome.error(), Some("Savings rate must be between 0 and 1"));
            assert!(outcome.projection().is_none());
        }
    }

    #[test]
    fn test_input_checked_before_rate() {
        let outcome = generate_savings_projection(dec!(-1), dec!(0), 1, dec!(5));
        assert_eq!(outcome, ProjectionError::InvalidInput.into());
    }

    #[test]
    fn test_rate_beyond_decimal_range() {
        let outcome = generate_savings_projection(
            dec!(0.0000000001),
            dec!(10000000000000000000),
            1,
            dec!(0.2),
        );
        assert_eq!(
            outcome.error(),
            Some("Projection values exceed the supported range")
        );
    }

    #[test]
    fn test_cumulative_beyond_decimal_range() {
        let outcome = generate_savings_projection(
            dec!(1000000000000000000000000000),
            Decimal::ZERO,
            10,
            dec!(0.2),
        );
        assert_eq!(outcome, ProjectionError::Overflow.into());
    }
}
