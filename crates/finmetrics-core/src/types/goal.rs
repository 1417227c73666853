//! Savings goals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Priority of a financial goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    /// Nice to have.
    Low,
    /// Planned.
    Medium,
    /// Must be funded first.
    High,
}

/// A savings target with a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialGoal {
    /// Goal name.
    pub name: String,

    /// Amount to reach.
    pub target_amount: Decimal,

    /// Date by which the target should be reached.
    pub deadline: NaiveDate,

    /// Funding priority.
    pub priority: GoalPriority,

    /// Amount saved so far.
    pub current_amount: Decimal,
}

impl FinancialGoal {
    /// Returns the amount still missing, never negative.
    #[must_use]
    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.current_amount).max(Decimal::ZERO)
    }

    /// Returns progress towards the target as a percentage (0-100+).
    ///
    /// A zero target reports 0.
    #[must_use]
    pub fn progress_pct(&self) -> f64 {
        crate::stats::decimal_ratio_pct(self.current_amount, self.target_amount).unwrap_or(0.0)
    }

    /// Returns true once the saved amount covers the target.
    #[must_use]
    pub fn is_funded(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Returns true if the deadline is before `as_of` and the goal is unfunded.
    #[must_use]
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        !self.is_funded() && self.deadline < as_of
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn emergency_fund() -> FinancialGoal {
        FinancialGoal {
            name: "Emergency Fund".into(),
            target_amount: dec!(10000),
            deadline: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
            priority: GoalPriority::High,
            current_amount: dec!(6500),
        }
    }

    #[test]
    fn test_progress() {
        let goal = emergency_fund();
        assert_eq!(goal.remaining_amount(), dec!(3500));
        assert!((goal.progress_pct() - 65.0).abs() < 1e-9);
        assert!(!goal.is_funded());
    }

    #[test]
    fn test_overfunded_remaining_is_zero() {
        let goal = FinancialGoal {
            current_amount: dec!(12000),
            ..emergency_fund()
        };
        assert_eq!(goal.remaining_amount(), Decimal::ZERO);
        assert!(goal.is_funded());
    }

    #[test]
    fn test_zero_target() {
        let goal = FinancialGoal {
            target_amount: Decimal::ZERO,
            ..emergency_fund()
        };
        assert_eq!(goal.progress_pct(), 0.0);
    }

    #[test]
    fn test_overdue() {
        let goal = emergency_fund();
        assert!(goal.is_overdue(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(!goal.is_overdue(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(GoalPriority::High > GoalPriority::Medium);
        assert!(GoalPriority::Medium > GoalPriority::Low);
    }
}
