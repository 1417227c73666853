//! Risk-profile driven asset allocation.

use crate::error::PortfolioResult;
use crate::types::{AssetMix, RiskProfile};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recommended split of an investment amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Amount for equities.
    pub stocks: Decimal,
    /// Amount for fixed income.
    pub bonds: Decimal,
    /// Amount held as cash.
    pub cash: Decimal,
    /// Amount for other assets.
    pub other: Decimal,
    /// Profile that produced the split.
    pub risk_profile: RiskProfile,
}

impl Allocation {
    /// Sum of all four buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.stocks + self.bonds + self.cash + self.other
    }
}

/// Allocation calculator bound to one risk profile.
///
/// The asset mix is fixed at construction; [`allocate`](Self::allocate) can
/// be called any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiversificationCalculator {
    profile: RiskProfile,
    mix: AssetMix,
}

impl DiversificationCalculator {
    /// Creates a calculator for a known profile.
    #[must_use]
    pub fn new(profile: RiskProfile) -> Self {
        Self {
            profile,
            mix: profile.asset_mix(),
        }
    }

    /// The profile this calculator was built for.
    #[must_use]
    pub fn profile(&self) -> RiskProfile {
        self.profile
    }

    /// The fixed asset mix.
    #[must_use]
    pub fn mix(&self) -> AssetMix {
        self.mix
    }

    /// Splits `amount` according to the profile's asset mix.
    #[must_use]
    pub fn allocate(&self, amount: Decimal) -> Allocation {
        let share = |pct: u8| Decimal::from(pct) / Decimal::ONE_HUNDRED * amount;
        Allocation {
            stocks: share(self.mix.stocks),
            bonds: share(self.mix.bonds),
            cash: share(self.mix.cash),
            other: share(self.mix.other),
            risk_profile: self.profile,
        }
    }
}

/// Builds a calculator from a profile name.
///
/// # Errors
///
/// Returns `InvalidArgument` unless the name is `conservative`, `moderate`
/// or `aggressive`.
pub fn make_diversification_calculator(profile: &str) -> PortfolioResult<DiversificationCalculator> {
    Ok(DiversificationCalculator::new(profile.parse()?))
}
