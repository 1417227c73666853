//! Investor risk profiles and their target asset mixes.

use crate::error::PortfolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Investor risk appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    /// Capital preservation first.
    Conservative,
    /// Balanced growth and stability.
    Moderate,
    /// Growth first.
    Aggressive,
}

/// Target split over asset classes, in whole percent.
///
/// The four shares always add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMix {
    /// Equities.
    pub stocks: u8,
    /// Fixed income.
    pub bonds: u8,
    /// Cash and equivalents.
    pub cash: u8,
    /// Everything else.
    pub other: u8,
}

impl AssetMix {
    /// Sum of all shares.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::from(self.stocks) + u32::from(self.bonds) + u32::from(self.cash) + u32::from(self.other)
    }
}

impl RiskProfile {
    /// All profiles, least to most aggressive.
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Moderate,
        RiskProfile::Aggressive,
    ];

    /// Returns the lowercase profile name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Moderate => "moderate",
            RiskProfile::Aggressive => "aggressive",
        }
    }

    /// Returns the fixed asset mix for this profile.
    #[must_use]
    pub fn asset_mix(&self) -> AssetMix {
        match self {
            RiskProfile::Conservative => AssetMix {
                stocks: 30,
                bonds: 50,
                cash: 15,
                other: 5,
            },
            RiskProfile::Moderate => AssetMix {
                stocks: 50,
                bonds: 35,
                cash: 10,
                other: 5,
            },
            RiskProfile::Aggressive => AssetMix {
                stocks: 70,
                bonds: 20,
                cash: 5,
                other: 5,
            },
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskProfile {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskProfile::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                log::warn!("rejected risk profile '{}'", s);
                PortfolioError::invalid_argument(
                    "risk profile",
                    s,
                    "conservative, moderate, aggressive",
                )
            })
    }
}
