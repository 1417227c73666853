//! Performance analysis periods.

use crate::error::PortfolioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Look-back period label attached to a performance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    /// One month.
    #[serde(rename = "1m")]
    OneMonth,
    /// Three months.
    #[serde(rename = "3m")]
    ThreeMonths,
    /// Six months.
    #[serde(rename = "6m")]
    SixMonths,
    /// One year.
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    /// Five years.
    #[serde(rename = "5y")]
    FiveYears,
}

impl Period {
    /// All accepted periods, shortest first.
    pub const ALL: [Period; 5] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::FiveYears,
    ];

    /// Returns the short label (`1m`, `3m`, `6m`, `1y`, `5y`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
            Period::FiveYears => "5y",
        }
    }

    /// Returns the period length in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            Period::OneMonth => 1,
            Period::ThreeMonths => 3,
            Period::SixMonths => 6,
            Period::OneYear => 12,
            Period::FiveYears => 60,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                log::warn!("rejected analysis period '{}'", s);
                PortfolioError::invalid_argument("period", s, "1m, 3m, 6m, 1y, 5y")
            })
    }
}
