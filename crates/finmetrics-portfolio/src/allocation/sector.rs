//! Sector-based portfolio allocation.
//!
//! Provides distribution analysis by the free-text sector label of each
//! holding.

use crate::analytics::{checked_add, maybe_parallel_map};
use crate::error::PortfolioResult;
use crate::types::AnalyticsConfig;
use finmetrics_core::stats::decimal_ratio_pct;
use finmetrics_core::{CoreResult, Holding};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value and weight of one sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorWeight {
    /// Total market value of the sector's holdings.
    pub value: Decimal,

    /// Weight as percentage of total (0-100).
    pub percentage: f64,
}

/// Distribution of portfolio value by sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    /// Total portfolio market value.
    pub total_value: Decimal,

    /// Value and weight by sector label, ordered by label.
    pub sectors: BTreeMap<String, SectorWeight>,
}

impl SectorAllocation {
    /// Returns the weight of a specific sector.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&SectorWeight> {
        self.sectors.get(sector)
    }

    /// Returns all sectors sorted by weight descending, then by name.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<(&str, &SectorWeight)> {
        let mut result: Vec<_> = self
            .sectors
            .iter()
            .map(|(s, w)| (s.as_str(), w))
            .collect();
        result.sort_by(|a, b| {
            b.1.percentage
                .partial_cmp(&a.1.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        result
    }
}

/// Groups holdings by sector and computes each sector's share of value.
///
/// An empty portfolio yields a zero total and no sectors. If the total value
/// is zero every sector is reported with a 0% weight.
///
/// # Errors
///
/// Returns `Overflow` if a position or a sector total exceeds the decimal
/// range.
pub fn sector_allocation(holdings: &[Holding]) -> PortfolioResult<SectorAllocation> {
    sector_allocation_with_config(holdings, &AnalyticsConfig::default())
}

/// [`sector_allocation`] with explicit analytics configuration.
///
/// # Errors
///
/// Returns `Overflow` if a position or a sector total exceeds the decimal
/// range.
pub fn sector_allocation_with_config(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> PortfolioResult<SectorAllocation> {
    if holdings.is_empty() {
        return Ok(SectorAllocation::default());
    }

    let values = maybe_parallel_map(holdings, config, Holding::market_value)
        .into_iter()
        .collect::<CoreResult<Vec<_>>>()?;

    let mut by_sector: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut total_value = Decimal::ZERO;
    for (h, value) in holdings.iter().zip(&values) {
        let entry = by_sector.entry(h.sector.clone()).or_default();
        *entry = checked_add(*entry, *value, "sector value")?;
        total_value = checked_add(total_value, *value, "portfolio value")?;
    }

    let sectors = by_sector
        .into_iter()
        .map(|(sector, value)| {
            let percentage = decimal_ratio_pct(value, total_value).unwrap_or(0.0);
            (sector, SectorWeight { value, percentage })
        })
        .collect();

    Ok(SectorAllocation {
        total_value,
        sectors,
    })
}
