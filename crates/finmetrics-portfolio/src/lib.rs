//! # Finmetrics Portfolio
//!
//! Valuation, performance and allocation analytics for equity portfolios.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Exact money**: Values stay in `Decimal`; only ratios become `f64`
//! - **Stable ordering**: Best/worst performer ties resolve to input order
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use finmetrics_portfolio::prelude::*;
//! use finmetrics_core::samples::sample_portfolio;
//!
//! let holdings = sample_portfolio();
//! let value = portfolio_value(&holdings).unwrap();
//! let report = analyze_performance(&holdings, "1y".parse().unwrap()).unwrap();
//! assert_eq!(report.best_performer.ticker, "AAPL");
//!
//! let calc = make_diversification_calculator("moderate").unwrap();
//! let split = calc.allocate(value);
//! assert_eq!(split.total(), value);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios.
//!   The tests comparing sequential and parallel results only build with this
//!   feature, so CI runs `cargo test --features parallel` as well.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod allocation;
pub mod analytics;
pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{AnalyticsConfig, AssetMix, Period, RiskProfile};

pub use analytics::{
    analyze_performance, analyze_performance_with_config, maybe_parallel_fold,
    maybe_parallel_map, monthly_performance, portfolio_value, portfolio_value_with_config,
    total_cost_basis, total_cost_basis_with_config, HoldingPerformance, MonthlyPerformance,
    MonthlyPerformanceIter, PerformanceReport,
};

pub use allocation::{
    make_diversification_calculator, sector_allocation, sector_allocation_with_config,
    Allocation, DiversificationCalculator, SectorAllocation, SectorWeight,
};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use finmetrics_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::types::{AnalyticsConfig, AssetMix, Period, RiskProfile};

    pub use crate::analytics::{
        analyze_performance, monthly_performance, portfolio_value, total_cost_basis,
        HoldingPerformance, MonthlyPerformance, PerformanceReport,
    };

    pub use crate::allocation::{
        make_diversification_calculator, sector_allocation, Allocation,
        DiversificationCalculator, SectorAllocation, SectorWeight,
    };

    // Re-export commonly used types from dependencies
    pub use finmetrics_core::{Holding, MonthlySeries};
    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

