//! # Finmetrics Risk
//!
//! Risk measures over price and return series.
//!
//! - [`volatility`]: population standard deviation of period returns
//! - [`risk_metrics`]: average return, volatility and Sharpe ratio
//! - [`generate_risk_report`]: which metrics a risk report should list
//!
//! ## Example
//!
//! ```rust
//! use finmetrics_risk::prelude::*;
//!
//! let vol = volatility(&[100.0, 110.0, 99.0]).unwrap();
//! assert!((vol - 0.1).abs() < 1e-12);
//!
//! let m = risk_metrics(&[0.05], DEFAULT_RISK_FREE_RATE).unwrap();
//! assert_eq!(m.as_tuple(), (0.05, 0.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod metrics;
pub mod report;
pub mod volatility;

pub use error::{RiskError, RiskResult};
pub use metrics::{risk_metrics, risk_metrics_default, RiskMetrics, DEFAULT_RISK_FREE_RATE};
pub use report::{
    generate_risk_report, ReportFormat, ReportMetric, RiskReport, RiskReportOptions,
    REPORT_TITLE,
};
pub use volatility::{historical_volatilities, period_returns, volatility};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::metrics::{risk_metrics, RiskMetrics, DEFAULT_RISK_FREE_RATE};
    pub use crate::report::{generate_risk_report, ReportFormat, ReportMetric, RiskReportOptions};
    pub use crate::volatility::{historical_volatilities, period_returns, volatility};
}
