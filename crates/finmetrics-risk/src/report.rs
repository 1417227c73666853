//! Risk report shaping.
//!
//! A risk report describes which metrics a caller asked for. It carries no
//! numbers; computing them is the job of [`crate::metrics`] and
//! [`crate::volatility`].

use crate::error::{RiskError, RiskResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title every report carries.
pub const REPORT_TITLE: &str = "Risk Assessment Report";

/// Presentation depth of a risk report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Headline metrics only.
    #[default]
    Summary,
    /// Headline metrics plus the additional regression statistics.
    Detailed,
}

impl ReportFormat {
    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = RiskError;

    fn from_str(s: &str) -> RiskResult<Self> {
        match s {
            "summary" => Ok(Self::Summary),
            "detailed" => Ok(Self::Detailed),
            other => {
                log::warn!("rejecting unknown report format '{}'", other);
                Err(RiskError::invalid_argument(
                    "format",
                    other,
                    "summary, detailed",
                ))
            }
        }
    }
}

/// A metric a report can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMetric {
    /// Volatility of returns.
    Volatility,
    /// Sharpe ratio.
    SharpeRatio,
    /// Beta against the market.
    Beta,
    /// Jensen's alpha.
    Alpha,
    /// Coefficient of determination against the market.
    RSquared,
    /// Standard deviation of returns.
    StandardDeviation,
}

impl ReportMetric {
    /// Metrics appended to every detailed report, in order.
    pub const DETAILED_EXTRAS: [ReportMetric; 3] =
        [Self::Alpha, Self::RSquared, Self::StandardDeviation];

    /// Returns the snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Volatility => "volatility",
            Self::SharpeRatio => "sharpe_ratio",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
            Self::RSquared => "r_squared",
            Self::StandardDeviation => "standard_deviation",
        }
    }
}

impl fmt::Display for ReportMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`generate_risk_report`].
///
/// Missing fields in serialized input take their defaults, so a partial
/// JSON object such as `{"include_beta": true}` is a complete set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskReportOptions {
    /// List volatility (default: true).
    pub include_volatility: bool,
    /// List the Sharpe ratio (default: true).
    pub include_sharpe: bool,
    /// List beta (default: false).
    pub include_beta: bool,
    /// Report depth (default: summary).
    pub format: ReportFormat,
}

impl Default for RiskReportOptions {
    fn default() -> Self {
        Self {
            include_volatility: true,
            include_sharpe: true,
            include_beta: false,
            format: ReportFormat::Summary,
        }
    }
}

impl RiskReportOptions {
    /// Sets whether volatility is listed.
    #[must_use]
    pub fn with_volatility(mut self, include: bool) -> Self {
        self.include_volatility = include;
        self
    }

    /// Sets whether the Sharpe ratio is listed.
    #[must_use]
    pub fn with_sharpe(mut self, include: bool) -> Self {
        self.include_sharpe = include;
        self
    }

    /// Sets whether beta is listed.
    #[must_use]
    pub fn with_beta(mut self, include: bool) -> Self {
        self.include_beta = include;
        self
    }

    /// Sets the report format.
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Shape of a risk assessment report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Report title.
    pub title: String,
    /// Report depth.
    pub format: ReportFormat,
    /// Requested headline metrics in fixed order.
    pub metrics_included: Vec<ReportMetric>,
    /// Extra metrics, present only for detailed reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_metrics: Option<Vec<ReportMetric>>,
}

impl RiskReport {
    /// Every metric the report lists, headline metrics first.
    pub fn all_metrics(&self) -> impl Iterator<Item = ReportMetric> + '_ {
        self.metrics_included
            .iter()
            .chain(self.additional_metrics.iter().flatten())
            .copied()
    }
}

/// Builds the report shape for the given options.
#[must_use]
pub fn generate_risk_report(options: &RiskReportOptions) -> RiskReport {
    let flags = [
        (options.include_volatility, ReportMetric::Volatility),
        (options.include_sharpe, ReportMetric::SharpeRatio),
        (options.include_beta, ReportMetric::Beta),
    ];
    let metrics_included = flags
        .into_iter()
        .filter_map(|(on, metric)| on.then_some(metric))
        .collect();

    let additional_metrics = match options.format {
        ReportFormat::Detailed => Some(ReportMetric::DETAILED_EXTRAS.to_vec()),
        ReportFormat::Summary => None,
    };

    RiskReport {
        title: REPORT_TITLE.to_string(),
        format: options.format,
        metrics_included,
        additional_metrics,
    }
}
