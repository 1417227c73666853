//! Portfolio-specific types.
//!
//! - [`AnalyticsConfig`]: Configuration for analytics computation
//! - [`Period`]: Performance analysis period
//! - [`RiskProfile`] / [`AssetMix`]: Investor profile and its target mix

mod config;
mod period;
mod profile;

pub use config::AnalyticsConfig;
pub use period::Period;
pub use profile::{AssetMix, RiskProfile};
