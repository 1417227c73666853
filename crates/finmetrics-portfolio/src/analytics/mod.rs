//! Portfolio-level analytics.
//!
//! This module provides aggregated analytics for portfolios, including:
//! - Market value and cost basis
//! - Gain/loss performance with best and worst performers
//! - Month-over-month performance sequences
//!
//! All functions are pure - they take holdings and configuration as input
//! and return computed results without caching or I/O.

mod monthly;
mod parallel;
mod performance;
mod valuation;

pub use monthly::*;
pub use parallel::*;
pub use performance::*;
pub use valuation::*;
