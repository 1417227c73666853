//! # Finmetrics
//!
//! Stateless financial metrics: portfolio valuation and allocation, risk
//! measures, budgeting and display formatting.
//!
//! This crate re-exports the member crates under short module names:
//!
//! | Module        | Crate                  |
//! |---------------|------------------------|
//! | [`common`]    | `finmetrics-core`      |
//! | [`portfolio`] | `finmetrics-portfolio` |
//! | [`risk`]      | `finmetrics-risk`      |
//! | [`budget`]    | `finmetrics-budget`    |
//!
//! ## Example
//!
//! ```rust
//! use finmetrics::prelude::*;
//! use finmetrics::common::samples::sample_portfolio;
//!
//! let holdings = sample_portfolio();
//! let value = portfolio_value(&holdings).unwrap();
//! assert_eq!(format_currency(value), "$7,180.00");
//! ```

#![warn(missing_docs)]

pub use finmetrics_budget as budget;
pub use finmetrics_core as common;
pub use finmetrics_portfolio as portfolio;
pub use finmetrics_risk as risk;

/// Everything needed for typical use, from all member crates.
pub mod prelude {
    pub use finmetrics_budget::prelude::*;
    pub use finmetrics_core::prelude::*;
    pub use finmetrics_portfolio::prelude::*;
    pub use finmetrics_risk::prelude::*;
}
