//! # Finmetrics Core
//!
//! Core types, errors, and helpers for the Finmetrics financial library.
//!
//! This crate provides the building blocks used throughout Finmetrics:
//!
//! - **Types**: `Holding`, `Transaction`, `MonthlySeries`, `FinancialGoal`, `MarketData`
//! - **Statistics**: Mean and population standard deviation over `f64` samples
//! - **Formatting**: Currency and percentage display strings
//! - **Samples**: Fixture data for demonstrations and tests
//!
//! ## Design Philosophy
//!
//! - **Exact money**: Amounts, prices and share counts are `Decimal`
//! - **Validated construction**: Holdings cannot carry negative quantities
//! - **Explicit Over Implicit**: Non-finite floats are rejected, not propagated
//!
//! ## Example
//!
//! ```rust
//! use finmetrics_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holding = Holding::new("AAPL", dec!(10), dec!(150), dec!(175), "Technology").unwrap();
//! assert_eq!(format_currency(holding.market_value().unwrap()), "$1,750.00");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod format;
pub mod samples;
pub mod stats;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::format::{format_currency, format_percentage};
    pub use crate::types::{
        FinancialGoal, GoalPriority, Holding, HoldingBuilder, MarketData, MonthlySeries,
        Transaction, TransactionKind, TransactionRecord,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use format::{format_currency, format_percentage};
pub use types::{
    FinancialGoal, GoalPriority, Holding, HoldingBuilder, MarketData, MonthlySeries, Transaction,
    TransactionKind, TransactionRecord,
};
