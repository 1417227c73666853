//! # Finmetrics Budget
//!
//! Cash-flow analysis over transaction records.
//!
//! - [`categorize_transactions`]: income and expense totals per category
//! - [`generate_savings_projection`]: year-by-year savings at the current rate
//!
//! ## Example
//!
//! ```rust
//! use finmetrics_budget::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let records = vec![
//!     TransactionRecord::new("2023-01-01", "income", dec!(2000), "Salary"),
//!     TransactionRecord::new("2023-01-02", "expense", dec!(1150), "Rent"),
//! ];
//! assert_eq!(categorize_transactions(&records).net_cashflow, dec!(850));
//!
//! let outcome = generate_savings_projection(dec!(3000), dec!(2000), 5, DEFAULT_SAVINGS_RATE);
//! assert_eq!(outcome.projection().unwrap().final_savings(), dec!(60000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod categorize;
pub mod projection;

pub use categorize::{categorize_transactions, CategorizedTransactions};
pub use projection::{
    generate_savings_projection, ProjectionError, ProjectionOutcome, SavingsProjection,
    YearProjection, DEFAULT_SAVINGS_RATE,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::categorize::{categorize_transactions, CategorizedTransactions};
    pub use crate::projection::{
        generate_savings_projection, ProjectionOutcome, SavingsProjection, DEFAULT_SAVINGS_RATE,
    };

    pub use finmetrics_core::{TransactionKind, TransactionRecord};
    pub use rust_decimal::Decimal;
}
