//! Domain types shared by the Finmetrics crates.
//!
//! - [`Holding`]: A single equity position
//! - [`Transaction`] / [`TransactionRecord`]: Validated and raw cash transactions
//! - [`MonthlySeries`]: Ordered period-labelled values
//! - [`FinancialGoal`]: A savings target with a deadline
//! - [`MarketData`]: Risk-free rate and price histories

mod goal;
mod holding;
mod market;
mod series;
mod transaction;

pub use goal::{FinancialGoal, GoalPriority};
pub use holding::{Holding, HoldingBuilder};
pub use market::MarketData;
pub use series::MonthlySeries;
pub use transaction::{Transaction, TransactionKind, TransactionRecord};
