//! Sample data sets for demonstrations and tests.
//!
//! The fixtures describe a small five-stock equity portfolio, two months of
//! household transactions, three savings goals and a market snapshot with
//! seven closing prices per ticker.

use crate::types::{FinancialGoal, GoalPriority, Holding, MarketData, TransactionRecord};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Five equity holdings across four sectors.
#[must_use]
pub fn sample_portfolio() -> Vec<Holding> {
    vec![
        holding("AAPL", 10, dec!(150.0), dec!(175.0), "Technology"),
        holding("MSFT", 5, dec!(250.0), dec!(280.0), "Technology"),
        holding("JNJ", 8, dec!(160.0), dec!(155.0), "Healthcare"),
        holding("PG", 12, dec!(140.0), dec!(145.0), "Consumer Staples"),
        holding("JPM", 7, dec!(130.0), dec!(150.0), "Financial Services"),
    ]
}

/// Ten transactions covering January and February 2023.
#[must_use]
pub fn sample_transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new("2023-01-05", "income", dec!(3000.00), "Salary"),
        TransactionRecord::new("2023-01-10", "expense", dec!(1200.00), "Rent"),
        TransactionRecord::new("2023-01-15", "expense", dec!(200.00), "Utilities"),
        TransactionRecord::new("2023-01-20", "expense", dec!(350.00), "Groceries"),
        TransactionRecord::new("2023-01-25", "expense", dec!(80.00), "Transportation"),
        TransactionRecord::new("2023-02-05", "income", dec!(3000.00), "Salary"),
        TransactionRecord::new("2023-02-10", "expense", dec!(1200.00), "Rent"),
        TransactionRecord::new("2023-02-18", "expense", dec!(180.00), "Utilities"),
        TransactionRecord::new("2023-02-22", "expense", dec!(320.00), "Groceries"),
        TransactionRecord::new("2023-02-27", "expense", dec!(95.00), "Entertainment"),
    ]
}

/// Three savings goals with mixed priorities.
///
/// # Panics
///
/// Panics if a fixture deadline is not a calendar date.
#[must_use]
pub fn sample_financial_goals() -> Vec<FinancialGoal> {
    vec![
        goal("Emergency Fund", dec!(10000), (2023, 12, 31), GoalPriority::High, dec!(6500)),
        goal("Vacation", dec!(3000), (2023, 8, 31), GoalPriority::Medium, dec!(1500)),
        goal("Down Payment", dec!(50000), (2025, 6, 30), GoalPriority::High, dec!(15000)),
    ]
}

/// Market snapshot with price histories for the sample portfolio tickers.
#[must_use]
pub fn sample_market_data() -> MarketData {
    let historical_prices: BTreeMap<String, Vec<f64>> = [
        ("AAPL", vec![150.0, 155.0, 153.0, 160.0, 158.0, 165.0, 175.0]),
        ("MSFT", vec![240.0, 245.0, 250.0, 255.0, 260.0, 270.0, 280.0]),
        ("JNJ", vec![165.0, 163.0, 160.0, 158.0, 155.0, 157.0, 155.0]),
        ("PG", vec![138.0, 140.0, 139.0, 142.0, 144.0, 143.0, 145.0]),
        ("JPM", vec![125.0, 130.0, 135.0, 140.0, 145.0, 148.0, 150.0]),
    ]
    .into_iter()
    .map(|(ticker, prices)| (ticker.to_string(), prices))
    .collect();

    MarketData {
        risk_free_rate: 0.03,
        market_return: 0.08,
        volatility: 0.15,
        historical_prices,
    }
}

fn holding(
    ticker: &str,
    shares: i64,
    purchase_price: Decimal,
    current_price: Decimal,
    sector: &str,
) -> Holding {
    Holding {
        ticker: ticker.to_string(),
        shares: shares.into(),
        purchase_price,
        current_price,
        sector: sector.to_string(),
    }
}

fn goal(
    name: &str,
    target_amount: Decimal,
    (year, month, day): (i32, u32, u32),
    priority: GoalPriority,
    current_amount: Decimal,
) -> FinancialGoal {
    FinancialGoal {
        name: name.to_string(),
        target_amount,
        deadline: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("sample goal '{name}' has an invalid deadline")),
        priority,
        current_amount,
    }
}
