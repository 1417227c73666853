//! Transaction categorization.

use finmetrics_core::{TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transactions summed per category, split by kind.
///
/// Categories are kept in label order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedTransactions {
    /// Income per category.
    pub income: BTreeMap<String, Decimal>,
    /// Expense per category.
    pub expense: BTreeMap<String, Decimal>,
    /// Sum of all income.
    pub total_income: Decimal,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_cashflow: Decimal,
}

impl CategorizedTransactions {
    /// Amount booked under `category` for the given kind, 0 if none.
    #[must_use]
    pub fn amount(&self, kind: TransactionKind, category: &str) -> Decimal {
        let bucket = match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        };
        bucket.get(category).copied().unwrap_or(Decimal::ZERO)
    }

    /// Expense categories sorted by amount, largest first.
    #[must_use]
    pub fn top_expenses(&self) -> Vec<(&str, Decimal)> {
        let mut out: Vec<_> = self
            .expense
            .iter()
            .map(|(category, amount)| (category.as_str(), *amount))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        out
    }
}

/// Groups transaction records by kind and category.
///
/// Records that fail [`TransactionRecord::parse`] are skipped, as are records
/// whose amount would push a total past the `Decimal` range.
#[must_use]
pub fn categorize_transactions(records: &[TransactionRecord]) -> CategorizedTransactions {
    let mut result = CategorizedTransactions::default();

    for (index, record) in records.iter().enumerate() {
        let tx = match record.parse() {
            Ok(tx) => tx,
            Err(e) => {
                log::debug!("skipping transaction {}: {}", index, e);
                continue;
            }
        };

        let (bucket, total) = match tx.kind {
            TransactionKind::Income => (&mut result.income, &mut result.total_income),
            TransactionKind::Expense => (&mut result.expense, &mut result.total_expenses),
        };
        let Some(new_total) = total.checked_add(tx.amount) else {
            log::warn!(
                "skipping transaction {}: {} total out of range",
                index,
                tx.kind
            );
            continue;
        };
        *total = new_total;
        // A bucket never exceeds its total, which just fit.
        *bucket.entry(tx.category).or_insert(Decimal::ZERO) += tx.amount;
    }

    result.net_cashflow = result.total_income - result.total_expenses;
    result
}
