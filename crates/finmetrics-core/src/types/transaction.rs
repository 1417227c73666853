//! Cash transactions for budget analysis.
//!
//! Two shapes are provided: [`TransactionRecord`] is the loosely typed form a
//! caller deserializes from an external source, where any field may be
//! missing and the type is free text. [`Transaction`] is the validated form.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a cash transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// Returns the lowercase label used in serialized records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(CoreError::invalid_argument(
                "transaction type",
                other,
                "income, expense",
            )),
        }
    }
}

/// A validated transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Booking date as supplied by the caller (e.g. `2023-01-05`).
    pub date: Option<String>,

    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Non-negative amount.
    pub amount: Decimal,

    /// Budget category (e.g. "Rent").
    pub category: String,
}

impl Transaction {
    /// Creates a dated income transaction.
    #[must_use]
    pub fn income(date: impl Into<String>, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            kind: TransactionKind::Income,
            amount,
            category: category.into(),
        }
    }

    /// Creates a dated expense transaction.
    #[must_use]
    pub fn expense(date: impl Into<String>, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            kind: TransactionKind::Expense,
            amount,
            category: category.into(),
        }
    }
}

/// A raw transaction record.
///
/// Every field is optional so that incomplete input can still be
/// deserialized; [`TransactionRecord::parse`] decides whether the record is
/// usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Booking date.
    #[serde(default)]
    pub date: Option<String>,

    /// Transaction type, expected to be `income` or `expense`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Amount.
    #[serde(default)]
    pub amount: Option<Decimal>,

    /// Budget category.
    #[serde(default)]
    pub category: Option<String>,
}

impl TransactionRecord {
    /// Creates a complete record.
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        kind: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            kind: Some(kind.into()),
            amount: Some(amount),
            category: Some(category.into()),
        }
    }

    /// Validates the record into a [`Transaction`].
    ///
    /// The date is optional; type, amount and category are required.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the type is not
    /// `income` or `expense`, or the amount is negative.
    pub fn parse(&self) -> CoreResult<Transaction> {
        let kind = self
            .kind
            .as_deref()
            .ok_or_else(|| CoreError::missing_field("type"))?;
        let amount = self
            .amount
            .ok_or_else(|| CoreError::missing_field("amount"))?;
        let category = self
            .category
            .clone()
            .ok_or_else(|| CoreError::missing_field("category"))?;

        let kind = kind.parse::<TransactionKind>()?;

        if amount < Decimal::ZERO {
            return Err(CoreError::invalid_argument(
                "amount",
                amount.to_string(),
                "a non-negative amount",
            ));
        }

        Ok(Transaction {
            date: self.date.clone(),
            kind,
            amount,
            category,
        })
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(t: Transaction) -> Self {
        Self {
            date: t.date,
            kind: Some(t.kind.as_str().to_string()),
            amount: Some(t.amount),
            category: Some(t.category),
        }
    }
}
