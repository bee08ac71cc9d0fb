//! Transaction model
//!
//! A transaction is an immutable income or expense record. Values built
//! through [`Transaction::new`] are validated; records read back from a ledger
//! file go through [`Transaction::from_record`], which only normalizes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// All kinds, in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    /// Lowercase name used in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TrackerError;

    /// Case-insensitive; surrounding whitespace is not accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TrackerError::Parse(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                s
            ))),
        }
    }
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    date: NaiveDate,
    category: String,
    amount: Money,
    #[serde(default)]
    description: String,
}

impl Transaction {
    /// Create a validated transaction
    ///
    /// The amount must be strictly positive. The category is lowercased; its
    /// membership in the registry is checked by the caller that resolved it.
    pub fn new(
        kind: TransactionKind,
        date: NaiveDate,
        category: impl AsRef<str>,
        amount: Money,
        description: impl Into<String>,
    ) -> TrackerResult<Self> {
        if !amount.is_positive() {
            return Err(TrackerError::Validation(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }

        Ok(Self::from_record(kind, date, category, amount, description))
    }

    /// Build a transaction from persisted fields without validating the amount
    pub(crate) fn from_record(
        kind: TransactionKind,
        date: NaiveDate,
        category: impl AsRef<str>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            category: category.as_ref().to_lowercase(),
            amount,
            description: description.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check whether the transaction falls within an inclusive date range
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            TransactionKind::Expense,
            date(2024, 1, 10),
            "Food",
            Money::from_cents(5000),
            "groceries",
        )
        .unwrap();

        assert_eq!(txn.kind(), TransactionKind::Expense);
        assert_eq!(txn.category(), "food");
        assert_eq!(txn.amount().cents(), 5000);
        assert_eq!(txn.description(), "groceries");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = Transaction::new(
            TransactionKind::Income,
            date(2024, 1, 5),
            "salary",
            Money::zero(),
            "",
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Transaction::new(
            TransactionKind::Expense,
            date(2024, 1, 5),
            "rent",
            Money::from_cents(-100),
            "",
        );
        assert!(matches!(result, Err(TrackerError::Validation(_))));
    }

    #[test]
    fn test_from_record_keeps_non_positive_amount() {
        let txn = Transaction::from_record(
            TransactionKind::Expense,
            date(2024, 1, 5),
            "Gifts",
            Money::from_cents(-250),
            "",
        );
        assert_eq!(txn.amount().cents(), -250);
        assert_eq!(txn.category(), "gifts");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("EXPENSE".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!("transfer".parse::<TransactionKind>().is_err());
        assert!(" income".parse::<TransactionKind>().is_err());
        assert_eq!(TransactionKind::Income.to_string(), "income");
    }

    #[test]
    fn test_is_within_inclusive() {
        let txn = Transaction::new(
            TransactionKind::Income,
            date(2024, 1, 31),
            "salary",
            Money::from_cents(100),
            "",
        )
        .unwrap();

        assert!(txn.is_within(date(2024, 1, 1), date(2024, 1, 31)));
        assert!(!txn.is_within(date(2024, 2, 1), date(2024, 2, 29)));
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            TransactionKind::Income,
            date(2024, 3, 1),
            "business",
            Money::from_cents(12345),
            "invoice",
        )
        .unwrap();
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"income\""));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
