//! Monthly Summary
//!
//! Groups the transactions of one calendar month by kind and category and
//! sums them. Summaries are derived on demand and never cached.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::ledger::Ledger;
use crate::models::{Money, Month, TransactionKind};

/// Per-category totals for one transaction kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    /// Summed amount per category (iteration order is unspecified)
    pub by_category: HashMap<String, Money>,
    /// Sum over all categories
    pub total: Money,
    /// Number of transactions that contributed
    pub transaction_count: usize,
}

impl KindSummary {
    /// True when no transaction of this kind fell in the range
    ///
    /// This is distinct from a zero total: an empty kind has no records at all.
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Total for one category, if any transaction used it
    pub fn category_total(&self, category: &str) -> Option<Money> {
        self.by_category.get(category).copied()
    }

    /// Categories sorted by name, for stable display
    pub fn sorted(&self) -> Vec<(&str, Money)> {
        let mut rows: Vec<_> = self
            .by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    fn add(&mut self, category: &str, amount: Money) {
        *self
            .by_category
            .entry(category.to_string())
            .or_insert_with(Money::zero) += amount;
        self.total += amount;
        self.transaction_count += 1;
    }
}

/// Income and expense totals for an inclusive date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// First day included
    pub start_date: NaiveDate,
    /// Last day included
    pub end_date: NaiveDate,
    pub income: KindSummary,
    pub expense: KindSummary,
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub net: Money,
}

impl MonthlySummary {
    /// Summarize every transaction dated within `start..=end`
    pub fn generate(ledger: &Ledger, start: NaiveDate, end: NaiveDate) -> Self {
        let mut income = KindSummary::default();
        let mut expense = KindSummary::default();

        for txn in ledger.in_range(start, end) {
            match txn.kind() {
                TransactionKind::Income => income.add(txn.category(), txn.amount()),
                TransactionKind::Expense => expense.add(txn.category(), txn.amount()),
            }
        }

        let total_income = income.total;
        let total_expense = expense.total;

        Self {
            start_date: start,
            end_date: end,
            income,
            expense,
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }

    /// Summarize one calendar month
    pub fn for_month(ledger: &Ledger, month: Month) -> Self {
        Self::generate(ledger, month.start_date(), month.end_date())
    }

    /// The month this summary starts in
    pub fn month(&self) -> Month {
        Month::from_date(self.start_date)
    }

    /// Totals for one kind
    pub fn kind(&self, kind: TransactionKind) -> &KindSummary {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// True when neither kind had any record in range
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expense.is_empty()
    }
}
