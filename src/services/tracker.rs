//! Expense tracker service
//!
//! Owns the ledger for the life of the process and exposes the operations
//! the shell calls: add, summarize, load, and save.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use super::clock::{Clock, SystemClock};
use crate::error::TrackerResult;
use crate::ledger::Ledger;
use crate::models::{CategorySelector, Money, Month, Transaction, TransactionKind};
use crate::reports::MonthlySummary;
use crate::storage::{self, LoadReport};

/// Input for adding a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    /// Menu number or category name; must be registered for `kind`
    pub category: CategorySelector,
    /// Defaults to the clock's current date
    pub date: Option<NaiveDate>,
    pub amount: Money,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn new(kind: TransactionKind, category: CategorySelector, amount: Money) -> Self {
        Self {
            kind,
            category,
            date: None,
            amount,
            description: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The tracker: a ledger plus the clock used for defaults
#[derive(Debug)]
pub struct ExpenseTracker<C: Clock = SystemClock> {
    ledger: Ledger,
    clock: C,
}

impl ExpenseTracker<SystemClock> {
    /// Create an empty tracker using the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ExpenseTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ExpenseTracker<C> {
    /// Create an empty tracker with a specific clock
    pub fn with_clock(clock: C) -> Self {
        Self {
            ledger: Ledger::new(),
            clock,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validate and append a transaction
    ///
    /// Nothing is appended if the category does not resolve or the amount is
    /// not positive.
    pub fn add_transaction(&mut self, input: NewTransaction) -> TrackerResult<&Transaction> {
        let category = input.category.resolve(input.kind)?;
        let date = input.date.unwrap_or_else(|| self.clock.today());
        let description = input.description.unwrap_or_default();

        let txn = Transaction::new(
            input.kind,
            date,
            category,
            input.amount,
            description.trim(),
        )?;

        debug!(kind = %txn.kind(), category = txn.category(), amount = %txn.amount(), "adding transaction");
        Ok(self.ledger.append(txn))
    }

    /// Summarize a month, defaulting to the current one
    pub fn summarize(&self, month: Option<Month>) -> MonthlySummary {
        let month = month.unwrap_or_else(|| Month::current(&self.clock));
        MonthlySummary::for_month(&self.ledger, month)
    }

    /// Append every valid transaction found in a ledger file
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> TrackerResult<LoadReport> {
        storage::load_into(path, &mut self.ledger)
    }

    /// Write the ledger to a file, replacing its content
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TrackerResult<()> {
        storage::save(path, &self.ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker() -> ExpenseTracker<FixedClock> {
        ExpenseTracker::with_clock(FixedClock::new(date(2024, 1, 20)))
    }

    #[test]
    fn test_add_by_index_defaults_date_to_today() {
        let mut tracker = tracker();
        let txn = tracker
            .add_transaction(NewTransaction::new(
                TransactionKind::Expense,
                CategorySelector::Index(2),
                Money::from_cents(80_000),
            ))
            .unwrap();

        assert_eq!(txn.category(), "rent");
        assert_eq!(txn.date(), date(2024, 1, 20));
        assert_eq!(tracker.ledger().count(), 1);
    }

    #[test]
    fn test_add_by_name_with_description() {
        let mut tracker = tracker();
        let txn = tracker
            .add_transaction(
                NewTransaction::new(
                    TransactionKind::Income,
                    CategorySelector::Name("Business".into()),
                    Money::from_cents(1234),
                )
                .on(date(2023, 11, 2))
                .described("  consulting  "),
            )
            .unwrap();

        assert_eq!(txn.category(), "business");
        assert_eq!(txn.date(), date(2023, 11, 2));
        assert_eq!(txn.description(), "consulting");
    }

    #[test]
    fn test_invalid_input_leaves_ledger_untouched() {
        let mut tracker = tracker();

        let bad_category = tracker.add_transaction(NewTransaction::new(
            TransactionKind::Income,
            CategorySelector::Name("food".into()),
            Money::from_cents(100),
        ));
        assert!(bad_category.unwrap_err().is_validation());

        let bad_amount = tracker.add_transaction(NewTransaction::new(
            TransactionKind::Expense,
            CategorySelector::Index(1),
            Money::zero(),
        ));
        assert!(bad_amount.unwrap_err().is_validation());

        assert!(tracker.ledger().is_empty());
    }

    #[test]
    fn test_summarize_defaults_to_current_month() {
        let mut tracker = tracker();
        tracker
            .add_transaction(
                NewTransaction::new(
                    TransactionKind::Income,
                    CategorySelector::Index(1),
                    Money::from_cents(500),
                )
                .on(date(2024, 1, 3)),
            )
            .unwrap();
        tracker
            .add_transaction(
                NewTransaction::new(
                    TransactionKind::Income,
                    CategorySelector::Index(1),
                    Money::from_cents(700),
                )
                .on(date(2023, 12, 3)),
            )
            .unwrap();

        let current = tracker.summarize(None);
        assert_eq!(current.month(), Month::new(2024, 1).unwrap());
        assert_eq!(current.total_income.cents(), 500);

        let december = tracker.summarize(Some(Month::new(2023, 12).unwrap()));
        assert_eq!(december.total_income.cents(), 700);
    }

    #[test]
    fn test_load_and_summarize_example() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(
            &path,
            "income,2024-01-05,salary,1000.00\nexpense,2024-01-10,food,50.00\nexpense,2024-02-01,rent,500.00",
        )
        .unwrap();

        let mut tracker = tracker();
        assert_eq!(tracker.load(&path).unwrap().loaded, 3);

        let summary = tracker.summarize(Some(Month::new(2024, 1).unwrap()));
        assert_eq!(summary.income.category_total("salary").unwrap().to_string(), "1000.00");
        assert_eq!(summary.expense.category_total("food").unwrap().to_string(), "50.00");
        assert_eq!(summary.expense.category_total("rent"), None);
        assert_eq!(summary.net.to_string(), "950.00");
    }

    #[test]
    fn test_load_twice_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(&path, "expense,2024-01-10,food,50.00\n").unwrap();

        let mut tracker = tracker();
        tracker.load(&path).unwrap();
        tracker.load(&path).unwrap();
        assert_eq!(tracker.ledger().count(), 2);
    }

    #[test]
    fn test_save_writes_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut tracker = tracker();
        tracker
            .add_transaction(NewTransaction::new(
                TransactionKind::Expense,
                CategorySelector::Name("travel".into()),
                Money::from_cents(4_250),
            ))
            .unwrap();
        tracker.save(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "type,date,category,amount\nexpense,2024-01-20,travel,42.50\n"
        );
    }
}
