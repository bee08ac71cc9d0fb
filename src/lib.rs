//! Expense Tracker - a small personal income and expense ledger
//!
//! This library keeps an in-memory ledger of income and expense transactions,
//! summarizes them per calendar month, and reads and writes them as a plain
//! comma-separated text file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, transactions, categories, and months
//! - `ledger`: The append-only transaction collection
//! - `reports`: Monthly summary aggregation
//! - `storage`: Ledger text format and file I/O
//! - `services`: The tracker facade and its clock
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::models::{CategorySelector, Money, TransactionKind};
//! use expense_tracker::services::{ExpenseTracker, NewTransaction};
//!
//! let mut tracker = ExpenseTracker::new();
//! tracker.add_transaction(NewTransaction::new(
//!     TransactionKind::Expense,
//!     "food".parse::<CategorySelector>()?,
//!     Money::parse("12.50")?,
//! ))?;
//! let summary = tracker.summarize(None);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
