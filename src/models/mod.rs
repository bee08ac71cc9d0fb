//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, their kinds and categories, money and months.

pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{categories_for, is_valid, CategorySelector};
pub use money::{Money, MoneyParseError};
pub use period::{parse_date, Month, PeriodParseError};
pub use transaction::{Transaction, TransactionKind};
