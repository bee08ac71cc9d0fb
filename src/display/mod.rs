//! Display formatting for terminal output
//!
//! Provides utilities for formatting summaries and transactions for terminal
//! display, including colored totals.

pub mod report;
pub mod summary;
pub mod transaction;

pub use report::{capitalize, DisplayOptions};
pub use summary::format_summary;
pub use transaction::{format_transaction_register, format_transaction_row};
