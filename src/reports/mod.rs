//! Reports module
//!
//! Provides derived views over the ledger.

pub mod monthly;

pub use monthly::{KindSummary, MonthlySummary};
