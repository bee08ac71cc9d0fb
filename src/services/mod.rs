//! Service layer for the expense tracker
//!
//! The service layer ties the ledger, the category registry, summaries, and
//! file storage together behind the operations a front end calls.

pub mod clock;
pub mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tracker::{ExpenseTracker, NewTransaction};
