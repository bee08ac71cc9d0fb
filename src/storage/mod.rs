//! Storage layer for the expense tracker
//!
//! Provides the line-oriented ledger text format and the file operations
//! built on top of it.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode, DecodeOutcome, SkipReason, SkippedLine, HEADER};
pub use file_io::{load_into, save, LoadReport};
