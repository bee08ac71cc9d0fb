//! Ledger text format
//!
//! One transaction per line, comma-separated, no quoting:
//!
//! ```text
//! type,date,category,amount
//! income,2024-01-05,salary,1000.00
//! expense,2024-01-10,food,50.00
//! ```
//!
//! The header is always written and optional on read. Descriptions are not
//! persisted. Decoding never fails as a whole: lines that cannot be parsed
//! are skipped and reported back to the caller.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::ledger::Ledger;
use crate::models::{parse_date, Money, Transaction, TransactionKind};

/// Header line emitted by [`encode`]
pub const HEADER: &str = "type,date,category,amount";

/// Prefix that marks a header line on read
const HEADER_PREFIX: &str = "type,";

/// Prefix that marks a comment line on read
const COMMENT_PREFIX: char = '#';

/// Minimum number of fields in a data row
const MIN_FIELDS: usize = 4;

/// Why a line was skipped while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotEnoughFields,
    InvalidKind,
    InvalidDate,
    InvalidAmount,
}

/// A line that was not turned into a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    /// The trimmed line content
    pub line: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::NotEnoughFields => {
                write!(f, "Skipping invalid line (not enough fields): {}", self.line)
            }
            SkipReason::InvalidKind => write!(f, "Skipping invalid type on line: {}", self.line),
            SkipReason::InvalidDate => {
                write!(f, "Skipping line due to invalid date: {}", self.line)
            }
            SkipReason::InvalidAmount => {
                write!(f, "Skipping line due to invalid amount: {}", self.line)
            }
        }
    }
}

/// Result of decoding ledger text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Successfully parsed transactions, in file order
    pub transactions: Vec<Transaction>,
    /// Malformed lines, in file order
    pub skipped: Vec<SkippedLine>,
}

impl DecodeOutcome {
    /// Number of transactions that were parsed
    pub fn count(&self) -> usize {
        self.transactions.len()
    }
}

/// Parse ledger text, skipping blank, comment, header, and malformed lines
pub fn decode(text: &str) -> DecodeOutcome {
    let mut outcome = DecodeOutcome::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) || line.starts_with(HEADER_PREFIX)
        {
            continue;
        }

        match parse_row(line) {
            Ok(txn) => outcome.transactions.push(txn),
            Err(reason) => {
                let skipped = SkippedLine {
                    line_number: idx + 1,
                    line: line.to_string(),
                    reason,
                };
                debug!(line_number = skipped.line_number, "{}", skipped);
                outcome.skipped.push(skipped);
            }
        }
    }

    outcome
}

/// Parse one data row
///
/// Categories are not checked against the registry and amounts are not
/// checked for positivity on this path.
fn parse_row(line: &str) -> Result<Transaction, SkipReason> {
    let mut fields: Vec<&str> = line.split(',').collect();
    // Trailing empty fields do not count toward the field total
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    if fields.len() < MIN_FIELDS {
        return Err(SkipReason::NotEnoughFields);
    }

    let kind: TransactionKind = fields[0].parse().map_err(|_| SkipReason::InvalidKind)?;
    let date = parse_date(fields[1]).map_err(|_| SkipReason::InvalidDate)?;
    let amount = Money::parse(fields[3]).map_err(|_| SkipReason::InvalidAmount)?;

    Ok(Transaction::from_record(kind, date, fields[2], amount, ""))
}

/// Render the ledger as text: header plus one row per transaction
pub fn encode(ledger: &Ledger) -> String {
    let mut out = format!("{}\n", HEADER);
    for txn in ledger {
        out.push_str(&format_row(txn));
        out.push('\n');
    }
    out
}

/// Stream the encoded ledger into a writer
pub fn encode_to<W: Write>(ledger: &Ledger, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for txn in ledger {
        writeln!(writer, "{}", format_row(txn))?;
    }
    Ok(())
}

fn format_row(txn: &Transaction) -> String {
    format!(
        "{},{},{},{}",
        txn.kind(),
        txn.date().format("%Y-%m-%d"),
        txn.category(),
        txn.amount()
    )
}
