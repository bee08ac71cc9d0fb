//! Transaction display formatting
//!
//! Provides the register view used by `expense list`.

use super::report::{capitalize, truncate, DisplayOptions};
use crate::ledger::Ledger;
use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, options: &DisplayOptions) -> String {
    format!(
        "{} {:8} {:12} {:>12}  {}",
        txn.date().format("%Y-%m-%d"),
        txn.kind(),
        capitalize(&truncate(txn.category(), 12)),
        options.money(txn.amount()),
        truncate(txn.description(), 30)
    )
    .trim_end()
    .to_string()
}

/// Format the ledger as a register, in insertion order
pub fn format_transaction_register(ledger: &Ledger, options: &DisplayOptions) -> String {
    if ledger.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:8} {:12} {:>12}  {}\n",
        "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in ledger {
        output.push_str(&format_transaction_row(txn, options));
        output.push('\n');
    }

    output.push_str(&format!("\n{} transaction(s)\n", ledger.count()));
    output
}
