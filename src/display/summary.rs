//! Monthly summary display

use super::report::{capitalize, separator, DisplayOptions};
use crate::reports::{KindSummary, MonthlySummary};

/// Format a monthly summary for the terminal
pub fn format_summary(summary: &MonthlySummary, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly summary for {}\n", summary.month()));
    output.push_str(&separator(33));
    output.push('\n');

    output.push_str("Income:\n");
    push_kind(&mut output, &summary.income, "No income records.", "Total Income", options);

    output.push_str("\nExpenses:\n");
    push_kind(
        &mut output,
        &summary.expense,
        "No expense records.",
        "Total Expenses",
        options,
    );

    output.push_str(&format!("\nNet Total: {}\n", options.money_signed(summary.net)));
    output
}

fn push_kind(
    output: &mut String,
    kind: &KindSummary,
    empty_message: &str,
    total_label: &str,
    options: &DisplayOptions,
) {
    if kind.is_empty() {
        output.push_str(&format!("  {}\n", empty_message));
        return;
    }

    for (category, amount) in kind.sorted() {
        output.push_str(&format!("  {}: {}\n", capitalize(category), options.money(amount)));
    }
    output.push_str(&format!("  {}: {}\n", total_label, options.money(kind.total)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use crate::models::{Money, Month, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let entries = [
            (TransactionKind::Income, 5, "salary", 100_000),
            (TransactionKind::Expense, 10, "food", 5_000),
            (TransactionKind::Expense, 11, "rent", 20_000),
        ];
        entries
            .into_iter()
            .map(|(kind, day, cat, cents)| {
                Transaction::new(
                    kind,
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    cat,
                    Money::from_cents(cents),
                    "",
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_format_summary() {
        let summary = MonthlySummary::for_month(&ledger(), Month::new(2024, 1).unwrap());
        let text = format_summary(&summary, &DisplayOptions::plain());

        assert!(text.starts_with("Monthly summary for 2024-01\n"));
        assert!(text.contains("  Salary: 1000.00\n  Total Income: 1000.00\n"));
        assert!(text.contains("  Food: 50.00\n  Rent: 200.00\n  Total Expenses: 250.00\n"));
        assert!(text.ends_with("Net Total: 750.00\n"));
    }

    #[test]
    fn test_format_empty_kinds() {
        let summary = MonthlySummary::for_month(&ledger(), Month::new(2024, 2).unwrap());
        let text = format_summary(&summary, &DisplayOptions::plain());

        assert!(text.contains("  No income records.\n"));
        assert!(text.contains("  No expense records.\n"));
        assert!(!text.contains("Total Income"));
        assert!(text.contains("Net Total: 0.00"));
    }

    #[test]
    fn test_negative_net_is_red() {
        let mut ledger = Ledger::new();
        ledger.append(
            Transaction::new(
                TransactionKind::Expense,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                "food",
                Money::from_cents(100),
                "",
            )
            .unwrap(),
        );
        let summary = MonthlySummary::for_month(&ledger, Month::new(2024, 1).unwrap());
        let options = DisplayOptions {
            currency_symbol: String::new(),
            color: true,
        };
        assert!(format_summary(&summary, &options).contains("\x1b[31m-1.00\x1b[0m"));
    }
}
