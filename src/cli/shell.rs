//! Interactive menu shell
//!
//! A numbered menu loop over stdin/stdout. Invalid input re-prompts; the core
//! is only called with values that already parsed.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::display::{capitalize, format_summary, DisplayOptions};
use crate::error::TrackerError;
use crate::models::{
    categories_for, parse_date, CategorySelector, Money, Month, TransactionKind,
};
use crate::services::{Clock, ExpenseTracker, NewTransaction};

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive shell, generic over its I/O so it can be scripted
pub struct Shell<R, W, C: Clock> {
    tracker: ExpenseTracker<C>,
    input: R,
    output: W,
    options: DisplayOptions,
    default_file: Option<PathBuf>,
}

impl<R: BufRead, W: Write, C: Clock> Shell<R, W, C> {
    pub fn new(tracker: ExpenseTracker<C>, input: R, output: W, options: DisplayOptions) -> Self {
        Self {
            tracker,
            input,
            output,
            options,
            default_file: None,
        }
    }

    /// File used by load/save when the user enters a blank path
    pub fn with_default_file(mut self, path: Option<PathBuf>) -> Self {
        self.default_file = path;
        self
    }

    pub fn tracker(&self) -> &ExpenseTracker<C> {
        &self.tracker
    }

    /// Hand the tracker back once the session is over
    pub fn into_tracker(self) -> ExpenseTracker<C> {
        self.tracker
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "==========================================")?;
        writeln!(self.output, "        Welcome to Expense Tracker")?;
        writeln!(self.output, "==========================================")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Choose an option:")?;
            writeln!(self.output, "1. Add Income")?;
            writeln!(self.output, "2. Add Expense")?;
            writeln!(self.output, "3. View Monthly Summary")?;
            writeln!(self.output, "4. Load transactions from file")?;
            writeln!(self.output, "5. Save transactions to file")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Your choice: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_transaction(TransactionKind::Income)?,
                "2" => self.add_transaction(TransactionKind::Expense)?,
                "3" => self.show_summary()?,
                "4" => self.load()?,
                "5" => self.save()?,
                "6" => {
                    writeln!(self.output, "Thank you for using Expense Tracker. Goodbye!")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> io::Result<Flow> {
        writeln!(self.output, "\nAdding a new {} transaction.", kind)?;
        writeln!(self.output, "Select a category:")?;
        for (i, category) in categories_for(kind).iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, capitalize(category))?;
        }

        let category = loop {
            let Some(input) = self.prompt("Enter category number: ")? else {
                return Ok(Flow::Exit);
            };
            let resolved = input
                .parse::<CategorySelector>()
                .and_then(|selector| selector.resolve(kind).map(|_| selector));
            match resolved {
                Ok(selector) => break selector,
                Err(TrackerError::Validation(msg)) => writeln!(self.output, "{}. Try again.", msg)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };

        let date = loop {
            let Some(input) = self.prompt("Enter date (YYYY-MM-DD), leave blank for today: ")?
            else {
                return Ok(Flow::Exit);
            };
            if input.is_empty() {
                break None;
            }
            match parse_date(&input) {
                Ok(date) => break Some(date),
                Err(_) => writeln!(self.output, "Invalid date format. Try again.")?,
            }
        };

        let amount = loop {
            let Some(input) = self.prompt("Enter amount: ")? else {
                return Ok(Flow::Exit);
            };
            match Money::parse(&input) {
                Ok(amount) if amount.is_positive() => break amount,
                Ok(_) => writeln!(self.output, "Amount must be positive. Try again.")?,
                Err(_) => writeln!(self.output, "Invalid amount. Enter a numeric value.")?,
            }
        };

        let Some(description) = self.prompt("Enter a description (optional): ")? else {
            return Ok(Flow::Exit);
        };

        let mut input = NewTransaction::new(kind, category, amount).described(description);
        input.date = date;

        match self.tracker.add_transaction(input) {
            Ok(_) => writeln!(self.output, "Transaction added successfully.")?,
            Err(e) => writeln!(self.output, "Could not add transaction: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn show_summary(&mut self) -> io::Result<Flow> {
        if self.tracker.ledger().is_empty() {
            writeln!(self.output, "\nNo transactions to show. Add some first.")?;
            return Ok(Flow::Continue);
        }

        let Some(input) = self.prompt(
            "\nEnter year and month for summary (YYYY-MM), leave blank for current month: ",
        )?
        else {
            return Ok(Flow::Exit);
        };

        let month = if input.is_empty() {
            None
        } else {
            match Month::parse(&input) {
                Ok(month) => Some(month),
                Err(_) => {
                    writeln!(self.output, "Invalid format. Showing current month summary.")?;
                    None
                }
            }
        };

        let summary = self.tracker.summarize(month);
        writeln!(self.output)?;
        write!(self.output, "{}", format_summary(&summary, &self.options))?;
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> io::Result<Flow> {
        let Some(path) = self.prompt_path("Enter path to the CSV file to load: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(path) = path else {
            return Ok(Flow::Continue);
        };

        match self.tracker.load(&path) {
            Ok(report) => {
                for skipped in &report.skipped {
                    writeln!(self.output, "{}", skipped)?;
                }
                writeln!(self.output, "Loaded {} transactions from file.", report.loaded)?;
            }
            Err(TrackerError::FileNotFound(_)) => {
                writeln!(self.output, "File not found or invalid. Aborting load.")?;
            }
            Err(e) => writeln!(self.output, "Error loading file: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> io::Result<Flow> {
        let Some(path) =
            self.prompt_path("Enter path to save current transactions (e.g., data.csv): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(path) = path else {
            return Ok(Flow::Continue);
        };

        match self.tracker.save(&path) {
            Ok(()) => writeln!(
                self.output,
                "Transactions saved successfully to {}",
                path.display()
            )?,
            Err(e) => writeln!(self.output, "Error saving to file: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Ask for a path, falling back to the configured default on blank input
    ///
    /// Outer `None` is end of input; inner `None` means no usable path.
    fn prompt_path(&mut self, message: &str) -> io::Result<Option<Option<PathBuf>>> {
        let Some(input) = self.prompt(message)? else {
            return Ok(None);
        };

        if !input.is_empty() {
            return Ok(Some(Some(PathBuf::from(input))));
        }
        match self.default_file.clone() {
            Some(default) => {
                writeln!(self.output, "Using default file {}", default.display())?;
                Ok(Some(Some(default)))
            }
            None => {
                writeln!(self.output, "No file path given.")?;
                Ok(Some(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedClock;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(script: &str) -> (String, ExpenseTracker<FixedClock>) {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        let mut output = Vec::new();
        let tracker = {
            let mut shell = Shell::new(
                ExpenseTracker::with_clock(clock),
                Cursor::new(script.as_bytes().to_vec()),
                &mut output,
                DisplayOptions::plain(),
            );
            shell.run().unwrap();
            shell.into_tracker()
        };
        (String::from_utf8(output).unwrap(), tracker)
    }

    #[test]
    fn test_exit_immediately() {
        let (output, tracker) = run_script("6\n");
        assert!(output.contains("Goodbye!"));
        assert!(tracker.ledger().is_empty());
    }

    #[test]
    fn test_end_of_input_exits() {
        let (output, _) = run_script("");
        assert!(output.contains("Your choice: "));
    }

    #[test]
    fn test_invalid_option() {
        let (output, _) = run_script("9\n6\n");
        assert!(output.contains("Invalid option. Please try again."));
    }

    #[test]
    fn test_add_income_with_reprompts() {
        let script = "1\n0\nabc\n1\n2024-13-01\n2024-01-05\n-5\nx\n1000\nJanuary pay\n6\n";
        let (output, tracker) = run_script(script);

        assert!(output.contains("1. Salary\n2. Business\n3. Other\n"));
        assert!(output.contains("Invalid category number 0 (choose 1-3). Try again."));
        assert!(output.contains("'abc' is not a valid income category"));
        assert!(output.contains("Invalid date format. Try again."));
        assert!(output.contains("Amount must be positive. Try again."));
        assert!(output.contains("Invalid amount. Enter a numeric value."));
        assert!(output.contains("Transaction added successfully."));

        let txn = &tracker.ledger().all()[0];
        assert_eq!(txn.category(), "salary");
        assert_eq!(txn.amount().cents(), 100_000);
        assert_eq!(txn.description(), "January pay");
    }

    #[test]
    fn test_add_expense_blank_date_is_today() {
        let (_, tracker) = run_script("2\n4\n\n12.5\n\n6\n");
        let txn = &tracker.ledger().all()[0];
        assert_eq!(txn.category(), "utilities");
        assert_eq!(txn.date(), NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(txn.description(), "");
    }

    #[test]
    fn test_summary_on_empty_ledger() {
        let (output, _) = run_script("3\n6\n");
        assert!(output.contains("No transactions to show. Add some first."));
    }

    #[test]
    fn test_summary_invalid_month_falls_back() {
        let (output, _) = run_script("2\n1\n\n50\n\n3\n2024/01\n6\n");
        assert!(output.contains("Invalid format. Showing current month summary."));
        assert!(output.contains("Monthly summary for 2024-01"));
        assert!(output.contains("  Food: 50.00"));
        assert!(output.contains("  No income records."));
        assert!(output.contains("Net Total: -50.00"));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let script = format!("4\n{}\n6\n", temp_dir.path().join("nope.csv").display());
        let (output, _) = run_script(&script);
        assert!(output.contains("File not found or invalid. Aborting load."));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        let script = format!(
            "1\n2\n2024-01-05\n300\n\n5\n{0}\n4\n{0}\n6\n",
            path.display()
        );
        let (output, tracker) = run_script(&script);

        assert!(output.contains("Transactions saved successfully to"));
        assert!(output.contains("Loaded 1 transactions from file."));
        assert_eq!(tracker.ledger().count(), 2);
    }

    #[test]
    fn test_load_reports_skipped_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        std::fs::write(&path, "income,2024-01-05,salary\nexpense,2024-01-10,food,5\n").unwrap();

        let (output, tracker) = run_script(&format!("4\n{}\n6\n", path.display()));
        assert!(output.contains("Skipping invalid line (not enough fields): income,2024-01-05,salary"));
        assert!(output.contains("Loaded 1 transactions from file."));
        assert_eq!(tracker.ledger().count(), 1);
    }

    #[test]
    fn test_blank_path_uses_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("default.csv");
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        let mut output = Vec::new();
        let mut shell = Shell::new(
            ExpenseTracker::with_clock(clock),
            Cursor::new(b"5\n\n6\n".to_vec()),
            &mut output,
            DisplayOptions::plain(),
        )
        .with_default_file(Some(path.clone()));
        shell.run().unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "type,date,category,amount\n"
        );
    }
}
