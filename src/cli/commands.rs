//! One-shot CLI commands
//!
//! Each command builds a fresh tracker, loads the files it was given, does
//! one thing, and exits. The interactive menu lives in [`super::shell`].

use std::path::{Path, PathBuf};

use clap::Args;

use crate::display::{capitalize, format_summary, format_transaction_register, DisplayOptions};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    categories_for, parse_date, CategorySelector, Money, Month, TransactionKind,
};
use crate::services::{ExpenseTracker, NewTransaction};
use crate::storage::LoadReport;

/// Arguments for `expense summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Ledger file(s) to load, in order
    #[arg(short, long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Month to summarize (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    pub kind: TransactionKind,

    /// Category name or menu number
    pub category: String,

    /// Amount (e.g., "50" or "50.00")
    pub amount: String,

    /// Ledger file to append to; created if missing
    #[arg(short, long)]
    pub file: PathBuf,

    /// Transaction date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Description, echoed back but not written to the ledger file
    #[arg(long)]
    pub description: Option<String>,

    /// Rewrite the file even if some of its lines could not be read
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `expense list` and `expense check`
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Ledger file(s) to read
    #[arg(short, long = "file", required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `expense categories`
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Only list categories for this type
    pub kind: Option<TransactionKind>,
}

/// Load every file into the tracker, printing skipped-line diagnostics
fn load_all(tracker: &mut ExpenseTracker, files: &[PathBuf]) -> TrackerResult<Vec<LoadReport>> {
    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let report = tracker.load(path)?;
        for skipped in &report.skipped {
            eprintln!("{}", skipped);
        }
        reports.push(report);
    }
    Ok(reports)
}

/// Handle `expense summary`
pub fn handle_summary_command(args: SummaryArgs, options: &DisplayOptions) -> TrackerResult<()> {
    let month = args
        .month
        .as_deref()
        .map(Month::parse)
        .transpose()
        .map_err(|e| TrackerError::Parse(format!("Invalid month: {}", e)))?;

    let mut tracker = ExpenseTracker::new();
    load_all(&mut tracker, &args.files)?;

    let summary = tracker.summarize(month);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary, options));
    }

    Ok(())
}

/// Handle `expense add`
pub fn handle_add_command(args: AddArgs, options: &DisplayOptions) -> TrackerResult<()> {
    let category: CategorySelector = args.category.parse()?;
    let amount = Money::parse(&args.amount)
        .map_err(|e| TrackerError::Parse(format!("Invalid amount '{}': {}", args.amount, e)))?;
    let date = args
        .date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(|e| TrackerError::Parse(format!("Invalid date: {}", e)))?;

    let mut tracker = ExpenseTracker::new();
    if args.file.exists() {
        let report = tracker.load(&args.file)?;
        refuse_lossy_rewrite(&args.file, &report, args.force)?;
    }

    let mut input = NewTransaction::new(args.kind, category, amount);
    input.date = date;
    input.description = args.description;

    let txn = tracker.add_transaction(input)?;
    let mut added = format!(
        "Added {} {} of {} on {}",
        txn.kind(),
        capitalize(txn.category()),
        options.money(txn.amount()),
        txn.date().format("%Y-%m-%d")
    );
    if !txn.description().is_empty() {
        added.push_str(&format!(" ({}, not saved to the file)", txn.description()));
    }
    println!("{}", added);

    tracker.save(&args.file)?;
    println!(
        "Saved {} transaction(s) to {}",
        tracker.ledger().count(),
        args.file.display()
    );

    Ok(())
}

/// Saving drops lines that failed to load, so that needs an explicit opt-in
fn refuse_lossy_rewrite(path: &Path, report: &LoadReport, force: bool) -> TrackerResult<()> {
    if report.skipped.is_empty() || force {
        return Ok(());
    }
    for skipped in &report.skipped {
        eprintln!("{}", skipped);
    }
    Err(TrackerError::Validation(format!(
        "{} has {} unreadable line(s) that would be dropped on save; rerun with --force to rewrite it",
        path.display(),
        report.skipped.len()
    )))
}

/// Handle `expense list`
pub fn handle_list_command(args: FileArgs, options: &DisplayOptions) -> TrackerResult<()> {
    let mut tracker = ExpenseTracker::new();
    load_all(&mut tracker, &args.files)?;
    print!("{}", format_transaction_register(tracker.ledger(), options));
    Ok(())
}

/// Handle `expense check`
///
/// Fails when any line was skipped so scripts can rely on the exit status.
pub fn handle_check_command(args: FileArgs) -> TrackerResult<()> {
    let mut tracker = ExpenseTracker::new();
    let mut skipped_total = 0;

    for path in &args.files {
        let report = tracker.load(path)?;
        println!("{}", path.display());
        for skipped in &report.skipped {
            println!("  line {}: {}", skipped.line_number, skipped);
        }
        println!(
            "  {} valid, {} skipped",
            report.loaded,
            report.skipped.len()
        );
        skipped_total += report.skipped.len();
    }

    if skipped_total > 0 {
        return Err(TrackerError::Validation(format!(
            "{} line(s) could not be read",
            skipped_total
        )));
    }
    Ok(())
}

/// Handle `expense categories`
pub fn handle_categories_command(args: CategoriesArgs) -> TrackerResult<()> {
    let kinds: Vec<TransactionKind> = match args.kind {
        Some(kind) => vec![kind],
        None => TransactionKind::all().to_vec(),
    };

    for (i, kind) in kinds.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} categories:", capitalize(kind.as_str()));
        for (n, category) in categories_for(kind).iter().enumerate() {
            println!("  {}. {}", n + 1, capitalize(category));
        }
    }

    Ok(())
}
