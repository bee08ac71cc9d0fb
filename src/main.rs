use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_categories_command, handle_check_command, handle_list_command,
    handle_summary_command, AddArgs, CategoriesArgs, FileArgs, Shell, SummaryArgs,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::display::DisplayOptions;
use expense_tracker::logging;
use expense_tracker::services::ExpenseTracker;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Track personal income and expenses",
    long_about = "Expense Tracker keeps a ledger of income and expense transactions, \
                  summarizes them by month, and stores them in a plain \
                  comma-separated file. Run without a subcommand for the \
                  interactive menu."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use this directory for configuration instead of the platform default
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Shell,

    /// Print the monthly summary for one or more ledger files
    Summary(SummaryArgs),

    /// Add a transaction to a ledger file
    Add(AddArgs),

    /// List every transaction in one or more ledger files
    #[command(alias = "ls")]
    List(FileArgs),

    /// Report lines in ledger files that cannot be read
    Check(FileArgs),

    /// List the registered categories
    Categories(CategoriesArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Initialize paths and settings
    let paths = TrackerPaths::resolve(cli.config_dir.as_deref())?;
    let settings = Settings::load_or_create(&paths)?;
    let options = DisplayOptions::from_settings(&settings, cli.no_color);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(ExpenseTracker::new(), stdin.lock(), stdout.lock(), options)
                .with_default_file(settings.default_file.clone())
                .run()?;
        }
        Commands::Summary(args) => handle_summary_command(args, &options)?,
        Commands::Add(args) => handle_add_command(args, &options)?,
        Commands::List(args) => handle_list_command(args, &options)?,
        Commands::Check(args) => handle_check_command(args)?,
        Commands::Categories(args) => handle_categories_command(args)?,
        Commands::Config { init } => {
            if init {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Schema version:  {}", settings.schema_version);
            println!(
                "  Currency symbol: {}",
                if settings.currency_symbol.is_empty() {
                    "(none)"
                } else {
                    settings.currency_symbol.as_str()
                }
            );
            println!("  Color output:    {}", settings.color_output);
            match &settings.default_file {
                Some(path) => println!("  Default file:    {}", path.display()),
                None => println!("  Default file:    (none)"),
            }
        }
    }

    Ok(())
}
