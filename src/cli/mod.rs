//! CLI command handlers
//!
//! This module bridges clap argument parsing with the tracker service: the
//! one-shot subcommands in `commands` and the interactive menu in `shell`.

pub mod commands;
pub mod shell;

pub use commands::{
    handle_add_command, handle_categories_command, handle_check_command, handle_list_command,
    handle_summary_command, AddArgs, CategoriesArgs, FileArgs, SummaryArgs,
};
pub use shell::Shell;
