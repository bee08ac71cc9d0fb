//! Tracing subscriber setup
//!
//! Diagnostics (skipped ledger lines, file activity) go to stderr through
//! `tracing`. `RUST_LOG` is honored on top of the verbosity default.

use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive for a `-v` count
fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "expense_tracker=warn",
        1 => "expense_tracker=info",
        _ => "expense_tracker=debug",
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(
                directive_for(verbosity)
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::WARN.into()),
            )
            .from_env_lossy();

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
