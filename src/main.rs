//! Binary entry point that glues the menu-driven front-end to the
//! PostgreSQL-backed persistence layer. Summarizing the bootstrapping
//! pipeline here keeps the intent obvious when revisiting the code: we load
//! the environment, bring up logging, resolve connection settings, and drive
//! the menu loop on stdin/stdout until the user exits.

use std::io;

use anyhow::{anyhow, Result};
use book_club_manager::{run_app, App, DbConfig};
use tracing_subscriber::EnvFilter;

/// Initialize logging, resolve connection settings, and launch the menu loop.
///
/// Returning a `Result` bubbles up fatal problems (for example stdin closing
/// mid-session) to the terminal instead of crashing silently. Per-action
/// database failures are handled inside the loop and never reach here.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = DbConfig::from_env();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut app = App::new(config, stdin.lock(), stdout.lock());
    run_app(&mut app)
}

/// Console logging on stderr with `RUST_LOG` control. The default filter only
/// lets warnings through so prompts and results stay readable.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
