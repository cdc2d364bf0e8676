//! Interactive red-black tree driver.
//!
//! Reads integers from stdin, one per line, inserts each into an `RBTreeSet` and prints the
//! tree after every insertion. Input ends at EOF or when the sentinel value (default `0`) is
//! entered. Built with `--features cli`.
//!
//! Environment:
//! - `RBTREE_SENTINEL`: value that ends input (default `0`)
//! - `RBTREE_INDENT`: spaces per tree level (default `4`, at most `64`)
//! - `RBTREE_ORDER`: `descending` or `ascending` (default `descending`)
//! - `RBTREE_PROMPT`: prompt text
//! - `RBTREE_LOG`: tracing filter, logs go to stderr (default `warn`)

mod config;
mod repl;

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ReplConfig;
use crate::repl::ReplError;

/// Initialize tracing with the RBTREE_LOG environment variable.
///
/// Defaults to "warn" so that log lines do not interleave with the printed trees.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("RBTREE_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<(), ReplError> {
    init_tracing();

    let config = ReplConfig::load()?;
    info!(?config, "Starting rbtree-repl");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let set = repl::run(&config, stdin.lock(), &mut stdout)?;

    info!(len = set.len(), black_height = set.black_height(), "Done");
    Ok(())
}
