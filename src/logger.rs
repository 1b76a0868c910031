// src/logger.rs
// =============================================================================
// Sets up logging for the whole program.
//
// Logs go to stderr so they never mix with the links we print on stdout.
// RUST_LOG picks the level (e.g. RUST_LOG=urlgrep=debug); without it only
// warnings and errors are shown.
// =============================================================================

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use env_logger::{Builder, Env};

/// Level used when RUST_LOG isn't set
const DEFAULT_FILTER: &str = "warn";

/// Installs an env_logger that prefixes each entry with the seconds elapsed
/// since startup
pub fn initialize() -> Result<()> {
    let start = Instant::now();

    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(move |buf, record| {
            writeln!(
                buf,
                "{:>9.3} {:<5} {} {}",
                start.elapsed().as_secs_f32(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .context("Could not initialize logging")
}
