//! Setup for the probe logging.
//!
//! Diagnostics go to standard error so that the check result stays the only
//! line on standard output. `--verbose` raises the level from `Info` to
//! `Debug`.
use std::sync::Once;

use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

pub fn setup(verbose: bool) {
    let tracing_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    INIT.call_once(|| {
        tracing_stderr_init(tracing_level);
    });
}

fn tracing_stderr_init(filter: LevelFilter) {
    // Monitoring engines capture the plugin output; keep it escape-free.
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
