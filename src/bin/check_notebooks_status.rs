//! Nagios-compatible probe checking the status endpoint of a notebooks
//! deployment.
//!
//! ```text
//! cargo run --bin check_notebooks_status -- --url https://notebooks.example.org/
//! ```
//!
//! The process exit code is the check severity: `0` OK, `1` WARNING, `2`
//! CRITICAL.
use std::process;

use notebooks_status_probe::checker::app;

#[tokio::main]
async fn main() {
    let severity = app::run().await;

    process::exit(severity.exit_code());
}
