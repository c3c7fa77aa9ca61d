//! Program to check the status of a notebooks deployment.
//!
//! The endpoint can be given as a full URL:
//!
//! ```text
//! cargo run --bin check_notebooks_status -- --url https://notebooks.example.org/
//! ```
//!
//! or as a host, checked over https on the default port:
//!
//! ```text
//! cargo run --bin check_notebooks_status -- -H notebooks.example.org
//! ```
//!
//! Arguments can also be read from a file, one argument per line, with the
//! `@file` syntax:
//!
//! ```text
//! cargo run --bin check_notebooks_status -- @probe.args
//! ```
use anyhow::Context;
use clap::Parser;
use tracing::error;

use super::config::{Configuration, Options, DEFAULT_PORT, DEFAULT_STATUS_PATH, DEFAULT_TIMEOUT};
use super::console::Console;
use super::service::Service;
use super::severity::Severity;
use crate::bootstrap::logging;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// URL of the EGI notebooks endpoint
    #[clap(long, env = "NOTEBOOKS_PROBE_URL")]
    url: Option<String>,

    /// Host to be checked
    #[clap(short = 'H', long, env = "NOTEBOOKS_PROBE_HOST")]
    host: Option<String>,

    /// Port to be checked
    #[clap(short, long, default_value_t = DEFAULT_PORT, env = "NOTEBOOKS_PROBE_PORT")]
    port: u16,

    /// Path in the endpoint for the monitoring service
    #[clap(long, default_value = DEFAULT_STATUS_PATH)]
    status_path: String,

    /// Timeout in seconds of the probe
    #[clap(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs(), env = "NOTEBOOKS_PROBE_TIMEOUT")]
    timeout: u64,

    /// Be verbose
    #[clap(short, long)]
    verbose: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            host: args.host,
            port: args.port,
            status_path: args.status_path,
            timeout: args.timeout,
        }
    }
}

/// Runs the probe and returns the severity the process should exit with.
///
/// Configuration problems are reported as errors and count as
/// [`Severity::Critical`], without touching the network.
pub async fn run() -> Severity {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            logging::setup(false);
            error!("{err:#}");
            return Severity::Critical;
        }
    };

    logging::setup(args.verbose);

    let config = match Configuration::try_from(Options::from(args)) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return Severity::Critical;
        }
    };

    let service = Service {
        config,
        console: Console::default(),
    };

    service.run_check().await
}

fn parse_args() -> anyhow::Result<Args> {
    let argv = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)
        .context("can't expand argument files")?;

    Ok(Args::parse_from(argv))
}
