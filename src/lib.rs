//! A Nagios-compatible status probe for EGI Notebooks deployments.
//!
//! The probe builds the deployment's status URL from its configuration,
//! performs a single bounded HTTPS `GET` against it, decodes the JSON status
//! payload and folds the outcome into one of the three standard monitoring
//! severities. The severity is handed back to the monitoring supervisor as
//! the process exit code:
//!
//! | Exit code | Meaning |
//! |---|---|
//! | `0` | `OK` |
//! | `1` | `WARNING` |
//! | `2` | `CRITICAL`, including any transport, HTTP or payload failure |
//!
//! The status endpoint is expected to answer with a JSON body of the form:
//!
//! ```json
//! {
//!   "code": "OK",
//!   "msg": "all good"
//! }
//! ```
//!
//! Any failure on the way to that payload (unreachable endpoint, timeout,
//! HTTP error status, undecodable body) degrades to `CRITICAL` instead of
//! aborting: the supervisor always receives one status line on stdout and
//! one exit code, never a stack trace.
//!
//! The probe runs exactly one request per invocation. There are no retries
//! and no concurrent checks.
pub mod bootstrap;
pub mod checker;
