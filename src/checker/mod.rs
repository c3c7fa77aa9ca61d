//! The status probe console client.
//!
//! [`app`] wires the command line to the probe: it resolves the status URL
//! from the given options ([`config`]) and runs the check ([`service`])
//! against it, printing the outcome through the injected console
//! ([`printer`]). The wire payload and its classification live in
//! [`resources`] and [`severity`].
pub mod app;
pub mod config;
pub mod console;
pub mod logger;
pub mod printer;
pub mod resources;
pub mod service;
pub mod severity;
