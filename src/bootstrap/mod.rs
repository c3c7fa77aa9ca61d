//! Probe process bootstrapping.
pub mod logging;
