//! Logging utilities.
//!
//! This module centralizes logger initialization. Library code only talks to
//! the `log` facade; binaries pick the backend by calling [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
