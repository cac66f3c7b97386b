//! liteui engine crate.
//!
//! This crate owns the host-facing runtime pieces used by higher layers:
//! the bridge wire contract, the host surface abstraction and the event loop.

pub mod core;
pub mod host;
pub mod window;

pub mod logging;
pub mod paint;
