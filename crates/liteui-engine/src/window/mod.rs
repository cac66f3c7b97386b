//! Window + runtime loop.
//!
//! Owns the handshake between an [`App`](crate::core::App) and a
//! [`HostSurface`](crate::host::HostSurface).

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
