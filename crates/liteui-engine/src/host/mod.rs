//! Host surface contracts.
//!
//! A host surface is whatever displays the compiled document (a webview
//! window, a test harness, a pipe to another process) and relays the
//! document's `bridge.handle_event(id, value)` calls back as [`BridgeEvent`]s.

mod bridge;
mod stream;
mod surface;

pub use bridge::{BridgeEvent, BRIDGE_CALL, TAB_SWITCH};
pub use stream::StreamHost;
pub use surface::HostSurface;
