use anyhow::Result;

use crate::host::BridgeEvent;
use crate::window::RuntimeConfig;

/// Something that can display a compiled document and report interactions.
///
/// The runtime drives a host strictly in this order: one [`open`], any
/// number of [`next_event`] calls until it returns `Ok(None)` or the app
/// asks to exit, then one [`close`]. Events are pulled one at a time, so
/// handlers never overlap.
///
/// [`open`]: HostSurface::open
/// [`next_event`]: HostSurface::next_event
/// [`close`]: HostSurface::close
pub trait HostSurface {
    /// Show `document` in a window described by `config`.
    fn open(&mut self, config: &RuntimeConfig, document: &str) -> Result<()>;

    /// Block until the next interaction. `Ok(None)` means the window closed.
    fn next_event(&mut self) -> Result<Option<BridgeEvent>>;

    /// Release the window. Called once, after the last event.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
