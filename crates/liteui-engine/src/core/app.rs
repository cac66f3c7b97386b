use crate::host::BridgeEvent;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Produce the full document to display. Called once per window.
    fn document(&mut self) -> String;

    /// Called for every interaction the host relays, one at a time.
    fn on_event(&mut self, event: &BridgeEvent) -> AppControl;

    /// Called once after the host closes, whatever the reason.
    fn on_close(&mut self) {}
}
