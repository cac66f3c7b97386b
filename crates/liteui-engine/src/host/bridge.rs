use serde::{Deserialize, Serialize};

/// The call every interactive control in a compiled document makes.
///
/// Hosts must make `bridge` reachable inside the document and relay
/// `handle_event(id, value)` in that argument order.
pub const BRIDGE_CALL: &str = "bridge.handle_event";

/// Reserved pseudo-id sent by the document's tab-switching routine.
/// The value is the name of the group being switched to.
pub const TAB_SWITCH: &str = "tab_switch";

/// One user interaction relayed by the host surface.
///
/// `value` is always a string, whatever the control's semantic type;
/// handlers parse numbers themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeEvent {
    pub id: String,
    pub value: String,
}

impl BridgeEvent {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id: id.into(), value: value.into() }
    }

    #[inline]
    pub fn is_tab_switch(&self) -> bool {
        self.id == TAB_SWITCH
    }
}
