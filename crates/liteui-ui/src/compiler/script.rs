use liteui_engine::host::{BRIDGE_CALL, TAB_SWITCH};

use crate::markup::js_string;

/// Name of the client-side tab routine the tab buttons call.
pub const SWITCH_TAB_FN: &str = "switchTab";

/// The client-side tab routine.
///
/// Tab buttons and panels carry their group name in `data-group`; the routine
/// compares against that attribute instead of building element ids from the
/// name, so no group name is ever spliced into script source.
pub fn tab_script() -> String {
    format!(
        r#"
function {SWITCH_TAB_FN}(groupName) {{
    document.querySelectorAll('.tab-button, .tab-content').forEach(function (el) {{
        el.classList.toggle('active', el.dataset.group === groupName);
    }});
    {BRIDGE_CALL}({tab_switch}, groupName);
}}
"#,
        tab_switch = js_string(TAB_SWITCH),
    )
}
