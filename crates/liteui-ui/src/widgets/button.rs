use crate::markup::{bridge_call, js_string, Markup};
use crate::widget::{ElementId, ElementKind, Widget};

/// The value a button reports when activated.
pub const CLICK: &str = "click";

/// A clickable control with a text label.
///
/// On activation the document forwards `(id, "click")` to the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for Button {
    fn kind(&self) -> ElementKind {
        ElementKind::Button
    }

    fn render(&self, id: &ElementId, markup: &mut Markup) {
        markup
            .open("button")
            .attr("id", id.as_str())
            .attr("onclick", &bridge_call(id.as_str(), &js_string(CLICK)))
            .end_open()
            .text(&self.text)
            .close("button");
    }
}
