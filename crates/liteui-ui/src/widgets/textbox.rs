use crate::markup::{bridge_call, Markup};
use crate::widget::{ElementId, ElementKind, Widget};

/// Placeholder used when the embedder does not pick one.
pub const DEFAULT_PLACEHOLDER: &str = "Enter text...";

/// A single-line free-text control.
///
/// Commits (focus loss after an edit) forward `(id, currentValue)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    pub placeholder: String,
}

impl TextBox {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self { placeholder: placeholder.into() }
    }
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}

impl Widget for TextBox {
    fn kind(&self) -> ElementKind {
        ElementKind::TextBox
    }

    fn render(&self, id: &ElementId, markup: &mut Markup) {
        markup
            .open("input")
            .attr("type", "text")
            .attr("id", id.as_str())
            .attr_opt("placeholder", &self.placeholder)
            .attr("onchange", &bridge_call(id.as_str(), "this.value"))
            .end_open();
    }
}
