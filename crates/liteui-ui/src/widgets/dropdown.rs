use crate::markup::{bridge_call, Markup};
use crate::widget::{ElementId, ElementKind, Widget};

/// A single-select control. Choices render in `options` order; duplicates
/// are allowed and rendered as given. With no choices the select is
/// rendered disabled.
///
/// Selection changes forward `(id, selectedValue)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dropdown {
    pub options: Vec<String>,
}

impl Dropdown {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { options: options.into_iter().map(Into::into).collect() }
    }
}

impl Widget for Dropdown {
    fn kind(&self) -> ElementKind {
        ElementKind::Dropdown
    }

    fn render(&self, id: &ElementId, markup: &mut Markup) {
        markup
            .open("select")
            .attr("id", id.as_str())
            .attr("onchange", &bridge_call(id.as_str(), "this.value"));
        if self.options.is_empty() {
            markup.bool_attr("disabled");
        }
        markup.end_open();
        for option in &self.options {
            markup
                .open("option")
                .attr("value", option)
                .end_open()
                .text(option)
                .close("option");
        }
        markup.close("select");
    }
}
