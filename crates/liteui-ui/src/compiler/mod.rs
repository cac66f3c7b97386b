//! Model → markup compiler.
//!
//! [`compile`] walks a [`UiModel`] once and emits a self-contained document:
//!
//! 1. a `<style>` block built from the theme tokens,
//! 2. a `<script>` block with the tab-switching routine,
//! 3. the tab bar, one button per group in creation order,
//! 4. one panel per group, holding its elements in insertion order.
//!
//! Elements that were never assigned to a group are not rendered. The output
//! is a pure function of the model: compiling twice gives the same bytes.

mod script;
mod style;

pub use script::{tab_script, SWITCH_TAB_FN};
pub use style::stylesheet;

use crate::markup::Markup;
use crate::model::{GroupRef, UiModel};
use crate::widget::Element;

/// Seconds between consecutive elements' entrance animations.
pub const STAGGER_STEP: f64 = 0.1;

/// Compile `model` into a complete markup document.
pub fn compile(model: &UiModel) -> String {
    let mut m = Markup::with_capacity(8 * 1024);

    m.raw("<!DOCTYPE html>\n<html>\n<head>\n");
    m.raw("<meta charset=\"utf-8\">\n");
    m.raw("<style>").raw(&stylesheet(model.theme())).raw("</style>\n");
    m.raw("<script>").raw(&tab_script()).raw("</script>\n");
    m.raw("</head>\n<body>\n");

    tab_bar(model, &mut m);

    let mut rendered = 0;
    for (i, group) in model.groups().enumerate() {
        panel(i, group, &mut rendered, &mut m);
    }

    m.raw("</body>\n</html>\n");

    log::debug!(
        "compiled {} group(s), {rendered}/{} element(s), {} bytes",
        model.group_count(),
        model.elements().len(),
        m.len()
    );
    m.finish()
}

fn tab_bar(model: &UiModel, m: &mut Markup) {
    m.open("div").attr("class", "tab-nav").end_open().newline();
    for (i, group) in model.groups().enumerate() {
        m.open("button")
            .attr("id", &format!("btn-{i}"))
            .attr("onclick", &format!("{SWITCH_TAB_FN}(this.dataset.group)"))
            .attr("class", &active_class("tab-button", group.is_active()))
            .attr("data-group", group.name())
            .end_open()
            .text(group.name())
            .close("button")
            .newline();
    }
    m.close("div").newline();
}

fn panel(index: usize, group: GroupRef<'_>, rendered: &mut usize, m: &mut Markup) {
    m.open("div")
        .attr("id", &format!("tab-{index}"))
        .attr("class", &active_class("tab-content", group.is_active()))
        .attr("data-group", group.name())
        .end_open()
        .newline();
    for element in group.elements() {
        wrapper(element, *rendered, m);
        *rendered += 1;
    }
    m.close("div").newline();
}

/// One wrapper block per element, with its staggered entrance delay.
fn wrapper(element: &Element, position: usize, m: &mut Markup) {
    let delay = position as f64 * STAGGER_STEP;
    m.open("div")
        .attr("class", "ui-element")
        .attr("style", &format!("animation-delay: {delay:.1}s"))
        .end_open();
    element.render(m);
    m.close("div").newline();
}

fn active_class(base: &str, active: bool) -> String {
    if active { format!("{base} active") } else { base.to_string() }
}
