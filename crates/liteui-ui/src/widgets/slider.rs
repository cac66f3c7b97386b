use crate::markup::{bridge_call, Markup};
use crate::widget::{ElementId, ElementKind, Widget};

/// A range control bounded by `[min, max]`.
///
/// Every value change forwards `(id, currentValue)` as a string. The bounds
/// are not checked here; keeping `min <= value <= max` is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub min: f64,
    pub max: f64,
    /// Initial position.
    pub value: f64,
}

impl Slider {
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        Self { min, max, value }
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(0.0, 100.0, 50.0)
    }
}

impl Widget for Slider {
    fn kind(&self) -> ElementKind {
        ElementKind::Slider
    }

    fn render(&self, id: &ElementId, markup: &mut Markup) {
        markup
            .open("input")
            .attr("type", "range")
            .attr("id", id.as_str())
            .attr("min", &self.min.to_string())
            .attr("max", &self.max.to_string())
            .attr("value", &self.value.to_string())
            .attr("oninput", &bridge_call(id.as_str(), "this.value"))
            .end_open();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Element;

    #[test]
    fn renders_bounds_and_input_call() {
        let mut m = Markup::new();
        Element::new(1, Slider::new(0.0, 100.0, 50.0).into()).render(&mut m);
        assert_eq!(
            m.as_str(),
            r#"<input type="range" id="slider_1" min="0" max="100" value="50" oninput="bridge.handle_event(&#39;slider_1&#39;, this.value)">"#
        );
    }

    #[test]
    fn fractional_bounds_keep_precision() {
        let mut m = Markup::new();
        Element::new(2, Slider::new(-0.5, 1.25, 0.75).into()).render(&mut m);
        assert!(m.as_str().contains(r#"min="-0.5" max="1.25" value="0.75""#));
    }
}
