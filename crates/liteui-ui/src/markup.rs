use liteui_engine::host::BRIDGE_CALL;

/// Append-only HTML writer used by the compiler and every widget.
///
/// All user-supplied strings go through [`attr`](Markup::attr) or
/// [`text`](Markup::text), which escape them; [`raw`](Markup::raw) is for
/// markup the compiler produced itself.
///
/// # Example
/// ```rust,ignore
/// let mut m = Markup::new();
/// m.open("button").attr("id", "button_0").end_open();
/// m.text("Save & quit").close("button");
/// assert_eq!(m.as_str(), r#"<button id="button_0">Save &amp; quit</button>"#);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self { buf: String::with_capacity(cap) }
    }

    /// Start a tag: `<tag`. Follow with attributes, then [`end_open`](Self::end_open).
    pub fn open(&mut self, tag: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        self
    }

    /// ` name="value"` with `value` escaped.
    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        push_escaped(&mut self.buf, value);
        self.buf.push('"');
        self
    }

    /// ` name="value"` only when `value` is non-empty.
    pub fn attr_opt(&mut self, name: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.attr(name, value);
        }
        self
    }

    /// A valueless attribute: ` name`.
    pub fn bool_attr(&mut self, name: &str) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self
    }

    pub fn end_open(&mut self) -> &mut Self {
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Escaped text content.
    pub fn text(&mut self, s: &str) -> &mut Self {
        push_escaped(&mut self.buf, s);
        self
    }

    /// Trusted markup, written verbatim.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

// ── Escaping ──────────────────────────────────────────────────────────────

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Single-quoted JavaScript string literal for `s`.
///
/// The result is still raw script; pass it through [`Markup::attr`] when it
/// lands in an event-handler attribute.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// `bridge.handle_event('<id>', <value_expr>)`.
///
/// `value_expr` is a script expression (`this.value`) or an already quoted
/// literal from [`js_string`].
pub fn bridge_call(id: &str, value_expr: &str) -> String {
    format!("{BRIDGE_CALL}({}, {value_expr})", js_string(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_and_text_escape() {
        let mut m = Markup::new();
        m.open("option").attr("value", r#"a"b<c>"#).end_open();
        m.text("x & <y>").close("option");
        assert_eq!(
            m.as_str(),
            r#"<option value="a&quot;b&lt;c&gt;">x &amp; &lt;y&gt;</option>"#
        );

        let mut m = Markup::new();
        m.open("b").attr("title", "it's").end_open();
        m.text("don't").close("b");
        assert_eq!(m.as_str(), r#"<b title="it&#39;s">don&#39;t</b>"#);
    }

    #[test]
    fn raw_is_verbatim() {
        let mut m = Markup::new();
        m.raw("<br>");
        assert_eq!(m.finish(), "<br>");
    }

    #[test]
    fn attr_opt_skips_empty() {
        let mut m = Markup::new();
        m.open("input").attr_opt("placeholder", "").end_open();
        assert_eq!(m.as_str(), "<input>");
    }

    #[test]
    fn bool_attr_has_no_value() {
        let mut m = Markup::new();
        m.open("select").attr("id", "d").bool_attr("disabled").end_open();
        assert_eq!(m.as_str(), r#"<select id="d" disabled>"#);
    }

    #[test]
    fn js_string_escapes_quotes_and_newlines() {
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string("a\\b\nc"), r"'a\\b\nc'");
    }

    #[test]
    fn bridge_call_shape() {
        assert_eq!(bridge_call("button_0", "'click'"), "bridge.handle_event('button_0', 'click')");
        assert_eq!(bridge_call("slider_1", "this.value"), "bridge.handle_event('slider_1', this.value)");
    }

    #[test]
    fn escaped_script_survives_attribute_context() {
        // A quote-breaking label never leaves the onclick attribute.
        let mut m = Markup::new();
        m.open("button").attr("onclick", &bridge_call("x\"); alert(1); //", "'click'")).end_open();
        assert!(!m.as_str().contains("\");"));
    }
}
