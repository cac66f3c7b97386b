use std::borrow::Borrow;
use std::fmt;

use crate::markup::Markup;
use crate::widgets::{button::Button, dropdown::Dropdown, slider::Slider, textbox::TextBox};

// ── Widget trait ──────────────────────────────────────────────────────────

/// The contract every element record implements.
///
/// A widget only knows how to write its own control; the compiler owns the
/// wrapper block around it and the tab panel around that.
pub trait Widget {
    fn kind(&self) -> ElementKind;

    /// Write this control's markup. `id` is the element identity the control
    /// must report back through the bridge.
    fn render(&self, id: &ElementId, markup: &mut Markup);
}

// ── ElementKind ───────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Button,
    Slider,
    TextBox,
    Dropdown,
}

impl ElementKind {
    /// Prefix used in element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Button   => "button",
            ElementKind::Slider   => "slider",
            ElementKind::TextBox  => "textbox",
            ElementKind::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ElementId ─────────────────────────────────────────────────────────────

/// Stable element identity: `"{kind}_{index}"`, where `index` is the
/// element's position in creation order across all kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub(crate) fn new(kind: ElementKind, index: usize) -> Self {
        Self(format!("{kind}_{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The creation index encoded in the id, if it has one.
    pub fn index(&self) -> Option<usize> {
        self.0.rsplit_once('_').and_then(|(_, n)| n.parse().ok())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets id-keyed maps be queried with the `&str` the bridge delivers.
impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ── Control ───────────────────────────────────────────────────────────────

/// The tagged variant over every element record.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Button(Button),
    Slider(Slider),
    TextBox(TextBox),
    Dropdown(Dropdown),
}

impl Widget for Control {
    fn kind(&self) -> ElementKind {
        match self {
            Control::Button(w)   => w.kind(),
            Control::Slider(w)   => w.kind(),
            Control::TextBox(w)  => w.kind(),
            Control::Dropdown(w) => w.kind(),
        }
    }

    fn render(&self, id: &ElementId, markup: &mut Markup) {
        match self {
            Control::Button(w)   => w.render(id, markup),
            Control::Slider(w)   => w.render(id, markup),
            Control::TextBox(w)  => w.render(id, markup),
            Control::Dropdown(w) => w.render(id, markup),
        }
    }
}

impl From<Button> for Control { fn from(w: Button) -> Self { Control::Button(w) } }
impl From<Slider> for Control { fn from(w: Slider) -> Self { Control::Slider(w) } }
impl From<TextBox> for Control { fn from(w: TextBox) -> Self { Control::TextBox(w) } }
impl From<Dropdown> for Control { fn from(w: Dropdown) -> Self { Control::Dropdown(w) } }

// ── Element ───────────────────────────────────────────────────────────────

/// An immutable element record: identity plus control.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: ElementId,
    control: Control,
}

impl Element {
    pub(crate) fn new(index: usize, control: Control) -> Self {
        Self { id: ElementId::new(control.kind(), index), control }
    }

    #[inline]
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.control.kind()
    }

    #[inline]
    pub fn control(&self) -> &Control {
        &self.control
    }

    #[inline]
    pub fn render(&self, markup: &mut Markup) {
        self.control.render(&self.id, markup)
    }
}
