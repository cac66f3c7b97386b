use std::collections::HashMap;
use std::fmt;

use liteui_engine::host::TAB_SWITCH;

use crate::event::{EventResult, Handler};
use crate::theme::Theme;
use crate::widget::{Control, Element, ElementId};
use crate::widgets::{button::Button, dropdown::Dropdown, slider::Slider, textbox::TextBox};

// ── Group ─────────────────────────────────────────────────────────────────

/// A named tab. Members are indices into the model's element registry, so a
/// group refers to the registered elements rather than copies of them.
#[derive(Debug, Clone)]
struct Group {
    name: String,
    members: Vec<usize>,
}

/// Borrowed view of one group, yielded by [`UiModel::groups`].
#[derive(Clone, Copy)]
pub struct GroupRef<'m> {
    model: &'m UiModel,
    group: &'m Group,
}

impl<'m> GroupRef<'m> {
    pub fn name(self) -> &'m str {
        &self.group.name
    }

    /// Members in insertion order.
    pub fn elements(self) -> impl Iterator<Item = &'m Element> {
        let elements = &self.model.elements;
        self.group.members.iter().map(move |&i| &elements[i])
    }

    pub fn len(self) -> usize {
        self.group.members.len()
    }

    pub fn is_empty(self) -> bool {
        self.group.members.is_empty()
    }

    pub fn is_active(self) -> bool {
        self.model.active_group.as_deref() == Some(self.group.name.as_str())
    }
}

// ── UiModel ───────────────────────────────────────────────────────────────

/// Ordered element registry, tab partition and handler table for one window.
///
/// The model is permissive: unknown group names and unknown ids are ignored
/// rather than reported, and inputs such as inverted slider bounds are taken
/// as given.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiModel::new();
/// let main = ui.create_group("Main");
/// let ok = ui.add_button("OK", |_| println!("ok"), Some(main.as_str()));
/// let vol = ui.add_slider(0.0, 100.0, 50.0, Some(main.as_str()));
/// ui.on_event(&vol, |v| println!("volume {v}"));
///
/// ui.dispatch(ok.as_str(), "click");
/// let html = compile(&ui);
/// ```
pub struct UiModel {
    elements: Vec<Element>,
    /// Group index per element; `None` while unassigned.
    placement: Vec<Option<usize>>,
    groups: Vec<Group>,
    group_index: HashMap<String, usize>,
    active_group: Option<String>,
    handlers: HashMap<ElementId, Handler>,
    tab_handler: Option<Handler>,
    theme: Theme,
}

impl UiModel {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            elements: Vec::new(),
            placement: Vec::new(),
            groups: Vec::new(),
            group_index: HashMap::new(),
            active_group: None,
            handlers: HashMap::new(),
            tab_handler: None,
            theme,
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // ── Groups ────────────────────────────────────────────────────────────

    /// Create a group if it does not exist yet and return its name.
    ///
    /// The first group ever created becomes the active one.
    pub fn create_group(&mut self, name: impl Into<String>) -> String {
        let name = name.into();
        if !self.group_index.contains_key(&name) {
            self.group_index.insert(name.clone(), self.groups.len());
            self.groups.push(Group { name: name.clone(), members: Vec::new() });
            if self.active_group.is_none() {
                self.active_group = Some(name.clone());
            }
            log::debug!("created group '{name}'");
        }
        name
    }

    /// Make `name` the active group. Unknown names are ignored.
    pub fn set_active_group(&mut self, name: &str) {
        if self.group_index.contains_key(name) {
            self.active_group = Some(name.to_string());
        } else {
            log::debug!("set_active_group: no group '{name}'");
        }
    }

    /// Append the element `id` to group `name`.
    ///
    /// No-op when the group or the element does not exist, or when the
    /// element already belongs to a group (elements are never re-parented).
    pub fn add_element_to_group(&mut self, name: &str, id: &ElementId) {
        let Some(&group) = self.group_index.get(name) else {
            log::debug!("add_element_to_group: no group '{name}', '{id}' stays unassigned");
            return;
        };
        let Some(index) = self.position(id.as_str()) else {
            log::debug!("add_element_to_group: no element '{id}'");
            return;
        };
        if let Some(current) = self.placement[index] {
            log::debug!("'{id}' already belongs to '{}'", self.groups[current].name);
            return;
        }
        self.groups[group].members.push(index);
        self.placement[index] = Some(group);
    }

    // ── Builders ──────────────────────────────────────────────────────────

    /// Add a button; `on_click` receives `"click"` on every activation.
    pub fn add_button<F>(&mut self, text: impl Into<String>, on_click: F, group: Option<&str>) -> ElementId
    where
        F: FnMut(&str) + 'static,
    {
        let id = self.push(Button::new(text).into(), group);
        self.handlers.insert(id.clone(), Box::new(on_click));
        id
    }

    pub fn add_slider(&mut self, min: f64, max: f64, initial: f64, group: Option<&str>) -> ElementId {
        self.push(Slider::new(min, max, initial).into(), group)
    }

    pub fn add_textbox(&mut self, placeholder: impl Into<String>, group: Option<&str>) -> ElementId {
        self.push(TextBox::new(placeholder).into(), group)
    }

    pub fn add_dropdown<I, S>(&mut self, options: I, group: Option<&str>) -> ElementId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Dropdown::new(options).into(), group)
    }

    /// Register any control record directly.
    pub fn add(&mut self, control: impl Into<Control>, group: Option<&str>) -> ElementId {
        self.push(control.into(), group)
    }

    fn push(&mut self, control: Control, group: Option<&str>) -> ElementId {
        // One counter across all kinds: the index is the registry position.
        let element = Element::new(self.elements.len(), control);
        let id = element.id().clone();
        self.elements.push(element);
        self.placement.push(None);
        log::trace!("registered '{id}'");
        if let Some(name) = group {
            self.add_element_to_group(name, &id);
        }
        id
    }

    // ── Handlers ──────────────────────────────────────────────────────────

    /// Wire `handler` to an existing element, replacing any previous one.
    ///
    /// Returns `false` and registers nothing when `id` is unknown.
    pub fn on_event<F>(&mut self, id: &ElementId, handler: F) -> bool
    where
        F: FnMut(&str) + 'static,
    {
        if self.position(id.as_str()).is_none() {
            log::debug!("on_event: no element '{id}'");
            return false;
        }
        self.handlers.insert(id.clone(), Box::new(handler));
        true
    }

    /// Observe tab switches made in the document. The handler receives the
    /// group name; the model has already made it active.
    pub fn on_tab_switch<F>(&mut self, handler: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.tab_handler = Some(Box::new(handler));
    }

    /// Route one interaction reported by the host surface.
    ///
    /// `tab_switch` is reserved: a known group name becomes active and the
    /// tab handler runs. Any other id runs its handler with `value`. Unknown
    /// ids and unknown tab names are dropped without touching the model.
    pub fn dispatch(&mut self, id: &str, value: &str) -> EventResult {
        if id == TAB_SWITCH {
            return self.switch_tab(value);
        }
        match self.handlers.get_mut(id) {
            Some(handler) => {
                log::trace!("dispatch '{id}' = {value:?}");
                handler(value);
                EventResult::Consumed
            }
            None => {
                log::trace!("dispatch: nothing registered for '{id}'");
                EventResult::Ignored
            }
        }
    }

    fn switch_tab(&mut self, name: &str) -> EventResult {
        if !self.group_index.contains_key(name) {
            log::debug!("tab switch to unknown group '{name}' ignored");
            return EventResult::Ignored;
        }
        self.active_group = Some(name.to_string());
        if let Some(handler) = &mut self.tab_handler {
            handler(name);
        }
        EventResult::Consumed
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Every element ever created, in creation order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.position(id).map(|i| &self.elements[i])
    }

    /// Groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = GroupRef<'_>> + '_ {
        self.groups.iter().map(move |group| GroupRef { model: self, group })
    }

    pub fn group(&self, name: &str) -> Option<GroupRef<'_>> {
        let &i = self.group_index.get(name)?;
        Some(GroupRef { model: self, group: &self.groups[i] })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn has_handler(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Whether the element is shown in some group's panel.
    pub fn is_assigned(&self, id: &str) -> bool {
        self.position(id).is_some_and(|i| self.placement[i].is_some())
    }

    /// Registry index of `id`, verified against the stored element.
    fn position(&self, id: &str) -> Option<usize> {
        let (_, n) = id.rsplit_once('_')?;
        let index: usize = n.parse().ok()?;
        let element = self.elements.get(index)?;
        (element.id().as_str() == id).then_some(index)
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiModel")
            .field("elements", &self.elements.len())
            .field("groups", &self.groups.iter().map(|g| g.name.as_str()).collect::<Vec<_>>())
            .field("active_group", &self.active_group)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::widget::ElementKind;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |v: &str| sink.borrow_mut().push(v.to_string()))
    }

    // ── ids ───────────────────────────────────────────────────────────────

    #[test]
    fn ids_follow_one_global_counter() {
        let mut ui = UiModel::new();
        let a = ui.add_button("a", |_| {}, None);
        let b = ui.add_slider(0.0, 10.0, 5.0, None);
        let c = ui.add_button("c", |_| {}, None);
        let d = ui.add_textbox("t", None);
        let e = ui.add_dropdown(["x"], None);
        assert_eq!(a, "button_0");
        assert_eq!(b, "slider_1");
        assert_eq!(c, "button_2");
        assert_eq!(d, "textbox_3");
        assert_eq!(e, "dropdown_4");

        let indices: Vec<_> = ui.elements().iter().filter_map(|el| el.id().index()).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn element_lookup_verifies_full_id() {
        let mut ui = UiModel::new();
        let id = ui.add_textbox("t", None);
        assert_eq!(ui.element(id.as_str()).map(Element::kind), Some(ElementKind::TextBox));
        // Right index, wrong kind.
        assert!(ui.element("button_0").is_none());
        assert!(ui.element("textbox_9").is_none());
        assert!(ui.element("garbage").is_none());
    }

    #[test]
    fn add_takes_a_default_control_record() {
        let mut ui = UiModel::new();
        ui.create_group("main");
        ui.add_button("a", |_| {}, None);
        let id = ui.add(Slider::default(), Some("main"));
        assert_eq!(id, "slider_1");
        assert_eq!(ui.group("main").map(|g| g.len()), Some(1));
        match ui.element(id.as_str()).map(Element::control) {
            Some(Control::Slider(s)) => {
                assert_eq!((s.min, s.max, s.value), (0.0, 100.0, 50.0));
            }
            other => panic!("expected a slider, got {other:?}"),
        }
        // Records added this way carry no handler.
        assert!(!ui.has_handler(id.as_str()));
    }

    // ── groups ────────────────────────────────────────────────────────────

    #[test]
    fn create_group_is_idempotent() {
        let mut ui = UiModel::new();
        assert_eq!(ui.create_group("x"), "x");
        assert_eq!(ui.create_group("x"), "x");
        assert_eq!(ui.group_count(), 1);
    }

    #[test]
    fn first_group_becomes_active() {
        let mut ui = UiModel::new();
        assert_eq!(ui.active_group(), None);
        ui.create_group("A");
        ui.create_group("B");
        assert_eq!(ui.active_group(), Some("A"));
    }

    #[test]
    fn set_active_group_ignores_unknown_names() {
        let mut ui = UiModel::new();
        ui.create_group("A");
        ui.create_group("B");
        ui.set_active_group("nope");
        assert_eq!(ui.active_group(), Some("A"));
        ui.set_active_group("B");
        assert_eq!(ui.active_group(), Some("B"));
    }

    #[test]
    fn set_active_group_without_groups_stays_unset() {
        let mut ui = UiModel::new();
        ui.set_active_group("A");
        assert_eq!(ui.active_group(), None);
    }

    #[test]
    fn groups_keep_creation_order() {
        let mut ui = UiModel::new();
        for name in ["z", "a", "m"] {
            ui.create_group(name);
        }
        let names: Vec<_> = ui.groups().map(GroupRef::name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn element_in_nonexistent_group_stays_unassigned() {
        let mut ui = UiModel::new();
        let id = ui.add_slider(0.0, 100.0, 50.0, Some("settings"));
        assert_eq!(id, "slider_0");
        assert_eq!(ui.elements().len(), 1);
        assert!(!ui.is_assigned(id.as_str()));
        assert_eq!(ui.group_count(), 0);
    }

    #[test]
    fn group_members_follow_insertion_order() {
        let mut ui = UiModel::new();
        ui.create_group("g");
        let a = ui.add_textbox("a", Some("g"));
        let _loose = ui.add_textbox("loose", None);
        let b = ui.add_dropdown(["1"], Some("g"));
        let ids: Vec<_> = ui.group("g").unwrap().elements().map(|e| e.id().clone()).collect();
        assert_eq!(ids, [a, b]);
    }

    #[test]
    fn elements_are_never_reparented() {
        let mut ui = UiModel::new();
        ui.create_group("one");
        ui.create_group("two");
        let id = ui.add_button("b", |_| {}, Some("one"));
        ui.add_element_to_group("two", &id);
        ui.add_element_to_group("one", &id);
        assert_eq!(ui.group("one").unwrap().len(), 1);
        assert!(ui.group("two").unwrap().is_empty());
    }

    #[test]
    fn late_assignment_of_loose_element() {
        let mut ui = UiModel::new();
        let id = ui.add_textbox("t", None);
        ui.create_group("g");
        ui.add_element_to_group("g", &id);
        assert!(ui.is_assigned(id.as_str()));
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn button_click_runs_its_handler_once() {
        let mut ui = UiModel::new();
        let (log_a, on_a) = recorder();
        let (log_b, on_b) = recorder();
        let a = ui.add_button("a", on_a, None);
        ui.add_button("b", on_b, None);

        assert_eq!(ui.dispatch(a.as_str(), "click"), EventResult::Consumed);
        assert_eq!(*log_a.borrow(), ["click"]);
        assert!(log_b.borrow().is_empty());
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut ui = UiModel::new();
        ui.create_group("A");
        let (log, on) = recorder();
        ui.add_button("a", on, Some("A"));

        assert_eq!(ui.dispatch("button_99", "x"), EventResult::Ignored);
        assert!(log.borrow().is_empty());
        assert_eq!(ui.elements().len(), 1);
        assert_eq!(ui.active_group(), Some("A"));
    }

    #[test]
    fn slider_without_handler_is_ignored() {
        let mut ui = UiModel::new();
        let id = ui.add_slider(0.0, 1.0, 0.5, None);
        assert!(!ui.has_handler(id.as_str()));
        assert_eq!(ui.dispatch(id.as_str(), "0.7"), EventResult::Ignored);
    }

    #[test]
    fn on_event_wires_input_controls() {
        let mut ui = UiModel::new();
        let id = ui.add_slider(0.0, 100.0, 50.0, None);
        let (log, on) = recorder();
        assert!(ui.on_event(&id, on));
        ui.dispatch(id.as_str(), "73");
        assert_eq!(*log.borrow(), ["73"]);
    }

    #[test]
    fn on_event_rejects_unknown_id() {
        let mut ui = UiModel::new();
        let mut other = UiModel::new();
        let foreign = other.add_textbox("t", None);
        assert!(!ui.on_event(&foreign, |_| {}));
        assert!(!ui.has_handler(foreign.as_str()));
    }

    #[test]
    fn on_event_replaces_previous_handler() {
        let mut ui = UiModel::new();
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();
        let id = ui.add_button("b", on_first, None);
        ui.on_event(&id, on_second);
        ui.dispatch(id.as_str(), "click");
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), ["click"]);
    }

    // ── tab_switch ────────────────────────────────────────────────────────

    #[test]
    fn tab_switch_moves_active_group_and_notifies() {
        let mut ui = UiModel::new();
        ui.create_group("A");
        ui.create_group("B");
        let (log, on) = recorder();
        ui.on_tab_switch(on);

        assert_eq!(ui.dispatch(TAB_SWITCH, "B"), EventResult::Consumed);
        assert_eq!(ui.active_group(), Some("B"));
        assert_eq!(*log.borrow(), ["B"]);
    }

    #[test]
    fn tab_switch_to_unknown_group_changes_nothing() {
        let mut ui = UiModel::new();
        ui.create_group("A");
        let (log, on) = recorder();
        ui.on_tab_switch(on);

        assert_eq!(ui.dispatch(TAB_SWITCH, "ghost"), EventResult::Ignored);
        assert_eq!(ui.active_group(), Some("A"));
        assert!(log.borrow().is_empty());
    }
}
