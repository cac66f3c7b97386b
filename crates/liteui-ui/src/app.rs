use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;

use liteui_engine::core::{App as EngineApp, AppControl};
use liteui_engine::host::{BridgeEvent, HostSurface};
use liteui_engine::window::{Runtime, RuntimeConfig};

use crate::compiler::compile;
use crate::model::UiModel;
use crate::theme::Theme;

// ── QuitHandle ────────────────────────────────────────────────────────────

/// Shared flag a handler can set to end the session.
///
/// The runtime checks it after each dispatched event.
///
/// ```rust,ignore
/// let quit = app.quit_handle();
/// app.model_mut().add_button("Quit", move |_| quit.request(), Some("Main"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuitHandle(Rc<Cell<bool>>);

impl QuitHandle {
    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level builder: window settings plus the UI model for one session.
///
/// Configure the window, declare the UI through [`model_mut`], then hand a
/// host surface to [`run`].
///
/// ```rust,ignore
/// let mut app = Application::new()
///     .title("My App")
///     .size(800.0, 600.0)
///     .theme(Theme::default().primary(Color::rgb(0xe6, 0x39, 0x46)));
///
/// let ui = app.model_mut();
/// let main = ui.create_group("Main");
/// ui.add_button("Hello", |_| log::info!("hello"), Some(main.as_str()));
///
/// app.run(StreamHost::new(stdin().lock(), stdout()))?;
/// ```
///
/// [`model_mut`]: Application::model_mut
/// [`run`]: Application::run
pub struct Application {
    config: RuntimeConfig,
    model:  UiModel,
    quit:   QuitHandle,
}

impl Application {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            model:  UiModel::new(),
            quit:   QuitHandle::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.config.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.config.width  = width;
        self.config.height = height;
        self
    }

    /// Replace the color tokens used by the stylesheet.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.model.set_theme(theme);
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn model(&self) -> &UiModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut UiModel {
        &mut self.model
    }

    pub fn quit_handle(&self) -> QuitHandle {
        self.quit.clone()
    }

    /// Compile the current model without opening anything.
    pub fn document(&self) -> String {
        compile(&self.model)
    }

    /// Show the UI on `host` and dispatch its events until it closes or a
    /// handler requests quit. Returns the number of events delivered.
    pub fn run<H: HostSurface>(self, host: H) -> Result<usize> {
        let state = UiAppState { model: self.model, quit: self.quit };
        Runtime::run(self.config, host, state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `liteui_engine::core::App`.
struct UiAppState {
    model: UiModel,
    quit:  QuitHandle,
}

impl EngineApp for UiAppState {
    fn document(&mut self) -> String {
        compile(&self.model)
    }

    fn on_event(&mut self, event: &BridgeEvent) -> AppControl {
        if !self.model.dispatch(&event.id, &event.value).is_consumed() {
            log::debug!("event for '{}' dropped", event.id);
        }
        if self.quit.is_requested() {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_close(&mut self) {
        log::debug!("session closed, active group {:?}", self.model.active_group());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;

    use liteui_engine::host::StreamHost;

    fn events(lines: &[(&str, &str)]) -> Cursor<Vec<u8>> {
        let body: String = lines
            .iter()
            .map(|(id, value)| format!("{}\n", serde_json::json!({ "id": id, "value": value })))
            .collect();
        Cursor::new(body.into_bytes())
    }

    #[test]
    fn builder_sets_window_config() {
        let app = Application::new().title("Demo").size(640.0, 480.0);
        assert_eq!(app.config().title, "Demo");
        assert_eq!(app.config().width, 640.0);
        assert_eq!(app.config().height, 480.0);
    }

    #[test]
    fn theme_is_applied_to_the_document() {
        let app = Application::new().theme(Theme::default().accent(liteui_engine::paint::Color::rgb(1, 2, 3)));
        assert!(app.document().contains("#010203"));
    }

    #[test]
    fn run_writes_document_and_dispatches_events() {
        let clicks = Rc::new(RefCell::new(0));
        let mut app = Application::new();
        let ui = app.model_mut();
        ui.create_group("Main");
        let counter = Rc::clone(&clicks);
        ui.add_button("Go", move |_| *counter.borrow_mut() += 1, Some("Main"));
        let expected = app.document();

        let mut out = Vec::new();
        let input = events(&[("button_0", "click"), ("nobody", "x"), ("button_0", "click")]);
        let n = app.run(StreamHost::new(input, &mut out)).unwrap();

        assert_eq!(n, 3);
        assert_eq!(*clicks.borrow(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn quit_handle_stops_the_session() {
        let mut app = Application::new();
        let quit = app.quit_handle();
        let ui = app.model_mut();
        ui.create_group("Main");
        ui.add_button("Quit", move |_| quit.request(), Some("Main"));

        let input = events(&[("tab_switch", "Main"), ("button_0", "click"), ("button_0", "click")]);
        let n = app.run(StreamHost::new(input, std::io::sink())).unwrap();
        assert_eq!(n, 2);
    }
}
