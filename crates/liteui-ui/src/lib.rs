//! liteui: declare a tabbed desktop UI in Rust, compile it to one markup
//! document, and route the document's interactions back to Rust handlers.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use liteui_ui::prelude::*;
//!
//! let mut ui = UiModel::new();
//! let main = ui.create_group("Main");
//! ui.add_button("Save", |_| println!("saved"), Some(main.as_str()));
//! let volume = ui.add_slider(0.0, 100.0, 50.0, Some(main.as_str()));
//! ui.on_event(&volume, |v| println!("volume {}", v.parse::<f64>().unwrap_or_default()));
//!
//! let html = compile(&ui);
//! // Show `html` on a host surface; relay its `bridge.handle_event(id, value)`
//! // calls into `ui.dispatch(id, value)`.
//! ```
//!
//! [`Application`] wraps the same model with window settings and drives a
//! [`HostSurface`](liteui_engine::host::HostSurface) through the engine runtime.

pub mod app;
pub mod compiler;
pub mod event;
pub mod markup;
pub mod model;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything an embedding program needs.
pub mod prelude {
    pub use crate::app::{Application, QuitHandle};
    pub use crate::compiler::compile;
    pub use crate::event::{EventResult, Handler};
    pub use crate::model::{GroupRef, UiModel};
    pub use crate::theme::{Theme, ThemeConfig, ThemeError};
    pub use crate::widget::{Control, Element, ElementId, ElementKind, Widget};
    pub use crate::widgets::{
        button::Button,
        dropdown::Dropdown,
        slider::Slider,
        textbox::TextBox,
    };

    pub use liteui_engine::host::{BridgeEvent, HostSurface, StreamHost};
    pub use liteui_engine::paint::Color;
}
