use anyhow::{Context, Result};

use crate::core::{App, AppControl};
use crate::host::HostSurface;

/// Window configuration handed to the host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub title: String,
    /// Logical width in pixels.
    pub width: f64,
    /// Logical height in pixels.
    pub height: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "liteui".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Compile the app's document once, show it, then pump events until the
    /// host closes or the app returns [`AppControl::Exit`].
    ///
    /// Returns the number of events delivered.
    pub fn run<H, A>(config: RuntimeConfig, mut host: H, mut app: A) -> Result<usize>
    where
        H: HostSurface,
        A: App,
    {
        let document = app.document();
        host.open(&config, &document)
            .with_context(|| format!("host surface failed to open '{}'", config.title))?;

        let mut delivered = 0;
        let outcome = loop {
            let event = match host.next_event() {
                Ok(Some(event)) => event,
                Ok(None) => break Ok(()),
                Err(e) => break Err(e.context("host surface failed while waiting for events")),
            };
            delivered += 1;
            if app.on_event(&event) == AppControl::Exit {
                log::debug!("app requested exit after '{}'", event.id);
                break Ok(());
            }
        };

        app.on_close();
        let closed = host.close().context("host surface failed to close");
        outcome?;
        closed?;

        log::debug!("runtime finished, {delivered} event(s) delivered");
        Ok(delivered)
    }
}
