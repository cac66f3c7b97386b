//! liteui studio: a demo window served over stdio.
//!
//! The compiled document goes to stdout (or `--out`); interactions come back
//! on stdin as JSON lines, e.g. `{"id": "button_0", "value": "click"}`.
//! Logs go to stderr.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use liteui_engine::host::StreamHost;
use liteui_engine::logging::{init_logging, LoggingConfig};
use liteui_ui::prelude::*;

// ── CLI ───────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Serve a demo liteui document over stdio")]
struct Cli {
    /// Write the document to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON file with theme token overrides.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Log filter in env_logger syntax (falls back to RUST_LOG, then "info").
    #[arg(long)]
    log: Option<String>,

    /// Print the document and exit without reading events.
    #[arg(long)]
    compile_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    let theme = match &cli.theme {
        Some(path) => load_theme(path)?,
        None => Theme::default(),
    };
    let app = build(theme);

    if cli.compile_only {
        return emit(&app.document(), cli.out.as_deref());
    }

    let stdin = io::stdin().lock();
    let delivered = match &cli.out {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            app.run(StreamHost::new(stdin, file))?
        }
        None => app.run(StreamHost::new(stdin, io::stdout().lock()))?,
    };
    log::info!("studio exiting after {delivered} event(s)");
    Ok(())
}

fn load_theme(path: &Path) -> Result<Theme> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme {}", path.display()))?;
    let config: ThemeConfig = serde_json::from_str(&src)
        .with_context(|| format!("failed to parse theme {}", path.display()))?;
    Theme::from_config(&config).with_context(|| format!("bad theme {}", path.display()))
}

fn emit(document: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => fs::write(path, document)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{document}");
            Ok(())
        }
    }
}

// ── Demo UI ───────────────────────────────────────────────────────────────

fn build(theme: Theme) -> Application {
    let mut app = Application::new()
        .title("liteui studio")
        .size(800.0, 600.0)
        .theme(theme);
    let quit = app.quit_handle();
    let ui = app.model_mut();

    let controls = ui.create_group("Controls");
    let settings = ui.create_group("Settings");
    let controls = Some(controls.as_str());
    let settings = Some(settings.as_str());

    ui.add_button("Say hello", |_| log::info!("hello from the document"), controls);

    let volume = ui.add_slider(0.0, 100.0, 50.0, controls);
    ui.on_event(&volume, |v| match v.parse::<f64>() {
        Ok(level) => log::info!("volume set to {level}"),
        Err(_) => log::warn!("slider sent a non-numeric value {v:?}"),
    });

    let name = ui.add_textbox("Your name...", controls);
    ui.on_event(&name, |v| log::info!("name is now {v:?}"));

    let mode = ui.add_dropdown(["Light", "Dark", "System"], settings);
    ui.on_event(&mode, |v| log::info!("mode: {v}"));

    ui.add_button("Quit", move |_| quit.request(), settings);

    ui.on_tab_switch(|tab| log::info!("switched to tab '{tab}'"));

    log::debug!("demo model: {:?}", app.model());
    app
}
