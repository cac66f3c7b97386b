use std::sync::Once;

/// How the studio and embedders set up the `env_logger` backend.
///
/// `env_filter` takes directives such as `"warn"` or
/// `"liteui_ui::model=trace"`. Left unset, `RUST_LOG` is consulted, and
/// without that everything at info and above is shown.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// The directives in effect: the explicit filter, else `RUST_LOG`.
    fn directives(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
    }
}

static INIT: Once = Once::new();

/// Install the stderr logger. Only the first call in a process has any
/// effect.
///
/// stdout stays free for the document when the studio streams to a host.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives() {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(log::LevelFilter::Info),
        };
        builder
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr);

        // A logger installed by a test harness wins silently.
        if builder.try_init().is_ok() {
            log::debug!("logger ready");
        }
    });
}
