use std::io::Write;
use std::sync::Once;

/// Environment variable read by [`LoggingConfig::from_env`].
pub const FILTER_ENV: &str = "FIGURA_LOG";

/// Logger configuration.
///
/// Group lifecycle (create, add, remove, destroy) and delegation (draw,
/// rotate) are emitted at `trace` level under the `figura_graph` target, so
/// `"figura_graph=trace"` shows the whole tree walk.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives. `None` falls back to `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: log::LevelFilter,
    /// One `[LEVEL] message` line per record, without timestamp or target.
    pub compact: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            compact: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Filter taken from `FIGURA_LOG` when set and non-empty.
    pub fn from_env() -> Self {
        let env_filter = std::env::var(FILTER_ENV).ok().filter(|f| !f.trim().is_empty());
        Self {
            env_filter,
            ..Self::default()
        }
    }

    /// Compact output with every graph trace line enabled.
    pub fn trace_graph() -> Self {
        Self {
            env_filter: Some("info,figura_graph=trace".to_string()),
            compact: true,
            ..Self::default()
        }
    }

    /// Picks the filter to install. `rust_log` is the value of `RUST_LOG`.
    fn resolve(&self, rust_log: Option<String>) -> Filter {
        match (&self.env_filter, rust_log) {
            (Some(explicit), _) => Filter::Directives(explicit.clone()),
            (None, Some(env)) if !env.trim().is_empty() => Filter::Directives(env),
            _ => Filter::Level(self.default_level),
        }
    }
}

#[derive(Debug, PartialEq)]
enum Filter {
    Directives(String),
    Level(log::LevelFilter),
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Only the first call has an
/// effect; a logger installed by someone else is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve(std::env::var("RUST_LOG").ok()) {
            Filter::Directives(filter) => builder.parse_filters(&filter),
            Filter::Level(level) => builder.filter_level(level),
        };

        if config.compact {
            builder.format(|buf, record| writeln!(buf, " [{}] {}", record.level(), record.args()));
        }
        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            log::warn!("global logger already set; figura logging config ignored");
            return;
        }

        log::debug!("logging initialized");
    });
}
