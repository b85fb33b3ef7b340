//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace level used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Parameters
///
/// * `config` - Console configuration holding `trace_level` and `log_file`
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// Events go to stderr unless `config.log_file` is set, in which case they are
/// appended to that file through a rotating [`FileWriter`]. If the log
/// directory cannot be created the subscriber falls back to stderr.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber.
///
/// # Example
///
/// ```rust
/// use storefront_console::observability::init_tracing;
/// use storefront_console::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    });

    let log_writer = config.log_file.as_ref().and_then(|path| {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("cannot create log directory {}: {e}", dir.display());
                return None;
            }
        }
        Some(FileWriter::new(path.clone()))
    });

    let registry = tracing_subscriber::registry().with(filter);

    let result = match log_writer {
        Some(writer) => registry
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(log_file = ?config.log_file, "tracing initialized");
    }
}
