use crate::error::ConfigError;
use crate::settings::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_NAME: &str = "marquee.log";

/// Keeps the non-blocking file writer alive. Dropping it flushes and stops
/// file logging, so hold it for the life of the process.
pub struct TelemetryGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// - **stderr**: compact, filtered by `RUST_LOG` if set, else by `settings.level`.
/// - **file**: only when `settings.directory` is set; daily rotation,
///   non-blocking, no ANSI colours, filtered by `settings.level`.
pub fn init_tracing(settings: &LoggingSettings) -> Result<TelemetryGuard, ConfigError> {
    let stderr_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(stderr_filter);

    let (file_layer, file_guard) = match &settings.directory {
        Some(directory) => {
            let file_filter = EnvFilter::try_new(&settings.level)
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    tracing::debug!(level = %settings.level, "Tracing initialised.");

    Ok(TelemetryGuard {
        _file_guard: file_guard,
    })
}
