use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data: DataSettings,
    pub dashboard: DashboardSettings,
    pub logging: LoggingSettings,
}

/// Where the release dataset lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Path to the delimited source file.
    pub path: PathBuf,
}

/// Presentation knobs that do not change any computed value.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    /// Rows in each of the top and bottom revenue tables.
    pub top_n: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, e.g. "info" or "dataset=debug,info".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "data.path must not be empty".to_string(),
            ));
        }
        if self.dashboard.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
