use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{DashboardSettings, DataSettings, LoggingSettings, Settings};
pub use telemetry::{init_tracing, TelemetryGuard};

/// Looked up in the working directory when no explicit file is given.
pub const DEFAULT_CONFIG_FILE: &str = "marquee";

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file (the
/// explicit `path`, which must exist, or an optional `marquee.toml`), then
/// `MARQUEE__SECTION__KEY` environment variables. The result is validated
/// before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("data.path", "data/disney_movies.csv")?
        .set_default("dashboard.top_n", 20)?
        .set_default("logging.level", "info")?;

    builder = match path {
        Some(path) => builder.add_source(config::File::from(path).required(true)),
        None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
    };

    let settings = builder
        .add_source(
            config::Environment::with_prefix("MARQUEE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()?;

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn file_values_override_defaults() {
        let file = toml_file(
            r#"
            [data]
            path = "fixtures/movies.csv"

            [dashboard]
            top_n = 5
            "#,
        );
        let settings = load_config(Some(file.path())).unwrap();

        assert_eq!(settings.data.path, Path::new("fixtures/movies.csv"));
        assert_eq!(settings.dashboard.top_n, 5);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.directory, None);
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let file = toml_file("[dashboard]\ntop_n = 0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/no/such/marquee.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
