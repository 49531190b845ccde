use crate::infrastructure::log_messages::configuration as log;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub identifier: IdentifierSettings,
    pub logging: LoggingSettings,
}

/// Default segments for identifiers minted by the CLI
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IdentifierSettings {
    pub country_code: Option<String>,
    pub party_id: Option<String>,
    pub type_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl Settings {
    /// Defaults, then `config/default`, `config/{ENVIRONMENT}`, `config/local`,
    /// then `OCPI_IDS__*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        debug!(%environment, "{}", log::LOADING_CONFIG);

        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("OCPI_IDS").separator("__"))
            .build()?;

        let settings = config.try_deserialize()?;
        debug!("{}", log::CONFIG_LOADED);
        Ok(settings)
    }

    /// Defaults overlaid with a single, required configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!(path = %path.as_ref().display(), "{}", log::LOADING_CONFIG);

        let config = Self::defaults()?
            .add_source(File::from(path.as_ref()).required(true))
            .build()?;

        config.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_defaults_leave_identifier_segments_unset() {
        let settings: Settings = Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, LogFormat::Compact);
        assert!(settings.identifier.country_code.is_none());
        assert!(settings.identifier.party_id.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[identifier]\ncountry_code = \"NL\"\nparty_id = \"ABC\"\n\n\
             [logging]\nformat = \"json\""
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.identifier.country_code.as_deref(), Some("NL"));
        assert_eq!(settings.identifier.party_id.as_deref(), Some("ABC"));
        assert_eq!(settings.identifier.type_id, None);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::from_file(dir.path().join("absent.toml")).is_err());
    }
}
