//! Application configuration loaded from an optional TOML file.
//!
//! Every section may be omitted; missing values fall back to the built-in
//! averages. The file is located by priority:
//! 1. Explicit path (the `--config` flag)
//! 2. `STEUER_TOOLS_CONFIG` environment variable
//! 3. `steuer-tools.toml` in the working directory, if present
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use steuer_core::{DefaultsError, HoldingDefaults, ManagingDirectorDefaults};
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "STEUER_TOOLS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "steuer-tools.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {section} defaults: {source}")]
    Invalid {
        section: &'static str,
        #[source]
        source: DefaultsError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"debug"` or `"info,steuer_ui=trace"`.
    pub level: Option<String>,
    /// Log file to append to.
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub holding: HoldingDefaults,
    pub managing_director: ManagingDirectorDefaults,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolves and loads the configuration.
    ///
    /// An explicitly requested file (flag or environment variable) must
    /// exist; the working-directory file is optional.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::load_from(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&env_path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }

        tracing::debug!("no config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Loads and validates the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Checks both default value sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.holding
            .validate()
            .map_err(|source| ConfigError::Invalid {
                section: "holding",
                source,
            })?;
        self.managing_director
            .validate()
            .map_err(|source| ConfigError::Invalid {
                section: "managing_director",
                source,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.logging.stdout);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [holding]
            dividend = 250000
            trade_tax_exempt = false

            [managing_director]
            personal_tax_rate = 0.42
            "#,
        )
        .unwrap();

        assert_eq!(config.holding.dividend, dec!(250000));
        assert!(!config.holding.trade_tax_exempt);
        assert_eq!(config.holding.corporate_tax_rate, dec!(0.15));
        assert_eq!(config.managing_director.personal_tax_rate, dec!(0.42));
        assert_eq!(config.managing_director.gross_salary, dec!(180000));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn unknown_value_type_is_a_parse_error() {
        let result = AppConfig::from_toml("[window]\nwidth = \"wide\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_rate() {
        let config = AppConfig::from_toml("[managing_director]\nchurch_tax_rate = 9\n").unwrap();

        let error = config.validate().unwrap_err();

        assert!(matches!(
            error,
            ConfigError::Invalid {
                section: "managing_director",
                ..
            }
        ));
    }
}
