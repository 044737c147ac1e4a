//! # Configuration
//!
//! Configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `NOTES_ENV`, `NOTES_LOG_LEVEL`, `NOTES_OUTPUT`.
//! 2. **Config file**: the `--config` path, or `notes.toml` in the OS config
//!    directory (via the `directories` crate). A missing default file is skipped.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `environment` | `development` | `development` or `production` |
//! | `log_level` | `info` | `trace`, `debug`, `info`, `warn`, `error` or `off` |
//! | `output` | `table` | How listings are printed: `table` or `json` |

use crate::error::{NotesError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "notes.toml";

/// Configuration for the notes manager, stored in `notes.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Deployment environment label: "development" or "production".
    #[config(default = "development", env = "NOTES_ENV")]
    pub environment: String,

    /// Log verbosity: "trace", "debug", "info", "warn", "error" or "off".
    #[config(default = "info", env = "NOTES_LOG_LEVEL")]
    pub log_level: String,

    /// Listing format: "table" or "json".
    #[config(default = "table", env = "NOTES_OUTPUT")]
    pub output: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development.to_string(),
            log_level: "info".to_string(),
            output: OutputFormat::Table.to_string(),
        }
    }
}

impl NotesConfig {
    /// Loads configuration from the environment and a config file.
    ///
    /// An explicitly given file must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) if !path.exists() => {
                return Err(NotesError::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        let mut builder = Self::builder().env();
        if let Some(file) = file {
            builder = builder.file(file);
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every string setting holds a known value.
    pub fn validate(&self) -> Result<()> {
        self.environment()?;
        self.output_format()?;
        Ok(())
    }

    pub fn environment(&self) -> Result<Environment> {
        self.environment.parse()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.parse()
    }

    /// A commented TOML template listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

/// `notes.toml` inside the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "notes-manager", "notes")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(NotesError::InvalidConfig(format!(
                "unknown environment `{}` (expected development or production)",
                other
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(NotesError::InvalidConfig(format!(
                "unknown output format `{}` (expected table or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = NotesConfig::default();
        assert_eq!(config.environment().unwrap(), Environment::Development);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Table);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "environment = \"production\"\noutput = \"json\"\n").unwrap();

        let config = NotesConfig::load(Some(&path)).unwrap();
        assert_eq!(config.environment().unwrap(), Environment::Production);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_load_rejects_unknown_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "output = \"yaml\"\n").unwrap();

        assert!(matches!(
            NotesConfig::load(Some(&path)),
            Err(NotesError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            NotesConfig::load(Some(&path)),
            Err(NotesError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            " Prod ".parse::<Environment>().unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_template_mentions_every_key() {
        let template = NotesConfig::template();
        for key in ["environment", "log_level", "output"] {
            assert!(template.contains(key), "missing {key} in template");
        }
    }
}
