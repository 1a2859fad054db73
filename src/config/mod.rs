//! Configuration management for navsh
//!
//! This module handles:
//! - TOML configuration file loading and saving
//! - Default value management
//! - Session, display, history and logging settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// History settings
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory the shell starts in
    ///
    /// When unset, the shell starts in the process working directory.
    #[serde(default)]
    pub start_dir: Option<String>,
}

/// Display-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format for command results
    #[serde(default)]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Show execution timing after each command
    #[serde(default)]
    pub show_timing: bool,
}

/// History-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of entries kept in history
    #[serde(default = "default_history_max_size")]
    pub max_size: usize,

    /// History file path
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Persist history across sessions
    #[serde(default = "default_history_persist")]
    pub persist: bool,
}

/// Logging-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default)]
    pub level: LogLevel,

    /// Include timestamps in log output
    #[serde(default)]
    pub timestamps: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Column-style listing output
    Plain,

    /// Compact JSON output
    Json,

    /// Pretty-printed JSON output
    JsonPretty,
}

/// Log level options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/* ========================= Default values ========================= */

fn default_color_output() -> bool {
    true
}

fn default_history_max_size() -> usize {
    1000
}

fn default_history_persist() -> bool {
    true
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".navsh_history"))
        .unwrap_or_else(|| PathBuf::from(".navsh_history"))
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color_output: default_color_output(),
            show_timing: false,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_history_max_size(),
            file_path: default_history_file(),
            persist: default_history_persist(),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Plain
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

impl OutputFormat {
    /// Check whether this format renders JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonPretty)
    }

    /// Check whether this format pretty-prints its output.
    pub fn is_pretty(&self) -> bool {
        matches!(self, OutputFormat::JsonPretty)
    }
}

impl LogLevel {
    /// Convert to a tracing level filter.
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the default location.
    ///
    /// An explicit path must exist; the default location falls back to
    /// built-in defaults when no file is present.
    ///
    /// # Arguments
    /// * `path` - Optional config file path from the command line
    ///
    /// # Returns
    /// * `Result<Self>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = Self::default_config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Config file path
    ///
    /// # Returns
    /// * `Result<Self>` - Parsed configuration or error
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories.
    ///
    /// # Arguments
    /// * `path` - Destination file path
    ///
    /// # Returns
    /// * `Result<()>` - Success or error
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        Ok(content)
    }

    /// Validate configuration values.
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error describing the first bad field
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if let Some(dir) = &self.session.start_dir {
            if dir.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "session.start_dir".to_string(),
                    value: String::new(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Default configuration file path: `~/.navsh/config.toml`.
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".navsh").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".navsh/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.format, OutputFormat::Plain);
        assert!(config.display.color_output);
        assert!(!config.display.show_timing);
        assert_eq!(config.history.max_size, 1000);
        assert!(config.history.persist);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.session.start_dir.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [display]
            format = "json"
            color_output = false
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(!config.display.color_output);
        // Unspecified sections keep their defaults
        assert_eq!(config.history.max_size, 1000);
    }

    #[test]
    fn test_output_format_names() {
        let toml_str = r#"
            [display]
            format = "jsonpretty"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.format, OutputFormat::JsonPretty);
        assert!(config.display.format.is_json());
        assert!(config.display.format.is_pretty());
        assert!(!OutputFormat::Json.is_pretty());
        assert!(!OutputFormat::Plain.is_json());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.session.start_dir = Some("/var/log".to_string());
        config.display.format = OutputFormat::JsonPretty;
        config.history.max_size = 42;

        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.session.start_dir.as_deref(), Some("/var/log"));
        assert_eq!(parsed.display.format, OutputFormat::JsonPretty);
        assert_eq!(parsed.history.max_size, 42);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.show_timing = true;
        config.save(&path).unwrap();

        let reloaded = Config::from_file(&path).unwrap();
        assert!(reloaded.display.show_timing);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/navsh.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_history() {
        let mut config = Config::default();
        config.history.max_size = 0;
        assert!(config.validate().is_err());
        config.history.max_size = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
