use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Portfolio;

/// Errors that can occur when loading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Config file '{path}' already exists (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Portfolio {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/folio/portfolio.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("portfolio.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns the built-in portfolio.
    /// - Otherwise parses and validates it.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using built-in portfolio");
            return Ok(Portfolio::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let portfolio: Portfolio =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        portfolio.validate()?;
        tracing::info!(
            path = %path.display(),
            projects = portfolio.projects.len(),
            "loaded portfolio config"
        );
        Ok(portfolio)
    }

    /// Loads from `path` when given, otherwise from the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Validates the reveal settings.
    ///
    /// Content is never validated: empty lists and strings render as
    /// fewer elements.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal.margin_px > 0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "reveal.margin_px must be zero or negative, got {}",
                    self.reveal.margin_px
                ),
            });
        }

        if self.reveal.duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "reveal.duration_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Writes this portfolio as TOML, creating parent directories.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn save_to(&self, path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
