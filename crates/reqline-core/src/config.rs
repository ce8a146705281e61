//! Configuration for the reqline console.
//!
//! Configuration is stored in TOML format and supports environment variable
//! overrides.
//!
//! ## Resolution order
//!
//! 1. **Defaults**: color `auto`, session address `http://localhost/`
//! 2. **Config file**: `$REQLINE_CONFIG` if set, otherwise `config.toml` in the
//!    platform config directory (see [`Config::path`])
//! 3. **Environment variables**: `REQLINE_COLOR`, `REQLINE_ADDRESS`
//!
//! ## Example
//!
//! ```rust
//! use reqline_core::{ColorChoice, Config};
//!
//! let config: Config = toml::from_str(
//!     r#"
//!     [display]
//!     color = "never"
//!     "#,
//! )?;
//! assert_eq!(config.display.color, ColorChoice::Never);
//! assert_eq!(config.session.address, "http://localhost/");
//! # Ok::<(), toml::de::Error>(())
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "REQLINE_CONFIG";
/// Environment variable overriding `display.color`.
pub const COLOR_ENV: &str = "REQLINE_COLOR";
/// Environment variable overriding `session.address`.
pub const ADDRESS_ENV: &str = "REQLINE_ADDRESS";

/// Top-level configuration.
///
/// ## Example Configuration File
///
/// ```toml
/// [display]
/// color = "auto"
///
/// [session]
/// address = "http://localhost/"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub display: DisplayConfig,
    /// Settings for new sessions
    pub session: SessionConfig,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// When to emit ANSI colors.
    pub color: ColorChoice,
}

/// Settings for new sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Address of the first request when none is given on the command line.
    pub address: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            address: "http://localhost/".to_string(),
        }
    }
}

/// When to color output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when writing to a terminal that wants it.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl FromStr for ColorChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(Error::Config(format!(
                "invalid color choice '{other}' (expected auto, always or never)"
            ))),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        })
    }
}

impl Config {
    /// Load configuration from the default location, then apply environment
    /// overrides.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file cannot be read or parsed, or
    /// when an override has an invalid value.
    pub fn load() -> Result<Self> {
        let config = match Self::path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the file exists but cannot be read or
    /// parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content).map_err(|e| Error::Config(format!("Failed to write config: {e}")))
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an invalid color choice.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(color) = lookup(COLOR_ENV).filter(|v| !v.trim().is_empty()) {
            self.display.color = color.parse()?;
        }
        if let Some(address) = lookup(ADDRESS_ENV).filter(|v| !v.trim().is_empty()) {
            self.session.address = address;
        }
        Ok(self)
    }

    /// Where the configuration file is read from.
    ///
    /// `$REQLINE_CONFIG` when set, otherwise `config.toml` in the platform
    /// config directory:
    /// - Linux: `~/.config/reqline/config.toml`
    /// - macOS: `~/Library/Application Support/dev.reqline.reqline/config.toml`
    /// - Windows: `%APPDATA%\reqline\reqline\config\config.toml`
    ///
    /// `None` when neither is available.
    pub fn path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(explicit));
        }
        directories::ProjectDirs::from("dev", "reqline", "reqline")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
