//! Configuration file support
//!
//! Loads settings from ~/.codetint.toml (or %USERPROFILE%\.codetint.toml
//! on Windows).
//!
//! Example:
//! ```toml
//! marker-class = "token"
//! default-language = "rust"
//! debounce-ms = 100
//!
//! [colors]
//! comment = "bright-black"
//! keyword = "magenta"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::render::{Theme, DEFAULT_MARKER_CLASS};
use crate::syntax::{Color, TokenCategory};

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Class present on every token span
    pub marker_class: String,
    /// Language used when none is given or found
    pub default_language: String,
    /// Delay change watchers should wait to coalesce bursts
    pub debounce_ms: u64,
    /// Terminal preview colors per category
    pub colors: HashMap<TokenCategory, Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            default_language: "text".to_string(),
            debounce_ms: 100,
            colors: HashMap::new(),
        }
    }
}

/// On-disk layout; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawConfig {
    marker_class: Option<String>,
    default_language: Option<String>,
    debounce_ms: Option<u64>,
    colors: HashMap<String, String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".codetint.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".codetint.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file gives defaults; a malformed one is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(err),
        })?;
        let raw = Self::parse(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Config::default();
        config.apply(raw);
        Ok(config)
    }

    /// Parse config file contents
    fn parse(contents: &str) -> std::result::Result<RawConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Apply settings from parsed config
    fn apply(&mut self, raw: RawConfig) {
        if let Some(class) = raw.marker_class {
            if is_valid_class(&class) {
                self.marker_class = class;
            } else {
                warn!(class = %class, "ignoring invalid marker-class");
            }
        }

        if let Some(language) = raw.default_language {
            if !language.trim().is_empty() {
                self.default_language = language.trim().to_string();
            }
        }

        if let Some(ms) = raw.debounce_ms {
            self.debounce_ms = ms.clamp(10, 5000);
        }

        for (name, value) in raw.colors {
            match (TokenCategory::from_class_name(&name), Color::from_name(&value)) {
                (Some(category), Some(color)) => {
                    self.colors.insert(category, color);
                }
                _ => warn!(category = %name, color = %value, "ignoring color override"),
            }
        }
    }

    /// Debounce delay as a duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Terminal theme with color overrides applied
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        for (&category, &color) in &self.colors {
            theme.set_color(category, color);
        }
        theme
    }
}

/// A class token must be non-empty and free of whitespace and markup
fn is_valid_class(class: &str) -> bool {
    !class.is_empty()
        && !class
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'))
}
