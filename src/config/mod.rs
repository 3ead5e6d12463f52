//! Configuration management.
//!
//! The term table is read once at startup and never mutated afterwards.
//!
//! ```toml
//! mask = "****"
//! block_sensitive = true
//! terms = ["stupid", "غبي"]
//! terms_file = "terms.txt"
//!
//! [logging]
//! format = "json"
//! level = "info"
//! ```

use crate::filter::{DEFAULT_MASK, parse_word_list};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration for contentguard.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Prohibited terms, in order. `None` selects the built-in list.
    pub terms: Option<Vec<String>>,
    /// Word list the terms were read from, if any.
    pub terms_file: Option<PathBuf>,
    /// Mask token substituted for prohibited terms.
    pub mask: String,
    /// Default for contact-information redaction in the CLI.
    pub block_sensitive: bool,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section in config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Output format: "pretty" or "json".
    pub format: Option<String>,
    /// Filter directive, e.g. "info" or "contentguard=debug".
    pub level: Option<String>,
    /// Log file path. Logs go to stderr when unset.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Inline terms.
    pub terms: Option<Vec<String>>,
    /// Newline-separated word list, relative to the config file.
    pub terms_file: Option<String>,
    /// Mask token.
    pub mask: Option<String>,
    /// Redact contact information by default.
    pub block_sensitive: Option<bool>,
    /// Logging configuration.
    pub logging: Option<LoggingSettings>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            terms: None,
            terms_file: None,
            mask: DEFAULT_MASK.to_string(),
            block_sensitive: false,
            logging: LoggingSettings::default(),
        }
    }
}

impl FilterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its word list cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_config_file(file, base_dir)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/contentguard/` on macOS)
    /// 2. XDG config dir (`~/.config/contentguard/`)
    ///
    /// Returns default configuration if no readable config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("contentguard").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("contentguard")
                .join("config.toml"),
        ];

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "ignoring unreadable config file"
                    );
                },
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `FilterConfig`.
    ///
    /// Inline terms come first, followed by the word list's entries.
    fn from_config_file(file: ConfigFile, base_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(terms) = file.terms {
            config.terms = Some(terms);
        }
        if let Some(terms_file) = file.terms_file {
            let path = base_dir.join(terms_file);
            let contents = std::fs::read_to_string(&path).map_err(|e| Error::OperationFailed {
                operation: "read_terms_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;
            config
                .terms
                .get_or_insert_with(Vec::new)
                .extend(parse_word_list(&contents));
            config.terms_file = Some(path);
        }
        if let Some(mask) = file.mask {
            config.mask = mask;
        }
        if let Some(block_sensitive) = file.block_sensitive {
            config.block_sensitive = block_sensitive;
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        Ok(config)
    }

    /// Sets the prohibited terms.
    #[must_use]
    pub fn with_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the mask token.
    #[must_use]
    pub fn with_mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }
}
