//! Structured logging configuration.

use crate::config::LoggingSettings;
use crate::{Error, Result};
use std::path::PathBuf;

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for unknown names.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidInput(format!("unknown log format '{other}'"))),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive.
    pub directive: String,
    /// Optional log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            directive: DEFAULT_DIRECTIVE.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from config settings with env overrides.
    ///
    /// The filter directive is taken from `CONTENTGUARD_LOG`, then `RUST_LOG`,
    /// then `--verbose`, then the config file. `CONTENTGUARD_LOG_FORMAT`
    /// overrides the format.
    ///
    /// # Errors
    ///
    /// Returns an error if a format name is not recognized.
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Result<Self> {
        Self::resolve(settings, verbose, |key| std::env::var(key).ok())
    }

    fn resolve<F>(settings: Option<&LoggingSettings>, verbose: bool, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let directive = non_empty("CONTENTGUARD_LOG")
            .or_else(|| non_empty("RUST_LOG"))
            .or_else(|| verbose.then(|| VERBOSE_DIRECTIVE.to_string()))
            .or_else(|| settings.and_then(|s| s.level.clone()))
            .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());

        let format = match non_empty("CONTENTGUARD_LOG_FORMAT")
            .or_else(|| settings.and_then(|s| s.format.clone()))
        {
            Some(name) => LogFormat::parse(&name)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            format,
            directive,
            file: settings.and_then(|s| s.file.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_settings() {
        let config = LoggingConfig::resolve(None, false, env(&[])).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.directive, "warn");
        assert!(config.file.is_none());
    }

    #[test]
    fn test_verbose_beats_config_level() {
        let settings = LoggingSettings {
            level: Some("info".to_string()),
            ..LoggingSettings::default()
        };
        let config = LoggingConfig::resolve(Some(&settings), true, env(&[])).unwrap();
        assert_eq!(config.directive, "debug");
    }

    #[test]
    fn test_env_beats_everything() {
        let settings = LoggingSettings {
            level: Some("info".to_string()),
            format: Some("pretty".to_string()),
            file: None,
        };
        let config = LoggingConfig::resolve(
            Some(&settings),
            true,
            env(&[
                ("RUST_LOG", "error"),
                ("CONTENTGUARD_LOG", "contentguard=trace"),
                ("CONTENTGUARD_LOG_FORMAT", "json"),
            ]),
        )
        .unwrap();
        assert_eq!(config.directive, "contentguard=trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = LoggingConfig::resolve(None, false, env(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.directive, "warn");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let settings = LoggingSettings {
            format: Some("xml".to_string()),
            ..LoggingSettings::default()
        };
        assert!(LoggingConfig::resolve(Some(&settings), false, env(&[])).is_err());
    }
}
