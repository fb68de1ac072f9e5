//! # Pure Data Module - Data Transfer Objects Only
//!
//! Maps the TOML configuration file onto [`AppConfig`]. No validation and no
//! default value calculation happens here: a missing number is `0`, a missing
//! path is empty, a missing switch or capacity is `None`. Defaulting policy lives in
//! `ck-app` (`MonitorSettings`).

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fallback poll period in milliseconds
    pub poll_interval_ms: u64,

    /// How long the monitor ignores changes after a write-back
    pub suppression_window_ms: u64,

    /// `[monitor] enabled`
    pub monitor_enabled: Option<bool>,

    /// Directory for captured images (path info only, no existence check)
    pub image_dir: PathBuf,

    /// `[storage] max_entries`; an explicit `0` is kept as `Some(0)`
    pub max_entries: Option<u64>,

    /// `[storage] cleanup_on_start`
    pub cleanup_on_start: Option<bool>,

    /// Log file directory
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty values are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            poll_interval_ms: lookup_u64(toml_value, "monitor", "poll_interval_ms").unwrap_or(0),
            suppression_window_ms: lookup_u64(toml_value, "monitor", "suppression_window_ms")
                .unwrap_or(0),
            monitor_enabled: lookup(toml_value, "monitor", "enabled").and_then(|v| v.as_bool()),
            image_dir: PathBuf::from(
                lookup(toml_value, "storage", "image_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            max_entries: lookup_u64(toml_value, "storage", "max_entries"),
            cleanup_on_start: lookup(toml_value, "storage", "cleanup_on_start").and_then(|v| v.as_bool()),
            log_dir: PathBuf::from(
                lookup(toml_value, "logging", "directory")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            poll_interval_ms: 0,
            suppression_window_ms: 0,
            monitor_enabled: None,
            image_dir: PathBuf::new(),
            max_entries: None,
            cleanup_on_start: None,
            log_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// `data_dir` is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            image_dir: data_dir.join("images"),
            log_dir: data_dir.join("logs"),
            ..Self::empty()
        }
    }
}

fn lookup<'a>(toml_value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    toml_value.get(section).and_then(|s| s.get(key))
}

/// Negative integers read as absent.
fn lookup_u64(toml_value: &toml::Value, section: &str, key: &str) -> Option<u64> {
    lookup(toml_value, section, key)
        .and_then(|v| v.as_integer())
        .and_then(|v| u64::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [monitor]
            poll_interval_ms = 250
            suppression_window_ms = 80
            enabled = false

            [storage]
            image_dir = "/var/tmp/clips"
            max_entries = 42
            cleanup_on_start = true

            [logging]
            directory = "/var/log/clipkeep"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.suppression_window_ms, 80);
        assert_eq!(config.monitor_enabled, Some(false));
        assert_eq!(config.image_dir, PathBuf::from("/var/tmp/clips"));
        assert_eq!(config.max_entries, Some(42));
        assert_eq!(config.cleanup_on_start, Some(true));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/clipkeep"));
    }

    #[test]
    fn test_from_toml_missing_values_are_empty_facts() {
        let toml_value: Value = toml::from_str("[monitor]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_keeps_explicit_zero_capacity() {
        let toml_value: Value = toml::from_str("[storage]\nmax_entries = 0\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.max_entries, Some(0));
    }

    #[test]
    fn test_from_toml_ignores_wrongly_typed_values() {
        let toml_str = r#"
            [monitor]
            poll_interval_ms = "fast"
            enabled = "yes"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, 0);
        assert_eq!(config.monitor_enabled, None);
    }

    #[test]
    fn test_from_toml_negative_numbers_read_as_absent() {
        let toml_value: Value =
            toml::from_str("[monitor]
poll_interval_ms = -5
[storage]
max_entries = -1
")
                .unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.poll_interval_ms, 0);
        assert_eq!(config.max_entries, None);
    }

    #[test]
    fn test_with_system_defaults_creates_valid_paths() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/tmp/test"));

        assert_eq!(config.image_dir, PathBuf::from("/tmp/test/images"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/test/logs"));
        assert_eq!(config.max_entries, None);
        assert_eq!(config.monitor_enabled, None);
    }
}
