//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO. No validation
//! and no defaulting: that happens in `MonitorSettings::from_config`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ck_core::{AppConfig, AppDirs};

pub const CONFIG_ENV: &str = "CLIPKEEP_CONFIG";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Where to look for the config file: the CLI argument, then
/// `CLIPKEEP_CONFIG`, then `<app_data>/config.toml` if it exists.
pub fn resolve_config_path(cli_arg: Option<PathBuf>, app_dirs: &AppDirs) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path);
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let default = app_dirs.config_file();
    default.exists().then_some(default)
}

/// Configuration actually used by the process, plus the load error if the
/// file could not be used. The error is reported once tracing is up.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
    pub error: Option<anyhow::Error>,
}

pub fn load_or_default(cli_arg: Option<PathBuf>, app_dirs: &AppDirs) -> LoadedConfig {
    let defaults = || AppConfig::with_system_defaults(app_dirs.app_data_root.clone());

    let Some(path) = resolve_config_path(cli_arg, app_dirs) else {
        return LoadedConfig {
            config: defaults(),
            source: None,
            error: None,
        };
    };

    match load_config(&path) {
        Ok(config) => LoadedConfig {
            config,
            source: Some(path),
            error: None,
        },
        Err(err) => LoadedConfig {
            config: defaults(),
            source: None,
            error: Some(err),
        },
    }
}

/// Log directory: the configured one, else `<app_data>/logs`.
pub fn logs_dir(config: &AppConfig, app_dirs: &AppDirs) -> PathBuf {
    if config.log_dir.as_os_str().is_empty() {
        app_dirs.logs_dir()
    } else {
        config.log_dir.clone()
    }
}
