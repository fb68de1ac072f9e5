use std::path::{Path, PathBuf};
use std::time::Duration;

use ck_core::AppConfig;

/// Resolved runtime settings. This is where config defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    pub poll_interval: Duration,
    pub suppression_window: Duration,
    pub enabled: bool,
    pub image_dir: PathBuf,
    /// `None` means unlimited.
    pub max_entries: Option<usize>,
    pub cleanup_on_start: bool,
}

impl MonitorSettings {
    pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
    pub const DEFAULT_SUPPRESSION_WINDOW_MS: u64 = 100;
    pub const DEFAULT_MAX_ENTRIES: usize = 500;

    pub fn from_config(config: &AppConfig, app_data_root: &Path) -> Self {
        let poll_ms = non_zero_or(config.poll_interval_ms, Self::DEFAULT_POLL_INTERVAL_MS);
        let suppression_ms = non_zero_or(
            config.suppression_window_ms,
            Self::DEFAULT_SUPPRESSION_WINDOW_MS,
        );
        let image_dir = if config.image_dir.as_os_str().is_empty() {
            app_data_root.join("images")
        } else {
            config.image_dir.clone()
        };
        let max_entries = match config.max_entries {
            None => Some(Self::DEFAULT_MAX_ENTRIES),
            Some(0) => None,
            Some(max) => Some(usize::try_from(max).unwrap_or(usize::MAX)),
        };

        Self {
            poll_interval: Duration::from_millis(poll_ms),
            suppression_window: Duration::from_millis(suppression_ms),
            enabled: config.monitor_enabled.unwrap_or(true),
            image_dir,
            max_entries,
            cleanup_on_start: config.cleanup_on_start.unwrap_or(true),
        }
    }
}

fn non_zero_or(value: u64, default: u64) -> u64 {
    if value == 0 {
        default
    } else {
        value
    }
}
