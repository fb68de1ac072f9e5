use std::path::PathBuf;

use ck_core::{
    ports::{AppDirsError, AppDirsPort},
    AppDirs,
};

const APP_DIR_NAME: &str = "clipkeep";
const PROFILE_ENV: &str = "CLIPKEEP_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// App directories from the `dirs` crate, isolated per `CLIPKEEP_PROFILE`.
#[derive(Default)]
pub struct DirsAppDirsAdapter {
    base_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every directory under `base` instead of the system locations.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        match &self.base_override {
            Some(base) => Some(base.clone()),
            None => dirs::data_local_dir(),
        }
    }

    fn base_cache_dir(&self) -> Option<PathBuf> {
        match &self.base_override {
            Some(base) => Some(base.join("cache")),
            None => dirs::cache_dir(),
        }
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_cache = self
            .base_cache_dir()
            .ok_or(AppDirsError::CacheDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_cache_root: base_cache.join(&app_dir_name),
        })
    }
}
