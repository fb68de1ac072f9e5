use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_cache_root: PathBuf,
}

impl AppDirs {
    pub fn config_file(&self) -> PathBuf {
        self.app_data_root.join("config.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.app_data_root.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths_live_under_data_root() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/clipkeep"),
            app_cache_root: PathBuf::from("/tmp/cache/clipkeep"),
        };
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/clipkeep/config.toml"));
        assert_eq!(dirs.logs_dir(), PathBuf::from("/tmp/clipkeep/logs"));
    }
}
