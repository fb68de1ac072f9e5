use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("system cache directory is unavailable")]
    CacheDirUnavailable,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardDeviceError {
    #[error("clipboard device unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read clipboard: {0}")]
    Read(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),

    #[error("invalid clipboard image: {0}")]
    Image(String),
}

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("clipboard watcher could not be created: {0}")]
    Create(String),

    #[error("clipboard watcher is already running")]
    AlreadyRunning,
}
