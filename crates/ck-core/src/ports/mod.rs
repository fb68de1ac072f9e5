//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `ck-app` and the
//! adapters in `ck-infra` and `ck-platform`.

mod app_dirs;
mod change_source;
mod clipboard_change_handler;
mod clipboard_device;
mod errors;
mod file_store;
mod hash;
mod notification;
mod timer;

pub use app_dirs::AppDirsPort;
pub use change_source::ClipboardChangeSourcePort;
pub use clipboard_change_handler::ClipboardChangeHandler;
pub use clipboard_device::ClipboardDevicePort;
pub use errors::{AppDirsError, ClipboardDeviceError, WatcherError};
pub use file_store::FileStorePort;
pub use hash::ContentHashPort;
pub use notification::NotificationPort;
pub use timer::{TimerPort, TimerTask};
