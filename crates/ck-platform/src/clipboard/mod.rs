mod system;
mod unavailable;
mod watcher;

pub use system::SystemClipboard;
pub use unavailable::UnavailableClipboard;
pub use watcher::ClipboardChangeWatcher;
