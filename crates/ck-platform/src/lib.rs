//! OS-facing adapters: the system clipboard, its change watcher, the
//! detection runtime that drives the monitor, and app directory lookup.

pub mod app_dirs;
pub mod clipboard;
pub mod runtime;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::{ClipboardChangeWatcher, SystemClipboard, UnavailableClipboard};
pub use runtime::{command_channel, ClipboardRuntime, RuntimeCommand, RuntimeCommandSender};
