mod clipboard_runtime;
mod event_bus;

pub use clipboard_runtime::ClipboardRuntime;
pub use event_bus::{command_channel, RuntimeCommand, RuntimeCommandReceiver, RuntimeCommandSender};
