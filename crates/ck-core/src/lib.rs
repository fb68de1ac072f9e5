//! # ck-core
//!
//! Core domain models and port definitions for ClipKeep.
//!
//! This crate holds the history model, the monitor state machine and the
//! trait contracts that infrastructure and platform crates implement. It has
//! no knowledge of the OS clipboard, the filesystem or the async runtime.

pub mod app_dirs;
pub mod clipboard;
pub mod config;
pub mod history;
pub mod ids;
pub mod monitor;
pub mod ports;

pub use app_dirs::AppDirs;
pub use clipboard::{
    fingerprint, ChangeTrigger, ClipboardChanged, ClipboardPayload, ContentHash, ContentKind, EntryContent,
    HashAlgorithm, HistoryEntry, ImageFormat, ImagePayload, ImageRef,
};
pub use config::AppConfig;
pub use history::{EditOutcome, HistorySnapshot, HistoryStore};
pub use ids::EntryId;
pub use monitor::{MonitorPhase, MonitorState, Observation};
