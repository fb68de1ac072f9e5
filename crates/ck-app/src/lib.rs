//! Application layer for ClipKeep.
//!
//! Use cases hold their ports as `Arc<dyn Port>` and are assembled by
//! [`HistoryService`], the single entry point a display surface talks to.

pub mod deps;
pub mod history;
pub mod service;
pub mod settings;
pub mod usecases;

pub use deps::AppDeps;
pub use history::{shared_history, SharedHistory};
pub use service::HistoryService;
pub use settings::MonitorSettings;
pub use usecases::{ActivateOutcome, ClipboardMonitor, IgnoreReason, IngestOutcome};
