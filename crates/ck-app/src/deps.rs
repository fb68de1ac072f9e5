//! # Application Dependencies
//!
//! Parameter grouping for [`crate::HistoryService`] construction.
//! Not a builder: no defaults, no hidden logic.

use std::sync::Arc;

use ck_core::ports::{
    ClipboardDevicePort, ContentHashPort, FileStorePort, NotificationPort, TimerPort,
};

pub struct AppDeps {
    pub clipboard: Arc<dyn ClipboardDevicePort>,
    pub hasher: Arc<dyn ContentHashPort>,
    pub file_store: Arc<dyn FileStorePort>,
    pub notifier: Arc<dyn NotificationPort>,
    pub timer: Arc<dyn TimerPort>,
}
