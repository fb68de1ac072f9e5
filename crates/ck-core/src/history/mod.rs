//! Ordered clipboard history.
//!
//! The store keeps entries newest-first. Readers take a [`HistorySnapshot`],
//! which shares the backing buffer until the next mutation, so a display
//! pass never observes a half-applied change.

mod export;
mod search;
mod snapshot;
mod store;

pub use export::render_export;
pub use search::{filter, matches_query};
pub use snapshot::HistorySnapshot;
pub use store::{EditOutcome, HistoryStore};
