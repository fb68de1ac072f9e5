//! Process bootstrap: configuration, tracing, dependency wiring and the
//! top-level run loop.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use run::{run, run_blocking};
