mod state;

pub use state::{MonitorPhase, MonitorState, Observation};
