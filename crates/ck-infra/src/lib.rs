//! Infrastructure adapters for the ports declared in `ck-core`.

pub mod fs;
pub mod hashing;
pub mod time;

pub use fs::FilesystemFileStore;
pub use hashing::Blake3Hasher;
pub use time::Timer;
