mod file_store;

pub use file_store::{FilesystemFileStore, IMAGE_FILE_PREFIX};
