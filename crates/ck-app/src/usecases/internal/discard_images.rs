use ck_core::ports::FileStorePort;
use ck_core::HistoryEntry;

/// Delete the backing files of every image entry in `entries`.
/// Failures are logged by the store and skipped. Returns how many were removed.
pub(crate) async fn discard_image_files(
    file_store: &dyn FileStorePort,
    entries: &[HistoryEntry],
) -> usize {
    let mut deleted = 0;
    for image in entries.iter().filter_map(HistoryEntry::image_ref) {
        if file_store.delete(&image.path).await {
            deleted += 1;
        }
    }
    deleted
}
