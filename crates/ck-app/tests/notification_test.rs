use std::sync::Arc;
use std::time::Duration;

use ck_app::{AppDeps, HistoryService, MonitorSettings};
use ck_core::ports::NotificationPort;
use ck_core::ClipboardPayload;
use ck_infra::{Blake3Hasher, FilesystemFileStore, Timer};
use mockall::mock;
use mockall::predicate::eq;

mod support;

mock! {
    pub Notifier {}

    impl NotificationPort for Notifier {
        fn on_new_entry(&self, label: &str);
    }
}

#[tokio::test]
async fn notifier_called_once_per_recorded_entry() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut notifier = MockNotifier::new();
    notifier
        .expect_on_new_entry()
        .with(eq("copied"))
        .times(1)
        .return_const(());

    let settings = MonitorSettings {
        poll_interval: Duration::from_millis(1000),
        suppression_window: Duration::from_millis(100),
        enabled: true,
        image_dir: dir.path().to_path_buf(),
        max_entries: None,
        cleanup_on_start: false,
    };
    let deps = AppDeps {
        clipboard: Arc::new(support::FakeClipboard::default()),
        hasher: Arc::new(Blake3Hasher),
        file_store: Arc::new(FilesystemFileStore::new(dir.path().to_path_buf())),
        notifier: Arc::new(notifier),
        timer: Arc::new(Timer::new()),
    };
    let service = HistoryService::new(deps, &settings);
    let monitor = service.monitor();

    monitor
        .ingest(ClipboardPayload::Text("copied".into()))
        .await;
    monitor
        .ingest(ClipboardPayload::Text("copied".into()))
        .await;
    monitor.ingest(ClipboardPayload::Text("  ".into())).await;
}
