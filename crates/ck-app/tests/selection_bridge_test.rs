//! Write-back through the selection bridge and the suppression window.

mod support;

use std::time::Duration;

use ck_app::{ActivateOutcome, IngestOutcome};
use ck_core::{ClipboardPayload, ContentKind, MonitorPhase};
use support::{png, settle, text, Harness};
use tokio::time::advance;

async fn first_id(h: &Harness) -> ck_core::EntryId {
    h.service.snapshot().await.get(0).unwrap().id().clone()
}

#[tokio::test]
async fn activate_then_echo_does_not_duplicate() {
    tokio::time::pause();
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(text("one")).await;
    monitor.ingest(text("two")).await;
    let one = h.service.snapshot().await.get(1).unwrap().id().clone();

    assert_eq!(h.service.select(&[one]).await, ActivateOutcome::Written);
    assert_eq!(h.clipboard.current(), Some(text("one")));

    // change notification fired by our own write
    assert_eq!(monitor.ingest_current().await, IngestOutcome::Suppressed);
    assert_eq!(h.labels().await, vec!["two", "one"]);
}

#[tokio::test]
async fn late_echo_after_window_is_a_duplicate() {
    tokio::time::pause();
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(text("one")).await;
    monitor.ingest(text("two")).await;
    let one = h.service.snapshot().await.get(1).unwrap().id().clone();

    h.service.select(&[one]).await;
    assert_eq!(monitor.phase().await, MonitorPhase::Suppressed);

    advance(Duration::from_millis(100)).await;
    settle().await;
    assert_eq!(monitor.phase().await, MonitorPhase::Idle);

    assert_eq!(monitor.ingest_current().await, IngestOutcome::Duplicate);
    assert_eq!(h.len().await, 2);
}

#[tokio::test]
async fn genuine_copy_after_window_is_recorded() {
    tokio::time::pause();
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(text("one")).await;
    let one = first_id(&h).await;

    h.service.select(&[one]).await;
    h.clipboard.set_text("typed by user");
    assert_eq!(monitor.ingest_current().await, IngestOutcome::Suppressed);

    advance(Duration::from_millis(100)).await;
    settle().await;
    assert!(matches!(
        monitor.ingest_current().await,
        IngestOutcome::Recorded(_)
    ));
    assert_eq!(h.labels().await, vec!["typed by user", "one"]);
}

#[tokio::test]
async fn second_write_back_restarts_the_window() {
    tokio::time::pause();
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(text("a")).await;
    monitor.ingest(text("b")).await;
    let snapshot = h.service.snapshot().await;
    let (b, a) = (
        snapshot.get(0).unwrap().id().clone(),
        snapshot.get(1).unwrap().id().clone(),
    );

    h.service.select(&[a]).await;
    advance(Duration::from_millis(60)).await;
    settle().await;
    h.service.select(&[b]).await;

    advance(Duration::from_millis(60)).await;
    settle().await;
    assert_eq!(monitor.phase().await, MonitorPhase::Suppressed);

    advance(Duration::from_millis(40)).await;
    settle().await;
    assert_eq!(monitor.phase().await, MonitorPhase::Idle);
}

#[tokio::test]
async fn failed_write_releases_suppression_and_keeps_hashes() {
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(text("a")).await;
    monitor.ingest(text("b")).await;
    let a = h.service.snapshot().await.get(1).unwrap().id().clone();
    let before = monitor.state().await;

    h.clipboard.fail_writes(true);
    let outcome = h.service.select(&[a]).await;

    assert!(matches!(outcome, ActivateOutcome::DeviceError(_)));
    assert_eq!(monitor.phase().await, MonitorPhase::Idle);
    assert_eq!(monitor.state().await, before);
}

#[tokio::test]
async fn activating_an_image_writes_the_stored_bytes() {
    let h = Harness::new();
    let monitor = h.service.monitor();
    let image = png(3, 2, 4);
    monitor.ingest(ClipboardPayload::Image(image.clone())).await;
    let id = first_id(&h).await;

    assert_eq!(h.service.select(&[id]).await, ActivateOutcome::Written);

    assert_eq!(h.clipboard.writes(), vec![ClipboardPayload::Image(image)]);
    assert_eq!(monitor.ingest_current().await, IngestOutcome::Suppressed);
}

#[tokio::test]
async fn activating_image_with_missing_file_is_reported() {
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(ClipboardPayload::Image(png(1, 1, 1))).await;
    let snapshot = h.service.snapshot().await;
    let entry = snapshot.get(0).unwrap();
    std::fs::remove_file(&entry.image_ref().unwrap().path).unwrap();

    let outcome = h.service.select(&[entry.id().clone()]).await;

    assert_eq!(outcome, ActivateOutcome::MissingImageFile);
    assert!(h.clipboard.writes().is_empty());
    assert_eq!(monitor.phase().await, MonitorPhase::Idle);
}

#[tokio::test]
async fn unknown_entry_is_not_found() {
    let h = Harness::new();

    assert_eq!(
        h.service.select(&[ck_core::EntryId::new()]).await,
        ActivateOutcome::NotFound
    );
    assert_eq!(h.service.select(&[]).await, ActivateOutcome::NotFound);
}

#[tokio::test]
async fn multi_select_joins_text_in_history_order_and_skips_images() {
    let h = Harness::new();
    let monitor = h.service.monitor();
    monitor.ingest(text("x")).await;
    monitor.ingest(ClipboardPayload::Image(png(1, 1, 1))).await;
    monitor.ingest(text("y")).await;
    let ids: Vec<_> = h
        .service
        .snapshot()
        .await
        .iter()
        .map(|e| e.id().clone())
        .rev()
        .collect();

    let outcome = h.service.select(&ids).await;

    assert_eq!(outcome, ActivateOutcome::Written);
    assert_eq!(h.clipboard.writes(), vec![text("yx")]);
    assert_eq!(
        monitor.state().await.last_hash(ContentKind::Text),
        Some(&blake3_of("yx"))
    );
}

fn blake3_of(value: &str) -> ck_core::ContentHash {
    use ck_core::ports::ContentHashPort;
    ck_infra::Blake3Hasher.hash_bytes(value.as_bytes()).unwrap()
}
