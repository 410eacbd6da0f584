//! End-to-end tests of the error service against mock collaborators,
//! including storage and reporter failure injection.

use async_trait::async_trait;
use borealis_core::CoreError;
use borealis_domain::error_center::{
    ApiErrorPayload, DefaultErrorService, ErrorCenterEvent, ErrorKind, ErrorRecord, ErrorService,
    ErrorStore, HandleOptions, Severity,
};
use borealis_domain::ports::{
    ErrorReporter, InMemoryKeyValueStore, KeyValueStore, NullReporter, ToastNotifier,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

const STORAGE_KEY: &str = "error_history.json";

// --- Mock collaborators ---

/// Key-value storage whose reads and writes can be switched to fail.
#[derive(Default)]
struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyKeyValueStore {
    fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }
    fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FlakyKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::Internal(format!("forced read error on {}", key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::Internal(format!(
                "forced write error on {}",
                key
            )));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.inner.remove(key).await
    }
}

#[derive(Default)]
struct RecordingToast {
    calls: Mutex<Vec<(String, Severity)>>,
}

impl RecordingToast {
    fn calls(&self) -> Vec<(String, Severity)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToastNotifier for RecordingToast {
    fn show_toast(&self, message: &str, severity: Severity) {
        self.calls
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Reporter that always fails, for exercising the swallow-transport-errors
/// contract.
struct UnreachableReporter;

#[async_trait]
impl ErrorReporter for UnreachableReporter {
    async fn report(&self, _record: &ErrorRecord) -> Result<(), CoreError> {
        Err(CoreError::Internal("endpoint unreachable".to_string()))
    }
}

struct ChannelReporter {
    tx: mpsc::UnboundedSender<ErrorRecord>,
}

#[async_trait]
impl ErrorReporter for ChannelReporter {
    async fn report(&self, record: &ErrorRecord) -> Result<(), CoreError> {
        let _ = self.tx.send(record.clone());
        Ok(())
    }
}

// --- Helpers ---

async fn build_service(
    storage: Arc<dyn KeyValueStore>,
    toasts: Arc<dyn ToastNotifier>,
    reporter: Arc<dyn ErrorReporter>,
    max_records: usize,
) -> DefaultErrorService {
    let store = Arc::new(ErrorStore::load(storage, STORAGE_KEY, max_records).await);
    DefaultErrorService::new(store, toasts, reporter, 32)
}

fn everything_on() -> HandleOptions {
    HandleOptions {
        show_toast: true,
        report: true,
        ..Default::default()
    }
}

#[derive(Debug)]
struct Boom;

impl std::fmt::Display for Boom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boom")
    }
}

impl std::error::Error for Boom {}

// --- Property 1: handle_* never errors regardless of collaborator health ---

#[tokio::test]
async fn every_entry_point_survives_failing_storage_and_reporter() {
    let storage = Arc::new(FlakyKeyValueStore::default());
    storage.set_fail_reads(true);
    storage.set_fail_writes(true);
    let service = build_service(
        storage.clone(),
        Arc::new(RecordingToast::default()),
        Arc::new(UnreachableReporter),
        50,
    )
    .await;

    let ids = vec![
        service.handle_error(&Boom, everything_on()).await,
        service.handle_error_message("stringy", everything_on()).await,
        service
            .handle_api_error(
                &ApiErrorPayload {
                    status: Some(500),
                    ..Default::default()
                },
                everything_on(),
            )
            .await,
        service.handle_network_error(&Boom, everything_on()).await,
        service
            .handle_validation_error("bad input", Some("name"), everything_on())
            .await,
    ];

    // Every call completed and produced a distinct record despite the
    // broken collaborators; the in-memory log is still authoritative.
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(service.stored_errors().await.len(), ids.len());
}

// --- Properties 2 & 3: bounded, most-recent-first storage ---

#[tokio::test]
async fn stored_errors_are_most_recent_first_up_to_bound() {
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;

    for i in 0..5 {
        service
            .handle_error_message(&format!("error {}", i), HandleOptions::default())
            .await;
    }

    let stored = service.stored_errors().await;
    assert_eq!(stored.len(), 5);
    let messages: Vec<_> = stored.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["error 4", "error 3", "error 2", "error 1", "error 0"]
    );
}

#[tokio::test]
async fn appending_past_bound_evicts_the_oldest_records() {
    let max = 3;
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        max,
    )
    .await;

    for i in 0..max + 2 {
        service
            .handle_error_message(&format!("error {}", i), HandleOptions::default())
            .await;
    }

    let stored = service.stored_errors().await;
    assert_eq!(stored.len(), max);
    let messages: Vec<_> = stored.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["error 4", "error 3", "error 2"]);
    assert!(!messages.contains(&"error 0"));
    assert!(!messages.contains(&"error 1"));
}

// --- Property 4: clear ---

#[tokio::test]
async fn clear_yields_empty_history() {
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;
    service
        .handle_error_message("boom", HandleOptions::default())
        .await;

    service.clear_stored_errors().await;
    assert!(service.stored_errors().await.is_empty());
}

// --- Property 5: API severity derivation through the service ---

#[tokio::test]
async fn api_severity_follows_status_and_override() {
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;

    for (status, expected) in [
        (404u16, Severity::Medium),
        (500, Severity::High),
        (401, Severity::High),
    ] {
        service
            .handle_api_error(
                &ApiErrorPayload {
                    status: Some(status),
                    ..Default::default()
                },
                HandleOptions::default(),
            )
            .await;
        let stored = service.stored_errors().await;
        assert_eq!(stored[0].severity, expected, "status {}", status);
    }

    service
        .handle_api_error(
            &ApiErrorPayload {
                status: Some(500),
                ..Default::default()
            },
            HandleOptions {
                severity: Some(Severity::Low),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(service.stored_errors().await[0].severity, Severity::Low);
}

// --- Property 9: end-to-end validation flow ---

#[tokio::test]
async fn validation_flow_stores_record_and_toasts_once() {
    let toasts = Arc::new(RecordingToast::default());
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        toasts.clone(),
        Arc::new(NullReporter),
        50,
    )
    .await;

    service
        .handle_validation_error(
            "Email is required",
            Some("email"),
            HandleOptions {
                show_toast: true,
                ..Default::default()
            },
        )
        .await;

    let stored = service.stored_errors().await;
    assert_eq!(stored.len(), 1);
    let record = &stored[0];
    assert_eq!(record.kind, ErrorKind::Validation);
    assert_eq!(record.severity, Severity::Low);
    assert_eq!(record.message, "Email is required");
    assert_eq!(record.field.as_deref(), Some("email"));

    let calls = toasts.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Email is required");
}

// --- Property 10: corrupt persisted data ---

#[tokio::test]
async fn corrupt_persisted_history_yields_empty_store() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    storage
        .set(STORAGE_KEY, "\u{1}garbage not json".to_string())
        .await
        .unwrap();

    let service = build_service(
        storage,
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;
    assert!(service.stored_errors().await.is_empty());

    // The store is usable immediately after the reset.
    service
        .handle_error_message("fresh start", HandleOptions::default())
        .await;
    assert_eq!(service.stored_errors().await.len(), 1);
}

// --- Persistence and reporting behavior ---

#[tokio::test]
async fn history_persists_across_service_instances() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    {
        let service = build_service(
            storage.clone(),
            Arc::new(RecordingToast::default()),
            Arc::new(NullReporter),
            50,
        )
        .await;
        let mut context = HashMap::new();
        context.insert("screen".to_string(), serde_json::json!("settings"));
        service
            .handle_error_message(
                "persisted across sessions",
                HandleOptions {
                    context,
                    ..Default::default()
                },
            )
            .await;
    }

    let revived = build_service(
        storage,
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;
    let stored = revived.stored_errors().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].message, "persisted across sessions");
    assert_eq!(stored[0].context["screen"], serde_json::json!("settings"));
}

#[tokio::test]
async fn reported_record_matches_stored_record() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingToast::default()),
        Arc::new(ChannelReporter { tx }),
        50,
    )
    .await;

    let id = service
        .handle_network_error(
            &Boom,
            HandleOptions {
                report: true,
                ..Default::default()
            },
        )
        .await;

    let reported = tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv())
        .await
        .expect("report task did not run")
        .expect("reporter channel closed");
    assert_eq!(reported.id, id);
    assert_eq!(reported.kind, ErrorKind::Network);
    assert_eq!(service.stored_errors().await[0], reported);
}

#[tokio::test]
async fn storage_recovery_after_transient_write_failures() {
    let storage = Arc::new(FlakyKeyValueStore::default());
    let service = build_service(
        storage.clone(),
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;

    storage.set_fail_writes(true);
    service
        .handle_error_message("while broken", HandleOptions::default())
        .await;
    storage.set_fail_writes(false);
    service
        .handle_error_message("after recovery", HandleOptions::default())
        .await;

    // Both records are visible this session, and the successful second write
    // persisted the full list.
    assert_eq!(service.stored_errors().await.len(), 2);
    let persisted = storage.get(STORAGE_KEY).await.unwrap().unwrap();
    let parsed: Vec<ErrorRecord> = serde_json::from_str(&persisted).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[tokio::test]
async fn recorded_events_are_broadcast_in_order() {
    let service = build_service(
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(RecordingToast::default()),
        Arc::new(NullReporter),
        50,
    )
    .await;
    let mut rx = service.subscribe();

    service
        .handle_error_message("first", HandleOptions::default())
        .await;
    service
        .handle_error_message("second", HandleOptions::default())
        .await;
    service.clear_stored_errors().await;

    match rx.try_recv().unwrap() {
        ErrorCenterEvent::Recorded { record } => assert_eq!(record.message, "first"),
        other => panic!("unexpected event: {:?}", other),
    }
    match rx.try_recv().unwrap() {
        ErrorCenterEvent::Recorded { record } => assert_eq!(record.message, "second"),
        other => panic!("unexpected event: {:?}", other),
    }
    assert!(matches!(
        rx.try_recv().unwrap(),
        ErrorCenterEvent::HistoryCleared
    ));
}
