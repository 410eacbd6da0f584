use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::classification;
use super::events::ErrorCenterEvent;
use super::store::ErrorStore;
use super::types::{ApiErrorPayload, ErrorRecord, HandleOptions};
use crate::ports::{ErrorReporter, ToastNotifier};

// --- ErrorService trait ---

/// The process-wide error orchestrator.
///
/// One instance is constructed at startup and injected (as
/// `Arc<dyn ErrorService>`) wherever errors are handled; there is no hidden
/// global.
///
/// Every `handle_*` method classifies the input, appends the record to the
/// store, optionally shows a toast, optionally forwards the record to the
/// remote reporter, and returns the record id. The methods are infallible by
/// contract: they are called from UI event handlers where an escaping error
/// would defeat centralized handling, so every internal failure is reduced
/// to a logged warning.
#[async_trait]
pub trait ErrorService: Send + Sync {
    /// Handles an in-process failure.
    async fn handle_error(
        &self,
        error: &(dyn std::error::Error + Send + Sync),
        options: HandleOptions,
    ) -> Uuid;

    /// Handles an in-process failure described only by a message.
    async fn handle_error_message(&self, message: &str, options: HandleOptions) -> Uuid;

    /// Handles a failed API request.
    async fn handle_api_error(&self, payload: &ApiErrorPayload, options: HandleOptions) -> Uuid;

    /// Handles a transport-level failure.
    async fn handle_network_error(
        &self,
        error: &(dyn std::error::Error + Send + Sync),
        options: HandleOptions,
    ) -> Uuid;

    /// Handles rejected user input.
    async fn handle_validation_error(
        &self,
        message: &str,
        field: Option<&str>,
        options: HandleOptions,
    ) -> Uuid;

    /// Snapshot of the stored records, most-recent-first.
    async fn stored_errors(&self) -> Vec<ErrorRecord>;

    /// Empties the stored error history.
    async fn clear_stored_errors(&self);

    /// Subscribes to the service's event stream.
    fn subscribe(&self) -> broadcast::Receiver<ErrorCenterEvent>;
}

// --- DefaultErrorService implementation ---

pub struct DefaultErrorService {
    store: Arc<ErrorStore>,
    toasts: Arc<dyn ToastNotifier>,
    reporter: Arc<dyn ErrorReporter>,
    event_publisher: broadcast::Sender<ErrorCenterEvent>,
}

impl DefaultErrorService {
    pub fn new(
        store: Arc<ErrorStore>,
        toasts: Arc<dyn ToastNotifier>,
        reporter: Arc<dyn ErrorReporter>,
        broadcast_capacity: usize,
    ) -> Self {
        let (event_publisher, _) = broadcast::channel(broadcast_capacity);
        Self {
            store,
            toasts,
            reporter,
            event_publisher,
        }
    }

    /// Runs steps (2)-(4) for a classified record: append, toast, report,
    /// event. Returns the record id.
    async fn dispatch(&self, record: ErrorRecord, options: &HandleOptions) -> Uuid {
        let id = record.id;
        self.store.append(record.clone()).await;

        if options.show_toast {
            self.toasts.show_toast(&record.message, record.severity);
        }

        if options.report {
            self.spawn_report(record.clone());
        }

        info!(%id, kind = ?record.kind, severity = ?record.severity, "Error handled");
        self.publish_event(ErrorCenterEvent::Recorded { record });
        id
    }

    /// Dispatches one best-effort report attempt without awaiting it.
    ///
    /// Multiple reports may be in flight at once with no ordering guarantee.
    /// Transport failures are logged and never retried.
    fn spawn_report(&self, record: ErrorRecord) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let reporter = Arc::clone(&self.reporter);
                handle.spawn(async move {
                    if let Err(e) = reporter.report(&record).await {
                        warn!(id = %record.id, "Error report not delivered: {}", e);
                    }
                });
            }
            Err(_) => {
                warn!(id = %record.id, "No async runtime available, error report skipped");
            }
        }
    }

    fn publish_event(&self, event: ErrorCenterEvent) {
        if self.event_publisher.send(event).is_err() {
            debug!("No error event subscribers");
        }
    }
}

#[async_trait]
impl ErrorService for DefaultErrorService {
    async fn handle_error(
        &self,
        error: &(dyn std::error::Error + Send + Sync),
        options: HandleOptions,
    ) -> Uuid {
        let record = classification::classify_runtime(error, &options);
        self.dispatch(record, &options).await
    }

    async fn handle_error_message(&self, message: &str, options: HandleOptions) -> Uuid {
        let record = classification::classify_runtime_message(message, &options);
        self.dispatch(record, &options).await
    }

    async fn handle_api_error(&self, payload: &ApiErrorPayload, options: HandleOptions) -> Uuid {
        let record = classification::classify_api(payload, &options);
        self.dispatch(record, &options).await
    }

    async fn handle_network_error(
        &self,
        error: &(dyn std::error::Error + Send + Sync),
        options: HandleOptions,
    ) -> Uuid {
        let record = classification::classify_network(error, &options);
        self.dispatch(record, &options).await
    }

    async fn handle_validation_error(
        &self,
        message: &str,
        field: Option<&str>,
        options: HandleOptions,
    ) -> Uuid {
        let record = classification::classify_validation(message, field, &options);
        self.dispatch(record, &options).await
    }

    async fn stored_errors(&self) -> Vec<ErrorRecord> {
        self.store.get_all().await
    }

    async fn clear_stored_errors(&self) {
        self.store.clear().await;
        self.publish_event(ErrorCenterEvent::HistoryCleared);
    }

    fn subscribe(&self) -> broadcast::Receiver<ErrorCenterEvent> {
        self.event_publisher.subscribe()
    }
}
