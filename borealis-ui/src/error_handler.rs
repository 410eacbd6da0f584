//! UI binding for the error center.
//!
//! UI components hold an [`ErrorHandlerHandle`] instead of the service
//! directly: the handle is cheap to clone, so every call site gets a stable
//! callable reference to the one shared service instance without threading
//! `Arc<dyn ErrorService>` through component props.

use borealis_domain::error_center::{
    ApiErrorPayload, ErrorCenterEvent, ErrorRecord, ErrorService, HandleOptions,
};
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Cheap-clone handle to the shared [`ErrorService`].
#[derive(Clone)]
pub struct ErrorHandlerHandle {
    service: Arc<dyn ErrorService>,
}

impl ErrorHandlerHandle {
    pub fn new(service: Arc<dyn ErrorService>) -> Self {
        Self { service }
    }

    /// Handles an in-process failure.
    pub async fn handle_error(
        &self,
        error: &(dyn std::error::Error + Send + Sync),
        options: HandleOptions,
    ) -> Uuid {
        self.service.handle_error(error, options).await
    }

    /// Handles an in-process failure described only by a message.
    pub async fn handle_error_message(&self, message: &str, options: HandleOptions) -> Uuid {
        self.service.handle_error_message(message, options).await
    }

    /// Handles a failed API request.
    pub async fn handle_api_error(
        &self,
        payload: &ApiErrorPayload,
        options: HandleOptions,
    ) -> Uuid {
        self.service.handle_api_error(payload, options).await
    }

    /// Handles a transport-level failure.
    pub async fn handle_network_error(
        &self,
        error: &(dyn std::error::Error + Send + Sync),
        options: HandleOptions,
    ) -> Uuid {
        self.service.handle_network_error(error, options).await
    }

    /// Handles rejected user input.
    pub async fn handle_validation_error(
        &self,
        message: &str,
        field: Option<&str>,
        options: HandleOptions,
    ) -> Uuid {
        self.service
            .handle_validation_error(message, field, options)
            .await
    }

    /// Snapshot of the stored records, most-recent-first.
    pub async fn stored_errors(&self) -> Vec<ErrorRecord> {
        self.service.stored_errors().await
    }

    /// Empties the stored error history.
    pub async fn clear_stored_errors(&self) {
        self.service.clear_stored_errors().await
    }

    /// Subscribes to the service's event stream, e.g. to drive an error
    /// badge or list view.
    pub fn subscribe(&self) -> broadcast::Receiver<ErrorCenterEvent> {
        self.service.subscribe()
    }
}
