//! Domain layer for Borealis.
//!
//! This crate holds the error center (classification, bounded persistent
//! storage, and the orchestrating service) together with the outbound ports
//! it depends on: on-device key-value storage, the toast notifier, and the
//! remote error reporter.
//!
//! # Wiring
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use borealis_core::get_app_data_dir;
//! use borealis_domain::error_center::{DefaultErrorService, ErrorService, ErrorStore};
//! use borealis_domain::ports::{
//!     ErrorReporter, FilesystemKeyValueStore, NullReporter, SentryReporter,
//!     TracingToastNotifier,
//! };
//!
//! async fn build_error_service(
//!     config: &borealis_core::ErrorCenterConfig,
//! ) -> Arc<dyn ErrorService> {
//!     let storage = Arc::new(
//!         FilesystemKeyValueStore::new(get_app_data_dir().unwrap()).unwrap(),
//!     );
//!     let store = Arc::new(ErrorStore::from_config(storage, config).await);
//!     let reporter: Arc<dyn ErrorReporter> = if config.report_errors {
//!         Arc::new(SentryReporter::new())
//!     } else {
//!         Arc::new(NullReporter)
//!     };
//!     Arc::new(DefaultErrorService::new(
//!         store,
//!         Arc::new(TracingToastNotifier),
//!         reporter,
//!         32,
//!     ))
//! }
//! ```

// Re-export the core layer.
pub use borealis_core as core;

pub mod error_center;
pub mod ports;

pub use error_center::{
    ApiErrorPayload, DefaultErrorService, ErrorCenterError, ErrorCenterEvent, ErrorKind,
    ErrorRecord, ErrorService, ErrorStore, HandleOptions, Severity,
};
pub use ports::{
    ErrorReporter, FilesystemKeyValueStore, InMemoryKeyValueStore, KeyValueStore, NullReporter,
    SentryReporter, ToastNotifier, TracingToastNotifier,
};
