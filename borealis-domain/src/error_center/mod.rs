//! The error center: classification, bounded persistent storage, and
//! orchestration of handled errors.
//!
//! Entry point is the [`ErrorService`] trait and its
//! [`DefaultErrorService`] implementation; see the crate docs for wiring.

pub mod classification;
pub mod errors;
pub mod events;
pub mod service;
pub mod store;
pub mod types;

pub use classification::{
    classify_api, classify_network, classify_runtime, classify_runtime_message,
    classify_validation,
};
pub use errors::ErrorCenterError;
pub use events::ErrorCenterEvent;
pub use service::{DefaultErrorService, ErrorService};
pub use store::ErrorStore;
pub use types::{ApiErrorPayload, ErrorKind, ErrorRecord, HandleOptions, Severity};
