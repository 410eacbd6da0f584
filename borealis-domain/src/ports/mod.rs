//! Traits (ports) the domain logic expects outer layers to implement,
//! plus the implementations shipped with this crate.

pub mod reporting;
pub mod storage;
pub mod toast;

pub use reporting::{ErrorReporter, NullReporter, SentryReporter};
pub use storage::{FilesystemKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use toast::{ToastNotifier, TracingToastNotifier};
