//! The transient-notification (toast) port.

use crate::error_center::types::Severity;

/// Displays transient user-visible notifications.
///
/// The error service calls [`show_toast`](ToastNotifier::show_toast) and
/// never waits for or observes the outcome; display and auto-dismissal
/// timing are entirely the implementation's concern. Implementations must
/// not block and must not panic.
pub trait ToastNotifier: Send + Sync {
    fn show_toast(&self, message: &str, severity: Severity);
}

/// A notifier that writes toasts to the log.
///
/// The default collaborator for headless sessions and early startup, before
/// a real toast surface is wired up.
#[derive(Debug, Default)]
pub struct TracingToastNotifier;

impl ToastNotifier for TracingToastNotifier {
    fn show_toast(&self, message: &str, severity: Severity) {
        tracing::info!(?severity, "toast: {}", message);
    }
}
