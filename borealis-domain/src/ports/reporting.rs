//! The remote error-reporting port and its shipped implementations.

use crate::error_center::types::{ErrorRecord, Severity};
use async_trait::async_trait;
use borealis_core::{error_tracking, CaptureLevel, CoreError};

/// Forwards error records to an external reporting endpoint.
///
/// The service issues exactly one `report` call per reportable record, on a
/// spawned task the caller never awaits. Transport, auth, and retry policy
/// are the implementation's concern; this subsystem does not retry.
#[async_trait]
pub trait ErrorReporter: Send + Sync {
    async fn report(&self, record: &ErrorRecord) -> Result<(), CoreError>;
}

/// Reporter used when remote reporting is disabled; accepts and drops
/// everything.
#[derive(Debug, Default)]
pub struct NullReporter;

#[async_trait]
impl ErrorReporter for NullReporter {
    async fn report(&self, _record: &ErrorRecord) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Reporter bridging to the Sentry-backed tracking module in
/// `borealis-core`.
///
/// When tracking is not initialized (no DSN) every call degrades to a no-op,
/// so this reporter can be wired unconditionally.
#[derive(Debug, Default)]
pub struct SentryReporter;

impl SentryReporter {
    pub fn new() -> Self {
        Self
    }

    fn capture_level(severity: Severity) -> CaptureLevel {
        match severity {
            Severity::Low => CaptureLevel::Info,
            Severity::Medium => CaptureLevel::Warning,
            Severity::High => CaptureLevel::Error,
            Severity::Critical => CaptureLevel::Fatal,
        }
    }
}

#[async_trait]
impl ErrorReporter for SentryReporter {
    async fn report(&self, record: &ErrorRecord) -> Result<(), CoreError> {
        let context = serde_json::to_value(record).map_err(|e| {
            CoreError::Internal(format!("Failed to serialize error record: {}", e))
        })?;
        error_tracking::capture_event(
            &record.message,
            Self::capture_level(record.severity),
            Some(context),
        );
        Ok(())
    }
}
