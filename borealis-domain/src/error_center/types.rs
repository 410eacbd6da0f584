use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Classification axis of a handled error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Exceptions and other in-process failures.
    Runtime,
    /// A failed request against an application API (carries an HTTP status).
    Api,
    /// Transport-level failures: timeouts, unreachable hosts.
    Network,
    /// Rejected user input, tied to an optional input field.
    Validation,
}

/// Urgency axis of a handled error.
///
/// Ordered so that records can be sorted by urgency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Normalized, immutable representation of one handled error.
///
/// Records are constructed by the classification functions and never mutated
/// afterwards; the store only appends, evicts, and clones them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: String,
    /// Opaque key-value context. Persisted and displayed, never interpreted.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
    pub timestamp: DateTime<Utc>,
    /// The offending input name; validation records only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorRecord {
    /// Creates a record with a fresh id and a monotonic timestamp.
    pub fn new(
        kind: ErrorKind,
        severity: Severity,
        message: impl Into<String>,
        context: HashMap<String, serde_json::Value>,
        field: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            severity,
            message: message.into(),
            context,
            timestamp: monotonic_now(),
            field,
        }
    }
}

/// Raw API error payload as produced by an HTTP client layer.
///
/// All fields are optional; classification is total and falls back to a
/// generic description when the payload carries nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Per-call options accepted by every `handle_*` entry point.
#[derive(Debug, Clone, Default)]
pub struct HandleOptions {
    /// Overrides the severity derived from the error kind.
    pub severity: Option<Severity>,
    /// Show a transient toast notification for this error. Default `false`.
    pub show_toast: bool,
    /// Forward the record to the remote reporter (fire-and-forget).
    /// Default `false`.
    pub report: bool,
    /// Extra context merged into the record. The map is read, never mutated.
    pub context: HashMap<String, serde_json::Value>,
}

static LAST_TIMESTAMP: Lazy<Mutex<DateTime<Utc>>> =
    Lazy::new(|| Mutex::new(DateTime::<Utc>::MIN_UTC));

/// Returns the current instant, clamped so that consecutive calls within
/// this process never go backwards even if the wall clock does.
///
/// Record timestamps must be non-decreasing in insertion order; eviction in
/// the store relies on insertion order matching time order.
pub(crate) fn monotonic_now() -> DateTime<Utc> {
    let now = Utc::now();
    let mut last = LAST_TIMESTAMP.lock().unwrap();
    let stamped = if now > *last { now } else { *last };
    *last = stamped;
    stamped
}
