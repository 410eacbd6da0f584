//! Classification of raw failures into [`ErrorRecord`]s.
//!
//! Every function here is pure, deterministic, and total: no input produces a
//! panic or an error, however malformed. Unusable payload fields fall back to
//! string coercion or a generic description.

use super::types::{ApiErrorPayload, ErrorKind, ErrorRecord, HandleOptions, Severity};
use std::collections::HashMap;

/// Classifies an in-process failure. Severity defaults to [`Severity::Medium`].
pub fn classify_runtime(
    error: &(dyn std::error::Error + Send + Sync),
    options: &HandleOptions,
) -> ErrorRecord {
    build_record(
        ErrorKind::Runtime,
        options.severity.unwrap_or(Severity::Medium),
        error.to_string(),
        HashMap::new(),
        None,
        options,
    )
}

/// The string-message arm of runtime classification.
pub fn classify_runtime_message(message: &str, options: &HandleOptions) -> ErrorRecord {
    build_record(
        ErrorKind::Runtime,
        options.severity.unwrap_or(Severity::Medium),
        message.to_string(),
        HashMap::new(),
        None,
        options,
    )
}

/// Classifies a failed API request.
///
/// Severity is derived from the HTTP status: 5xx and auth failures (401/403)
/// are [`Severity::High`]; everything else, including a missing status, is
/// [`Severity::Medium`]. `options.severity` overrides the derivation. The
/// payload's status, code, and details are folded into the record context so
/// they survive alongside the message; caller-supplied context wins on key
/// collisions.
pub fn classify_api(payload: &ApiErrorPayload, options: &HandleOptions) -> ErrorRecord {
    let derived = match payload.status {
        Some(status) if status >= 500 => Severity::High,
        Some(401) | Some(403) => Severity::High,
        _ => Severity::Medium,
    };

    let message = payload
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| match payload.status {
            Some(status) => format!("API request failed with status {}", status),
            None => "API request failed".to_string(),
        });

    let mut context = HashMap::new();
    if let Some(status) = payload.status {
        context.insert("status".to_string(), serde_json::json!(status));
    }
    if let Some(code) = &payload.code {
        context.insert("code".to_string(), serde_json::json!(code));
    }
    if let Some(details) = &payload.details {
        context.insert("details".to_string(), details.clone());
    }

    build_record(
        ErrorKind::Api,
        options.severity.unwrap_or(derived),
        message,
        context,
        None,
        options,
    )
}

/// Classifies a transport-level failure. Severity defaults to
/// [`Severity::Medium`].
pub fn classify_network(
    error: &(dyn std::error::Error + Send + Sync),
    options: &HandleOptions,
) -> ErrorRecord {
    build_record(
        ErrorKind::Network,
        options.severity.unwrap_or(Severity::Medium),
        error.to_string(),
        HashMap::new(),
        None,
        options,
    )
}

/// Classifies rejected user input. Severity defaults to [`Severity::Low`].
pub fn classify_validation(
    message: &str,
    field: Option<&str>,
    options: &HandleOptions,
) -> ErrorRecord {
    build_record(
        ErrorKind::Validation,
        options.severity.unwrap_or(Severity::Low),
        message.to_string(),
        HashMap::new(),
        field.map(|f| f.to_string()),
        options,
    )
}

/// Merges the caller's context over the classifier-derived context and
/// assembles the record. The caller's map is only read.
fn build_record(
    kind: ErrorKind,
    severity: Severity,
    message: String,
    mut context: HashMap<String, serde_json::Value>,
    field: Option<String>,
    options: &HandleOptions,
) -> ErrorRecord {
    for (key, value) in &options.context {
        context.insert(key.clone(), value.clone());
    }
    ErrorRecord::new(kind, severity, message, context, field)
}
