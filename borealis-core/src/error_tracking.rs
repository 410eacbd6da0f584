//! Error Tracking bridge to Sentry.
//!
//! This module initializes and talks to the external error-tracking service.
//! The domain layer's remote reporter forwards handled error records here as
//! capture events; everything in this module degrades to a no-op when no DSN
//! is configured, so callers never need to branch on whether tracking is
//! enabled.

use crate::config::ErrorTrackingConfig;
use sentry::ClientInitGuard;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Holds the Sentry client guard to keep the client alive. Set once during
/// startup; replacing it re-initializes the client.
static SENTRY_GUARD: Mutex<Option<ClientInitGuard>> = Mutex::new(None);

/// Severity of a captured event, decoupled from the Sentry SDK types so the
/// domain layer does not depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureLevel {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl CaptureLevel {
    fn to_sentry(self) -> sentry::Level {
        match self {
            CaptureLevel::Debug => sentry::Level::Debug,
            CaptureLevel::Info => sentry::Level::Info,
            CaptureLevel::Warning => sentry::Level::Warning,
            CaptureLevel::Error => sentry::Level::Error,
            CaptureLevel::Fatal => sentry::Level::Fatal,
        }
    }
}

/// Initializes the Sentry SDK for error tracking.
///
/// Call early in the application's lifecycle, before the first capture. With
/// no DSN (or an empty one) tracking stays disabled; an unparsable DSN is
/// reported and likewise leaves tracking disabled rather than aborting
/// startup.
pub fn init_error_tracking(config: &ErrorTrackingConfig) {
    let dsn_str = match &config.sentry_dsn {
        Some(dsn) if !dsn.is_empty() => dsn,
        Some(_) => {
            tracing::warn!("Sentry DSN provided but empty; error tracking disabled");
            return;
        }
        None => {
            tracing::info!("No Sentry DSN provided; error tracking disabled");
            return;
        }
    };

    let dsn = match dsn_str.parse() {
        Ok(dsn) => dsn,
        Err(e) => {
            tracing::warn!("Invalid Sentry DSN, error tracking disabled: {}", e);
            return;
        }
    };

    let options = sentry::ClientOptions {
        dsn: Some(dsn),
        release: config.sentry_release.clone().map(std::borrow::Cow::Owned),
        environment: config
            .sentry_environment
            .clone()
            .map(std::borrow::Cow::Owned),
        attach_stacktrace: true,
        ..Default::default()
    };

    let guard = sentry::init(options);
    let mut global_guard = SENTRY_GUARD.lock().unwrap();
    *global_guard = Some(guard);
    tracing::info!("Error tracking initialized");
}

/// Returns whether a Sentry client is currently active.
pub fn is_tracking_enabled() -> bool {
    sentry::Hub::current().client().is_some()
}

/// Returns a `SentryLayer` to be composed into a `tracing` subscriber, so
/// tracing events become Sentry breadcrumbs/events.
///
/// Call after [`init_error_tracking`]; without an active client the layer is
/// a no-op.
pub fn sentry_tracing_layer<S>() -> sentry_tracing::SentryLayer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    sentry_tracing::SentryLayer::default()
}

/// Captures a message-shaped event with optional structured context.
///
/// The context value, when it is a JSON object, is spread into a Sentry
/// context section field by field; any other JSON value is nested under a
/// single `value` key. A no-op when tracking is disabled.
pub fn capture_event(message: &str, level: CaptureLevel, context: Option<serde_json::Value>) {
    if !is_tracking_enabled() {
        return;
    }

    sentry::with_scope(
        |scope| {
            if let Some(ctx_val) = context {
                let mut map = BTreeMap::new();
                if let serde_json::Value::Object(obj_map) = ctx_val {
                    for (k, v) in obj_map {
                        map.insert(k, v);
                    }
                } else {
                    map.insert("value".to_string(), ctx_val);
                }
                let sentry_map = map
                    .into_iter()
                    .map(|(k, v)| (k, sentry::protocol::Value::from(v)))
                    .collect();
                scope.set_context("error_record", sentry::protocol::Context::Other(sentry_map));
            }
        },
        || {
            sentry::capture_message(message, level.to_sentry());
        },
    );
}

/// Adds a breadcrumb recording an event on the trail leading up to an issue.
///
/// A no-op when tracking is disabled.
pub fn add_breadcrumb(category: &str, message: &str, level: CaptureLevel) {
    if !is_tracking_enabled() {
        return;
    }
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: level.to_sentry(),
        ..Default::default()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ensure_tracking_disabled() {
        let mut guard = SENTRY_GUARD.lock().unwrap();
        *guard = None;
    }

    #[test]
    fn test_init_without_dsn_stays_disabled() {
        ensure_tracking_disabled();
        let config = ErrorTrackingConfig {
            sentry_dsn: None,
            sentry_environment: Some("test_env".to_string()),
            sentry_release: Some("test_release".to_string()),
        };
        init_error_tracking(&config);
        assert!(!is_tracking_enabled());
    }

    #[test]
    fn test_init_with_empty_dsn_stays_disabled() {
        ensure_tracking_disabled();
        let config = ErrorTrackingConfig {
            sentry_dsn: Some(String::new()),
            ..Default::default()
        };
        init_error_tracking(&config);
        assert!(!is_tracking_enabled());
    }

    #[test]
    fn test_init_with_invalid_dsn_stays_disabled() {
        ensure_tracking_disabled();
        let config = ErrorTrackingConfig {
            sentry_dsn: Some("not a dsn".to_string()),
            ..Default::default()
        };
        init_error_tracking(&config);
        assert!(!is_tracking_enabled());
    }

    #[test]
    fn test_capture_event_disabled_is_noop() {
        ensure_tracking_disabled();
        capture_event(
            "capture while disabled",
            CaptureLevel::Error,
            Some(json!({"key": "value"})),
        );
        assert!(!is_tracking_enabled());
    }

    #[test]
    fn test_add_breadcrumb_disabled_is_noop() {
        ensure_tracking_disabled();
        add_breadcrumb("test_category", "test message", CaptureLevel::Info);
        assert!(!is_tracking_enabled());
    }

    #[test]
    fn test_tracing_layer_constructs() {
        let _layer = sentry_tracing_layer::<tracing_subscriber::Registry>();
    }
}
