use borealis_core::CoreError;
use thiserror::Error;

/// Failures internal to the error center.
///
/// These never cross a `handle_*` boundary: the service and store reduce
/// them to logged warnings. They exist so the persistence helpers can
/// describe what went wrong with full context.
#[derive(Debug, Error)]
pub enum ErrorCenterError {
    #[error("Error history persistence failed during '{operation}': {message}")]
    Persistence {
        operation: String,
        message: String,
        #[source]
        source: CoreError,
    },

    #[error("Error history serialization failed: {0}")]
    Serialization(String),

    #[error("Internal error center failure: {0}")]
    Internal(String),
}

impl ErrorCenterError {
    pub fn persistence(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: CoreError,
    ) -> Self {
        ErrorCenterError::Persistence {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }
}
