use super::types::ErrorRecord;

/// Events published by the error service on its broadcast channel.
///
/// UI layers subscribe to drive error lists and badges; there is no
/// guarantee a subscriber exists, and publishing to nobody is not an error.
#[derive(Debug, Clone)]
pub enum ErrorCenterEvent {
    /// A raw error was classified and appended to the store.
    Recorded { record: ErrorRecord },
    /// The stored error history was cleared.
    HistoryCleared,
}
