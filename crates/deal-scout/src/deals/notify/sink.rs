/// Trait describing outbound notification channels (e.g., Telegram or e-mail
/// adapters).
pub trait NotificationSink: Send + Sync {
    fn send(&self, message: &str) -> Result<(), SinkError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sink that drops every message, for callers that only want the returned
/// analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn send(&self, _message: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
