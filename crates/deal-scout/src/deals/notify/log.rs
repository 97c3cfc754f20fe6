use tracing::info;

use super::sink::{NotificationSink, SinkError};

/// Default sink writing each report to the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn send(&self, message: &str) -> Result<(), SinkError> {
        info!("{message}");
        Ok(())
    }
}
