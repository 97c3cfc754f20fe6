mod log;
mod sink;

pub use log::LogSink;
pub use sink::{NotificationSink, NullSink, SinkError};
