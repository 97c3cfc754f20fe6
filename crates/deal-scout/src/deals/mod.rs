//! Listing profitability analysis and notification dispatch.
//!
//! A [`DealAnalyzer`] validates a [`Property`], derives its per-sqm price and
//! market comparison, classifies the result against the configured threshold,
//! and pushes a formatted report through the injected [`NotificationSink`].
//! The computed [`Notification`] is returned to the caller either way.

pub(crate) mod analysis;
pub mod domain;
pub mod notify;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use analysis::{AnalyzerConfig, DealAnalyzer, PricePosition, DEFAULT_PROFITABILITY_THRESHOLD};
pub use domain::{InvalidProperty, ListingId, Notification, Property};
pub use notify::{LogSink, NotificationSink, NullSink, SinkError};
pub use report::{format_message, LocaleProfile, NotificationView};
pub use router::deal_router;
