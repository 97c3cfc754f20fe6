mod config;
mod metrics;
mod policy;

pub use config::{AnalyzerConfig, DEFAULT_PROFITABILITY_THRESHOLD};
pub use policy::PricePosition;

pub(crate) use metrics::market_totals;

use chrono::Utc;
use tracing::warn;

use super::domain::{InvalidProperty, Notification, Property};
use super::notify::{LogSink, NotificationSink};
use super::report;

/// Stateless analyzer applying the profitability policy to incoming listings.
///
/// Holds its configuration and outbound sink, both injected at construction;
/// every call is independent, so a single instance can be shared across
/// concurrent callers.
pub struct DealAnalyzer {
    config: AnalyzerConfig,
    sink: Box<dyn NotificationSink>,
}

impl DealAnalyzer {
    /// Analyzer wired to the default logging sink.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: AnalyzerConfig, sink: Box<dyn NotificationSink>) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Validate a listing, derive its metrics, and classify profitability.
    ///
    /// The formatted report goes to the sink best effort: a sink failure is
    /// logged as a warning and the computed [`Notification`] is returned
    /// regardless. Nothing reaches the sink when validation fails.
    pub fn analyze(&self, property: &Property) -> Result<Notification, InvalidProperty> {
        property.validate()?;

        let deal = metrics::measure(property);
        let is_profitable = policy::is_profitable(
            deal.price_difference_percent,
            self.config.profitability_threshold,
        );

        let notification = Notification {
            property: property.clone(),
            price_per_sqm: deal.price_per_sqm,
            price_difference_percent: deal.price_difference_percent,
            is_profitable,
            created_at: Utc::now(),
        };

        let message = report::format_message(&notification, &self.config.locale);
        if let Err(error) = self.sink.send(&message) {
            warn!(
                listing = %notification.property.id.0,
                %error,
                "notification sink rejected message"
            );
        }

        Ok(notification)
    }

    /// Render a notification with this analyzer's locale profile.
    pub fn format_message(&self, notification: &Notification) -> String {
        report::format_message(notification, &self.config.locale)
    }
}
