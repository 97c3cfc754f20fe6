use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::deals::domain::{ListingId, Property};
use crate::deals::notify::{NotificationSink, NullSink, SinkError};
use crate::deals::{deal_router, AnalyzerConfig, DealAnalyzer};

/// Scenario from the Hadar HaCarmel feed: asking 8.66% under the market
/// per-sqm price.
pub(super) fn hadar_listing() -> Property {
    Property {
        id: ListingId("001".to_string()),
        city: "Haifa".to_string(),
        neighborhood: "Hadar Center".to_string(),
        size_sqm: 65.0,
        rooms: 3.0,
        condition: "Renovated".to_string(),
        requested_price: 950_000.0,
        price_per_meter_actual: 14_615.0,
        price_per_meter_average: 16_000.0,
        listing_url: None,
    }
}

/// Hebrew-language listing asking above the market average.
pub(super) fn overpriced_listing() -> Property {
    Property {
        id: ListingId("002".to_string()),
        city: "חיפה".to_string(),
        neighborhood: "הדר מרכז".to_string(),
        size_sqm: 70.0,
        rooms: 3.0,
        condition: "ישנה".to_string(),
        requested_price: 1_200_000.0,
        price_per_meter_actual: 17_143.0,
        price_per_meter_average: 16_000.0,
        listing_url: None,
    }
}

/// Listing sitting exactly 10% under market, with an ad link attached.
pub(super) fn bialik_listing() -> Property {
    Property {
        id: ListingId("003".to_string()),
        city: "Kiryat Bialik".to_string(),
        neighborhood: "Keren HaYesod".to_string(),
        size_sqm: 60.0,
        rooms: 3.0,
        condition: "Renovated".to_string(),
        requested_price: 1_080_000.0,
        price_per_meter_actual: 18_000.0,
        price_per_meter_average: 20_000.0,
        listing_url: Some("https://example.com/listings/003".to_string()),
    }
}

pub(super) fn analyzer_config() -> AnalyzerConfig {
    AnalyzerConfig::default()
}

pub(super) fn quiet_analyzer() -> DealAnalyzer {
    DealAnalyzer::with_sink(analyzer_config(), Box::new(NullSink))
}

pub(super) fn recording_analyzer() -> (DealAnalyzer, RecordingSink) {
    let sink = RecordingSink::default();
    let analyzer = DealAnalyzer::with_sink(analyzer_config(), Box::new(sink.clone()));
    (analyzer, sink)
}

#[derive(Default, Clone)]
pub(super) struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub(super) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&self, message: &str) -> Result<(), SinkError> {
        self.messages
            .lock()
            .expect("sink mutex poisoned")
            .push(message.to_string());
        Ok(())
    }
}

/// Records every message it is offered, then reports the transport as down.
#[derive(Default, Clone)]
pub(super) struct FailingSink {
    attempts: Arc<Mutex<Vec<String>>>,
}

impl FailingSink {
    pub(super) fn attempts(&self) -> Vec<String> {
        self.attempts.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for FailingSink {
    fn send(&self, message: &str) -> Result<(), SinkError> {
        self.attempts
            .lock()
            .expect("sink mutex poisoned")
            .push(message.to_string());
        Err(SinkError::Transport("telegram offline".to_string()))
    }
}

pub(super) fn analyzer_router() -> axum::Router {
    deal_router(Arc::new(quiet_analyzer()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
