use std::sync::{Arc, Mutex};

use deal_scout::deals::{
    format_message, AnalyzerConfig, DealAnalyzer, ListingId, LocaleProfile, NotificationSink,
    Property, SinkError, DEFAULT_PROFITABILITY_THRESHOLD,
};

fn listing(id: &str, requested_price: f64, size_sqm: f64, actual: f64, average: f64) -> Property {
    Property {
        id: ListingId(id.to_string()),
        city: "Haifa".to_string(),
        neighborhood: "Hadar Center".to_string(),
        size_sqm,
        rooms: 3.0,
        condition: "Renovated".to_string(),
        requested_price,
        price_per_meter_actual: actual,
        price_per_meter_average: average,
        listing_url: None,
    }
}

#[derive(Default, Clone)]
struct CapturingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CapturingSink {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for CapturingSink {
    fn send(&self, message: &str) -> Result<(), SinkError> {
        self.messages
            .lock()
            .expect("sink mutex poisoned")
            .push(message.to_string());
        Ok(())
    }
}

#[test]
fn every_analyzed_listing_reaches_the_sink() {
    let sink = CapturingSink::default();
    let analyzer = DealAnalyzer::with_sink(AnalyzerConfig::default(), Box::new(sink.clone()));

    let bargain = listing("001", 950_000.0, 65.0, 14_615.0, 16_000.0);
    let overpriced = listing("002", 1_200_000.0, 70.0, 17_143.0, 16_000.0);

    let first = analyzer.analyze(&bargain).expect("bargain is valid");
    let second = analyzer.analyze(&overpriced).expect("overpriced is valid");

    assert!(first.is_profitable);
    assert!(!second.is_profitable);

    // Reports go out for every analyzed listing, not only the deals.
    let messages = sink.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("lower than the market price per sqm"));
    assert!(messages[1].contains("higher than the market price per sqm"));
}

#[test]
fn default_threshold_separates_marginal_listings() {
    let analyzer = DealAnalyzer::new(AnalyzerConfig::default());

    let marginal = listing("010", 960_000.0, 60.0, 15_360.0, 16_000.0);
    let discounted = listing("011", 950_000.0, 65.0, 14_615.0, 16_000.0);

    let marginal = analyzer.analyze(&marginal).expect("marginal is valid");
    let discounted = analyzer.analyze(&discounted).expect("discounted is valid");

    assert_eq!(marginal.price_difference_percent, -0.04);
    assert!(!marginal.is_profitable);
    assert!(discounted.is_profitable);
}

#[test]
fn analyzer_and_free_function_render_the_same_report() {
    let analyzer = DealAnalyzer::new(AnalyzerConfig::default());
    let notification = analyzer
        .analyze(&listing("020", 1_080_000.0, 60.0, 18_000.0, 20_000.0))
        .expect("listing is valid");

    let from_analyzer = analyzer.format_message(&notification);
    let from_function = format_message(&notification, &LocaleProfile::default());

    assert_eq!(from_analyzer, from_function);
    assert!(from_analyzer.contains("10% lower than the market price per sqm"));
}

#[test]
fn custom_locale_flows_through_the_analyzer() {
    let config = AnalyzerConfig {
        profitability_threshold: DEFAULT_PROFITABILITY_THRESHOLD,
        locale: LocaleProfile {
            currency_symbol: "$".to_string(),
            thousands_separator: '.',
        },
    };
    let analyzer = DealAnalyzer::new(config);

    let notification = analyzer
        .analyze(&listing("030", 950_000.0, 65.0, 14_615.0, 16_000.0))
        .expect("listing is valid");

    let message = analyzer.format_message(&notification);
    assert!(message.contains("💰 Price: $950.000"));
    assert!(message.contains("🏷️ Price per sqm: $14.615"));
}
