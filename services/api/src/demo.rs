use chrono::Local;
use clap::Args;
use deal_scout::deals::{
    AnalyzerConfig, DealAnalyzer, ListingId, NotificationView, NullSink, Property,
    DEFAULT_PROFITABILITY_THRESHOLD,
};
use deal_scout::error::AppError;
use deal_scout::ingest::{ListingImportError, ListingImporter};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScanArgs {
    /// Path to a listing export CSV
    #[arg(long)]
    pub(crate) listings: PathBuf,
    /// Override the profitability threshold (fraction, e.g. -0.05)
    #[arg(long, value_parser = crate::infra::parse_threshold)]
    pub(crate) threshold: Option<f64>,
    /// Print profitable listings only
    #[arg(long)]
    pub(crate) profitable_only: bool,
    /// Print the full notification message under each profitable listing
    #[arg(long)]
    pub(crate) show_messages: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the profitability threshold (fraction, e.g. -0.05)
    #[arg(long, value_parser = crate::infra::parse_threshold)]
    pub(crate) threshold: Option<f64>,
    /// Print the full notification message under each profitable listing
    #[arg(long)]
    pub(crate) show_messages: bool,
}

pub(crate) fn run_scan(args: ScanArgs) -> Result<(), AppError> {
    let ScanArgs {
        listings,
        threshold,
        profitable_only,
        show_messages,
    } = args;

    let properties = ListingImporter::from_path(&listings)?;
    let analyzer = scan_analyzer(threshold);

    println!("Deal scan");
    println!("Source: {}", listings.display());
    render_scan(&analyzer, &properties, profitable_only, show_messages)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        threshold,
        show_messages,
    } = args;

    let properties = sample_listings();
    let analyzer = scan_analyzer(threshold);

    println!("Deal scout demo");
    println!("Source: bundled sample listings");
    render_scan(&analyzer, &properties, false, show_messages)
}

fn scan_analyzer(threshold: Option<f64>) -> DealAnalyzer {
    let threshold = threshold.unwrap_or(DEFAULT_PROFITABILITY_THRESHOLD);
    DealAnalyzer::with_sink(
        AnalyzerConfig {
            profitability_threshold: threshold,
            ..AnalyzerConfig::default()
        },
        Box::new(NullSink),
    )
}

fn render_scan(
    analyzer: &DealAnalyzer,
    properties: &[Property],
    profitable_only: bool,
    show_messages: bool,
) -> Result<(), AppError> {
    let locale = &analyzer.config().locale;
    let threshold = analyzer.config().profitability_threshold;
    let today = Local::now().date_naive();

    println!(
        "Threshold: {}% under market (evaluated {})",
        locale.format_percent(threshold.abs() * 100.0),
        today
    );
    println!();

    let mut deals = 0;
    for property in properties {
        let notification = analyzer
            .analyze(property)
            .map_err(ListingImportError::from)?;
        let view = NotificationView::from_notification(&notification, locale);

        if view.is_profitable {
            deals += 1;
        }
        if profitable_only && !view.is_profitable {
            continue;
        }

        let direction = if view.price_difference_percent < 0.0 {
            "below"
        } else {
            "above"
        };
        let verdict = if view.is_profitable { "DEAL" } else { "pass" };
        println!(
            "- {} | {}, {} | {} | {}% {} market | {}",
            view.listing_id.0,
            view.neighborhood,
            view.city,
            locale.format_currency(view.requested_price),
            locale.format_percent(view.price_difference_percent.abs() * 100.0),
            direction,
            verdict
        );
        if let Some(url) = &view.listing_url {
            println!("  link: {url}");
        }
        if show_messages && view.is_profitable {
            for line in view.message.lines() {
                println!("    {line}");
            }
            println!();
        }
    }

    println!();
    println!(
        "{deals} of {} listings beat the threshold",
        properties.len()
    );
    Ok(())
}

fn sample_listings() -> Vec<Property> {
    vec![
        Property {
            id: ListingId("TLV-104".to_string()),
            city: "Tel Aviv".to_string(),
            neighborhood: "Old North".to_string(),
            size_sqm: 95.0,
            rooms: 4.0,
            condition: "Renovated".to_string(),
            requested_price: 3_850_000.0,
            price_per_meter_actual: 40_526.0,
            price_per_meter_average: 43_500.0,
            listing_url: Some("https://listings.example/tlv-104".to_string()),
        },
        Property {
            id: ListingId("HRZ-021".to_string()),
            city: "Herzliya".to_string(),
            neighborhood: "Herzliya Pituach".to_string(),
            size_sqm: 200.0,
            rooms: 6.0,
            condition: "New".to_string(),
            requested_price: 12_500_000.0,
            price_per_meter_actual: 62_500.0,
            price_per_meter_average: 61_000.0,
            listing_url: None,
        },
        Property {
            id: ListingId("HFA-310".to_string()),
            city: "Haifa".to_string(),
            neighborhood: "Carmel Center".to_string(),
            size_sqm: 75.0,
            rooms: 3.0,
            condition: "Needs renovation".to_string(),
            requested_price: 1_450_000.0,
            price_per_meter_actual: 19_333.0,
            price_per_meter_average: 21_800.0,
            listing_url: Some("https://listings.example/hfa-310".to_string()),
        },
        Property {
            id: ListingId("CSR-007".to_string()),
            city: "Caesarea".to_string(),
            neighborhood: "Golf District".to_string(),
            size_sqm: 350.0,
            rooms: 7.0,
            condition: "Excellent".to_string(),
            requested_price: 8_900_000.0,
            price_per_meter_actual: 25_429.0,
            price_per_meter_average: 26_000.0,
            listing_url: None,
        },
        Property {
            id: ListingId("JLM-118".to_string()),
            city: "Jerusalem".to_string(),
            neighborhood: "Nachlaot".to_string(),
            size_sqm: 35.0,
            rooms: 1.5,
            condition: "Renovated".to_string(),
            requested_price: 1_950_000.0,
            price_per_meter_actual: 55_714.0,
            price_per_meter_average: 54_000.0,
            listing_url: None,
        },
        Property {
            id: ListingId("RAA-042".to_string()),
            city: "Ra'anana".to_string(),
            neighborhood: "Kiryat Ganim".to_string(),
            size_sqm: 160.0,
            rooms: 5.0,
            condition: "Good".to_string(),
            requested_price: 4_200_000.0,
            price_per_meter_actual: 26_250.0,
            price_per_meter_average: 28_500.0,
            listing_url: Some("https://listings.example/raa-042".to_string()),
        },
    ]
}
