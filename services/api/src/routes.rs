use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use deal_scout::deals::{deal_router, AnalyzerConfig, DealAnalyzer, NotificationView, NullSink};
use deal_scout::error::AppError;
use deal_scout::ingest::{ListingImportError, ListingImporter};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ScanRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
    #[serde(default)]
    pub(crate) profitable_only: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScanResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) threshold: f64,
    pub(crate) scanned: usize,
    pub(crate) profitable: usize,
    pub(crate) listings: Vec<NotificationView>,
}

pub(crate) fn with_deal_routes(analyzer: Arc<DealAnalyzer>) -> axum::Router {
    deal_router(analyzer.clone())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/deals/scan", axum::routing::post(scan_endpoint))
        .layer(Extension(analyzer))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Batch analysis over a pasted CSV export. The serving analyzer's threshold
/// applies unless the request carries its own. Each request gets a scanner
/// wired to a no-op sink, so scanning never pushes notifications; the
/// verdicts travel back in the response body instead.
pub(crate) async fn scan_endpoint(
    Extension(analyzer): Extension<Arc<DealAnalyzer>>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    let ScanRequest {
        csv,
        threshold,
        profitable_only,
    } = payload;

    let defaults = analyzer.config();
    let threshold = threshold.unwrap_or(defaults.profitability_threshold);
    let properties = ListingImporter::from_reader(Cursor::new(csv.into_bytes()))?;

    let scanner = DealAnalyzer::with_sink(
        AnalyzerConfig {
            profitability_threshold: threshold,
            locale: defaults.locale.clone(),
        },
        Box::new(NullSink),
    );

    let scanned = properties.len();
    let mut profitable = 0;
    let mut listings = Vec::with_capacity(scanned);

    for property in &properties {
        let notification = scanner
            .analyze(property)
            .map_err(ListingImportError::from)?;
        let view = NotificationView::from_notification(&notification, &scanner.config().locale);

        if view.is_profitable {
            profitable += 1;
        }
        if !profitable_only || view.is_profitable {
            listings.push(view);
        }
    }

    Ok(Json(ScanResponse {
        generated_at: Utc::now(),
        threshold,
        scanned,
        profitable,
        listings,
    }))
}
