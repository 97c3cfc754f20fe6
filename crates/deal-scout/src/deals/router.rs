use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::analysis::DealAnalyzer;
use super::domain::Property;
use super::report::NotificationView;

/// Router builder exposing the single-listing analysis endpoint.
pub fn deal_router(analyzer: Arc<DealAnalyzer>) -> Router {
    Router::new()
        .route("/api/v1/deals/analyze", post(analyze_handler))
        .with_state(analyzer)
}

pub(crate) async fn analyze_handler(
    State(analyzer): State<Arc<DealAnalyzer>>,
    axum::Json(property): axum::Json<Property>,
) -> Response {
    match analyzer.analyze(&property) {
        Ok(notification) => {
            let view =
                NotificationView::from_notification(&notification, &analyzer.config().locale);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
