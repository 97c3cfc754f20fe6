use crate::cli::ServeArgs;
use crate::infra::{analyzer_config, AppState};
use crate::routes::with_deal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use deal_scout::config::AppConfig;
use deal_scout::deals::DealAnalyzer;
use deal_scout::error::AppError;
use deal_scout::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let analyzer = Arc::new(DealAnalyzer::new(analyzer_config(&config.analyzer)));

    let app = with_deal_routes(analyzer)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "deal scout api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
