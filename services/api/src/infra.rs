use deal_scout::config::AnalyzerSettings;
use deal_scout::deals::AnalyzerConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn analyzer_config(settings: &AnalyzerSettings) -> AnalyzerConfig {
    AnalyzerConfig {
        profitability_threshold: settings.profitability_threshold,
        ..AnalyzerConfig::default()
    }
}

pub(crate) fn parse_threshold(raw: &str) -> Result<f64, String> {
    let parsed = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;

    if !parsed.is_finite() {
        return Err(format!("threshold '{raw}' must be a finite number"));
    }

    Ok(parsed)
}
