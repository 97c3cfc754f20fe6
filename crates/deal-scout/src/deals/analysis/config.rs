use serde::{Deserialize, Serialize};

use super::super::report::LocaleProfile;

/// Default profitability cutoff: the per-area price must sit more than 5%
/// below the market reference before a listing counts as a deal.
pub const DEFAULT_PROFITABILITY_THRESHOLD: f64 = -0.05;

/// Tunables applied to every listing the analyzer scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub profitability_threshold: f64,
    pub locale: LocaleProfile,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            profitability_threshold: DEFAULT_PROFITABILITY_THRESHOLD,
            locale: LocaleProfile::default(),
        }
    }
}
