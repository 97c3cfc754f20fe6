use serde::Serialize;

/// Strict comparison: a deviation exactly at the threshold is not a deal.
pub(crate) fn is_profitable(price_difference_percent: f64, threshold: f64) -> bool {
    price_difference_percent < threshold
}

/// Side of the market the total asking price lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePosition {
    Underpriced,
    Overpriced,
}

impl PricePosition {
    /// Classifies by the sign of `market value - asking price`; an exact
    /// at-market listing lands on `Underpriced`.
    pub(crate) fn from_total_difference(total_price_difference: f64) -> Self {
        if total_price_difference < 0.0 {
            Self::Overpriced
        } else {
            Self::Underpriced
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Underpriced => "Underpriced",
            Self::Overpriced => "Overpriced",
        }
    }
}
