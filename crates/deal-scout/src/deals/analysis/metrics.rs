use super::super::domain::Property;

/// Per-area metrics derived from a single listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DealMetrics {
    pub price_per_sqm: f64,
    pub price_difference_percent: f64,
}

/// Whole-listing totals against the market reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MarketTotals {
    pub market_value: f64,
    pub price_difference: f64,
}

/// Derives the two per-area metrics.
///
/// `price_per_sqm` is always the recomputed quotient; the deviation compares
/// the caller-supplied actual per-meter price against the market average, so
/// the two figures stay independent even when the feed disagrees with its own
/// arithmetic. Negative deviation means the listing prices below market.
pub(crate) fn measure(property: &Property) -> DealMetrics {
    let price_per_sqm = property.requested_price / property.size_sqm;
    let price_difference_percent = (property.price_per_meter_actual
        - property.price_per_meter_average)
        / property.price_per_meter_average;

    DealMetrics {
        price_per_sqm,
        price_difference_percent,
    }
}

/// Total market value (`average * size`) and its gap to the asking price.
/// A negative gap means the seller asks above market.
pub(crate) fn market_totals(property: &Property) -> MarketTotals {
    let market_value = property.price_per_meter_average * property.size_sqm;

    MarketTotals {
        market_value,
        price_difference: market_value - property.requested_price,
    }
}
