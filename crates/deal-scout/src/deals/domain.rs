use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for advertised listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Listing snapshot as supplied by an ingestion collaborator.
///
/// `price_per_meter_actual` is caller-supplied and should equal
/// `requested_price / size_sqm`, but the analyzer never re-derives it: the
/// recomputed quotient lives in [`Notification::price_per_sqm`] and the two
/// can diverge when the source feed disagrees with its own arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: ListingId,
    pub city: String,
    pub neighborhood: String,
    pub size_sqm: f64,
    pub rooms: f32,
    pub condition: String,
    pub requested_price: f64,
    pub price_per_meter_actual: f64,
    pub price_per_meter_average: f64,
    pub listing_url: Option<String>,
}

impl Property {
    /// Checks the invariants every analysis precondition relies on.
    ///
    /// Division by `size_sqm` and `price_per_meter_average` happens downstream,
    /// so both must be strictly positive here; the remaining numeric fields
    /// must be finite and positive (rooms may be zero for studio-style ads).
    pub fn validate(&self) -> Result<(), InvalidProperty> {
        if self.id.0.trim().is_empty() {
            return Err(InvalidProperty::MissingId);
        }
        if self.city.trim().is_empty() {
            return Err(InvalidProperty::MissingText { field: "city" });
        }
        if self.neighborhood.trim().is_empty() {
            return Err(InvalidProperty::MissingText {
                field: "neighborhood",
            });
        }

        for (field, value) in [
            ("size_sqm", self.size_sqm),
            ("requested_price", self.requested_price),
            ("price_per_meter_actual", self.price_per_meter_actual),
            ("price_per_meter_average", self.price_per_meter_average),
        ] {
            if !value.is_finite() {
                return Err(InvalidProperty::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(InvalidProperty::NonPositive { field, value });
            }
        }

        if !self.rooms.is_finite() {
            return Err(InvalidProperty::NonFinite {
                field: "rooms",
                value: f64::from(self.rooms),
            });
        }
        if self.rooms < 0.0 {
            return Err(InvalidProperty::NegativeRooms { value: self.rooms });
        }

        Ok(())
    }
}

/// Derived analysis result pairing the untouched listing with its metrics.
///
/// Built exactly once per analyzer invocation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub property: Property,
    pub price_per_sqm: f64,
    pub price_difference_percent: f64,
    pub is_profitable: bool,
    pub created_at: DateTime<Utc>,
}

/// Precondition violations rejecting a listing before any metric is computed.
#[derive(Debug, thiserror::Error)]
pub enum InvalidProperty {
    #[error("listing id must not be empty")]
    MissingId,
    #[error("{field} must not be empty")]
    MissingText { field: &'static str },
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("rooms must not be negative, got {value}")]
    NegativeRooms { value: f32 },
}
