use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::analysis::{market_totals, PricePosition};
use super::super::domain::{ListingId, Notification};
use super::locale::LocaleProfile;

/// Flattened notification for API responses and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationView {
    pub listing_id: ListingId,
    pub city: String,
    pub neighborhood: String,
    pub size_sqm: f64,
    pub rooms: f32,
    pub condition: String,
    pub requested_price: f64,
    pub price_per_sqm: f64,
    pub price_difference_percent: f64,
    pub is_profitable: bool,
    pub market_position: PricePosition,
    pub market_position_label: &'static str,
    pub total_market_value: f64,
    pub total_price_difference: f64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_url: Option<String>,
}

impl NotificationView {
    pub fn from_notification(notification: &Notification, locale: &LocaleProfile) -> Self {
        let property = &notification.property;
        let totals = market_totals(property);
        let position = PricePosition::from_total_difference(totals.price_difference);

        Self {
            listing_id: property.id.clone(),
            city: property.city.clone(),
            neighborhood: property.neighborhood.clone(),
            size_sqm: property.size_sqm,
            rooms: property.rooms,
            condition: property.condition.clone(),
            requested_price: property.requested_price,
            price_per_sqm: notification.price_per_sqm,
            price_difference_percent: notification.price_difference_percent,
            is_profitable: notification.is_profitable,
            market_position: position,
            market_position_label: position.label(),
            total_market_value: totals.market_value,
            total_price_difference: totals.price_difference,
            message: super::message::format_message(notification, locale),
            created_at: notification.created_at,
            listing_url: property.listing_url.clone(),
        }
    }
}
