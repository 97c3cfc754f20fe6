use std::fmt::Write as _;

use super::super::analysis::{market_totals, PricePosition};
use super::super::domain::Notification;
use super::locale::LocaleProfile;

/// Render the analysis summary pushed to notification sinks.
///
/// The layout is fixed: headline, location and price block, the per-sqm
/// comparison, the total-value breakdown, and the ad link placeholder. Size
/// and room counts are interpolated as-is, so `65.0` sqm prints as `65` and a
/// half room stays `3.5`.
pub fn format_message(notification: &Notification, locale: &LocaleProfile) -> String {
    let property = &notification.property;
    let totals = market_totals(property);
    let total_difference_percent = totals.price_difference / totals.market_value * 100.0;
    let position = PricePosition::from_total_difference(totals.price_difference);

    let direction = if notification.price_difference_percent < 0.0 {
        "lower"
    } else {
        "higher"
    };

    let mut content = String::new();
    writeln!(&mut content, "📢 Property Analysis Results").expect("write headline");
    writeln!(&mut content).expect("write separator");
    writeln!(
        &mut content,
        "📍 Location: {}, {}",
        property.neighborhood, property.city
    )
    .expect("write location");
    writeln!(
        &mut content,
        "💰 Price: {}",
        locale.format_currency(property.requested_price)
    )
    .expect("write price");
    writeln!(
        &mut content,
        "📏 Size: {} sqm ({} rooms)",
        property.size_sqm, property.rooms
    )
    .expect("write size");
    writeln!(
        &mut content,
        "🏷️ Price per sqm: {}",
        locale.format_currency(notification.price_per_sqm)
    )
    .expect("write per-sqm price");
    writeln!(
        &mut content,
        "📊 {}% {} than the market price per sqm ({})",
        locale.format_percent(notification.price_difference_percent.abs() * 100.0),
        direction,
        locale.format_currency(property.price_per_meter_average)
    )
    .expect("write comparison");
    writeln!(&mut content, "💵 Total Price Analysis:").expect("write totals heading");
    writeln!(
        &mut content,
        "   - Market Value: {}",
        locale.format_currency(totals.market_value)
    )
    .expect("write market value");
    writeln!(
        &mut content,
        "   - {} by: {} ({}%)",
        position.label(),
        locale.format_currency(totals.price_difference.abs()),
        locale.format_percent(total_difference_percent.abs())
    )
    .expect("write total difference");
    writeln!(&mut content, "💡 Condition: {}", property.condition).expect("write condition");
    write!(&mut content, "🔗 Ad link: [Here]").expect("write ad link");
    content
}
