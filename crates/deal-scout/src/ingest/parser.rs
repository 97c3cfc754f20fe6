use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::{clean_text, parse_amount};
use super::ListingImportError;
use crate::deals::{ListingId, Property};

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<Property>, ListingImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        let row = record?;
        listings.push(row.into_property()?);
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Listing ID")]
    id: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Neighborhood")]
    neighborhood: String,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Rooms")]
    rooms: String,
    #[serde(rename = "Condition", default)]
    condition: String,
    #[serde(rename = "Requested Price")]
    requested_price: String,
    #[serde(rename = "Price Per Meter")]
    price_per_meter: String,
    #[serde(rename = "Market Average")]
    market_average: String,
    #[serde(rename = "Link", default, deserialize_with = "empty_string_as_none")]
    link: Option<String>,
}

impl ListingRow {
    fn into_property(self) -> Result<Property, ListingImportError> {
        Ok(Property {
            id: ListingId(clean_text(&self.id)),
            city: clean_text(&self.city),
            neighborhood: clean_text(&self.neighborhood),
            size_sqm: amount("Size", &self.size)?,
            rooms: amount("Rooms", &self.rooms)? as f32,
            condition: clean_text(&self.condition),
            requested_price: amount("Requested Price", &self.requested_price)?,
            price_per_meter_actual: amount("Price Per Meter", &self.price_per_meter)?,
            price_per_meter_average: amount("Market Average", &self.market_average)?,
            listing_url: self.link.map(|link| clean_text(&link)),
        })
    }
}

fn amount(column: &'static str, raw: &str) -> Result<f64, ListingImportError> {
    parse_amount(raw).ok_or_else(|| ListingImportError::Amount {
        column,
        value: raw.to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
