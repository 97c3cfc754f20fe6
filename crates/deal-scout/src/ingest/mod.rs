//! CSV import of listing exports into analyzable [`Property`] values.

mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::deals::{InvalidProperty, Property};

#[derive(Debug)]
pub enum ListingImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Amount {
        column: &'static str,
        value: String,
    },
    Listing(InvalidProperty),
}

impl std::fmt::Display for ListingImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingImportError::Io(err) => write!(f, "failed to read listing export: {}", err),
            ListingImportError::Csv(err) => write!(f, "invalid listing CSV data: {}", err),
            ListingImportError::Amount { column, value } => {
                write!(f, "could not parse {} value '{}' as an amount", column, value)
            }
            ListingImportError::Listing(err) => {
                write!(f, "listing export contains an invalid property: {}", err)
            }
        }
    }
}

impl std::error::Error for ListingImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingImportError::Io(err) => Some(err),
            ListingImportError::Csv(err) => Some(err),
            ListingImportError::Amount { .. } => None,
            ListingImportError::Listing(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ListingImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ListingImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<InvalidProperty> for ListingImportError {
    fn from(err: InvalidProperty) -> Self {
        Self::Listing(err)
    }
}

pub struct ListingImporter;

impl ListingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Property>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a listing export, dropping repeated listing ids (first row wins)
    /// and rejecting the whole export on the first invalid listing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Property>, ListingImportError> {
        let mut listings = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for property in parser::parse_records(reader)? {
            if !seen.insert(property.id.0.clone()) {
                continue;
            }

            property.validate()?;
            listings.push(property);
        }

        Ok(listings)
    }
}
