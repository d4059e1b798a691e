//! Fixtures

use std::{fs, path::Path};

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    dates::{DateRange, parse_iso_date},
    fixtures::{gift_cards::GiftCardFixture, products::ProductFixture},
};

pub mod gift_cards;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Date is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Field value is longer than allowed
    #[error("{field} {value:?} is longer than {max} characters")]
    TooLong {
        /// Name of the offending field
        field: &'static str,
        /// Value as found in the fixture
        value: String,
        /// Maximum number of characters
        max: usize,
    },

    /// Validity period ends before it starts
    #[error("{0} ends before it starts")]
    EndBeforeStart(String),

    /// Catalog assembly error
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Catalog file contents
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFixture {
    /// Map of product code -> product fixture
    #[serde(default)]
    pub products: FxHashMap<String, ProductFixture>,

    /// Gift cards
    #[serde(default)]
    pub gift_cards: Vec<GiftCardFixture>,
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new();

        // Sorted so price tiers keep a stable insertion order across runs.
        let mut products: Vec<_> = fixture.products.into_iter().collect();
        products.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (code, product_fixture) in products {
            let (product, tiers) = product_fixture.into_product(code)?;
            let code = product.code.clone();

            catalog.add_product(product)?;

            for tier in tiers {
                catalog.add_price(&code, tier)?;
            }
        }

        for gift_card_fixture in fixture.gift_cards {
            catalog.add_gift_card(gift_card_fixture.try_into()?);
        }

        Ok(catalog)
    }
}

impl Catalog {
    /// Build a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or describes an invalid catalog.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        fixture.try_into()
    }

    /// Build a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }
}

/// Rejects `value` if it is longer than `max` characters.
pub(crate) fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), FixtureError> {
    if value.chars().count() > max {
        return Err(FixtureError::TooLong {
            field,
            value: value.to_string(),
            max,
        });
    }

    Ok(())
}

/// Parses a fixture date string.
pub(crate) fn parse_date(value: &str) -> Result<Date, FixtureError> {
    parse_iso_date(value).ok_or_else(|| FixtureError::InvalidDate(value.to_string()))
}

/// Builds a validity period for the record described by `label`.
pub(crate) fn parse_validity(
    label: &str,
    start: &str,
    end: Option<&str>,
) -> Result<DateRange, FixtureError> {
    let range = DateRange::new(parse_date(start)?, end.map(parse_date).transpose()?);

    if range.is_inverted() {
        return Err(FixtureError::EndBeforeStart(label.to_string()));
    }

    Ok(range)
}
