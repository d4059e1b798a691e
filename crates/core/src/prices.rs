//! Prices

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Deref,
};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::dates::{DateRange, Dated};

/// Maximum length of a price tier name.
pub const PRICE_NAME_MAX_LEN: usize = 25;

/// Represents a price in pence/cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    value: u64,
}

impl Price {
    /// A price of nothing.
    pub const ZERO: Self = Self::new(0);

    /// Creates a new Price
    pub const fn new(value: u64) -> Self {
        Price { value }
    }

    /// Subtracts `other`, stopping at zero instead of going negative.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self::new(self.value.saturating_sub(other.value))
    }
}

impl Deref for Price {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.value
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "${}.{:02}", self.value / 100, self.value % 100)
    }
}

/// Formats a price as dollars with two decimal places, e.g. `4000` becomes `$40.00`.
pub fn format_price(price: Price) -> String {
    price.to_string()
}

/// A named, time-bounded override of a product's base price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPrice {
    /// Price period name
    pub name: String,

    /// Price of the product during the period
    pub price: Price,

    /// Dates the price applies to
    pub validity: DateRange,
}

impl ProductPrice {
    /// Creates a new price tier.
    pub fn new(name: impl Into<String>, price: Price, start: Date, end: Option<Date>) -> Self {
        Self {
            name: name.into(),
            price,
            validity: DateRange::new(start, end),
        }
    }
}

impl Dated for ProductPrice {
    fn validity(&self) -> DateRange {
        self.validity
    }
}

impl Display for ProductPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.name, self.price)
    }
}
