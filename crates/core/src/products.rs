//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::prices::Price;

/// Maximum length of a product's customer facing name.
pub const PRODUCT_NAME_MAX_LEN: usize = 25;

/// Maximum length of a product code.
pub const PRODUCT_CODE_MAX_LEN: usize = 10;

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Customer facing name of product
    pub name: String,

    /// Internal facing reference to product
    pub code: String,

    /// Base price, used when no price tier applies
    pub price: Price,
}

impl Product {
    /// Creates a new product.
    pub fn new(name: impl Into<String>, code: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            price,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_display() {
        let product = Product::new("Big Widget", "big_widget", Price::new(100_000));

        assert_eq!(product.to_string(), "Big Widget - big_widget");
    }
}
