//! Product Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, check_len, parse_validity},
    prices::{PRICE_NAME_MAX_LEN, Price, ProductPrice},
    products::{PRODUCT_CODE_MAX_LEN, PRODUCT_NAME_MAX_LEN, Product},
};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Base price in cents
    pub price: u64,

    /// Price tiers
    #[serde(default)]
    pub prices: Vec<ProductPriceFixture>,
}

/// Price tier fixture
#[derive(Debug, Deserialize)]
pub struct ProductPriceFixture {
    /// Tier name
    pub name: String,

    /// Tier price in cents
    pub price: u64,

    /// First day the tier applies (`YYYY-MM-DD`)
    pub date_start: String,

    /// Last day the tier applies, open-ended when missing
    #[serde(default)]
    pub date_end: Option<String>,
}

impl ProductFixture {
    /// Converts the fixture into a product with the given code and its price tiers.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is too long or a tier's dates are invalid.
    pub fn into_product(self, code: String) -> Result<(Product, Vec<ProductPrice>), FixtureError> {
        check_len("code", &code, PRODUCT_CODE_MAX_LEN)?;
        check_len("name", &self.name, PRODUCT_NAME_MAX_LEN)?;

        let tiers = self
            .prices
            .into_iter()
            .map(|tier| tier.into_product_price(&code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((Product::new(self.name, code, Price::new(self.price)), tiers))
    }
}

impl ProductPriceFixture {
    fn into_product_price(self, code: &str) -> Result<ProductPrice, FixtureError> {
        check_len("price name", &self.name, PRICE_NAME_MAX_LEN)?;

        let validity = parse_validity(
            &format!("price {:?} of {code}", self.name),
            &self.date_start,
            self.date_end.as_deref(),
        )?;

        Ok(ProductPrice {
            name: self.name,
            price: Price::new(self.price),
            validity,
        })
    }
}
