//! Catalog
//!
//! An in-memory catalog of products, their price tiers and gift cards, typically built
//! from a fixture file.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    dates::active_on,
    gift_cards::GiftCard,
    prices::{Price, ProductPrice},
    pricing,
    products::Product,
};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A product with the same code was already added.
    #[error("duplicate product code: {0}")]
    DuplicateProduct(String),

    /// A price tier references a product that is not in the catalog.
    #[error("unknown product code: {0}")]
    UnknownProduct(String),
}

/// Errors raised while quoting a price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    /// No product has the requested code.
    #[error("product with code {0:?} does not exist")]
    UnknownProduct(String),

    /// No gift card with the requested code is valid on the requested date.
    #[error("gift card with code {0:?} does not exist")]
    UnknownGiftCard(String),
}

/// Catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: FxHashMap<String, Product>,
    prices: FxHashMap<String, Vec<ProductPrice>>,
    gift_cards: Vec<GiftCard>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateProduct`]: a product with the same code already exists.
    pub fn add_product(&mut self, product: Product) -> Result<&mut Self, CatalogError> {
        if self.products.contains_key(&product.code) {
            return Err(CatalogError::DuplicateProduct(product.code));
        }

        self.products.insert(product.code.clone(), product);

        Ok(self)
    }

    /// Add a price tier to the product with `code`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownProduct`]: no product has the given code.
    pub fn add_price(&mut self, code: &str, tier: ProductPrice) -> Result<&mut Self, CatalogError> {
        if !self.products.contains_key(code) {
            return Err(CatalogError::UnknownProduct(code.to_string()));
        }

        self.prices.entry(code.to_string()).or_default().push(tier);

        Ok(self)
    }

    /// Add a gift card.
    pub fn add_gift_card(&mut self, gift_card: GiftCard) -> &mut Self {
        self.gift_cards.push(gift_card);

        self
    }

    /// Look up a product by code.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    /// All products, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Price tiers of the product with `code`, in the order they were added.
    pub fn prices(&self, code: &str) -> &[ProductPrice] {
        self.prices.get(code).map_or(&[], Vec::as_slice)
    }

    /// All gift cards, in the order they were added.
    pub fn gift_cards(&self) -> &[GiftCard] {
        &self.gift_cards
    }

    /// Find the gift card with `code` that is valid on `date`.
    ///
    /// Codes are not unique; when several cards with the same code are valid on `date` the
    /// one that started earliest wins.
    pub fn active_gift_card(&self, code: &str, date: Date) -> Option<&GiftCard> {
        active_on(&self.gift_cards, date)
            .filter(|card| card.code == code)
            .min_by_key(|card| card.validity.start())
    }

    /// Price of the product with `code` on `date`, less the gift card with
    /// `gift_card_code` when one is given.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::UnknownProduct`]: no product has the given code.
    /// - [`QuoteError::UnknownGiftCard`]: no gift card with the given code is valid on `date`.
    pub fn quote(
        &self,
        code: &str,
        date: Date,
        gift_card_code: Option<&str>,
    ) -> Result<Price, QuoteError> {
        let product = self
            .product(code)
            .ok_or_else(|| QuoteError::UnknownProduct(code.to_string()))?;

        let gift_card = gift_card_code
            .map(|gift_card_code| {
                self.active_gift_card(gift_card_code, date)
                    .ok_or_else(|| QuoteError::UnknownGiftCard(gift_card_code.to_string()))
            })
            .transpose()?;

        Ok(pricing::resolve(product, self.prices(code), date, gift_card))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    fn catalog() -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new();

        catalog
            .add_product(Product::new("Small Widget", "sm_widget", Price::new(9_900)))?
            .add_price(
                "sm_widget",
                ProductPrice::new("2019", Price::new(12_500), date(2019, 1, 1), None),
            )?
            .add_gift_card(GiftCard::new(
                "250OFF",
                Price::new(25_000),
                date(2019, 1, 1),
                None,
            ));

        Ok(catalog)
    }

    #[test]
    fn duplicate_product_is_rejected() -> TestResult {
        let mut catalog = catalog()?;

        let result = catalog.add_product(Product::new("Other", "sm_widget", Price::new(1)));

        assert!(
            matches!(result, Err(CatalogError::DuplicateProduct(ref code)) if code == "sm_widget"),
            "expected DuplicateProduct"
        );

        Ok(())
    }

    #[test]
    fn price_for_unknown_product_is_rejected() -> TestResult {
        let mut catalog = catalog()?;

        let result = catalog.add_price(
            "widget",
            ProductPrice::new("2019", Price::new(1), date(2019, 1, 1), None),
        );

        assert!(
            matches!(result, Err(CatalogError::UnknownProduct(_))),
            "expected UnknownProduct"
        );

        Ok(())
    }

    #[test]
    fn prices_of_product_without_tiers_is_empty() -> TestResult {
        let mut catalog = catalog()?;

        catalog.add_product(Product::new("Big Widget", "big_widget", Price::new(100_000)))?;

        assert!(catalog.prices("big_widget").is_empty());
        assert!(catalog.prices("missing").is_empty());

        Ok(())
    }

    #[test]
    fn quote_applies_tier_and_gift_card() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            catalog.quote("sm_widget", date(2018, 1, 1), None)?,
            Price::new(9_900)
        );
        assert_eq!(
            catalog.quote("sm_widget", date(2019, 1, 1), None)?,
            Price::new(12_500)
        );
        assert_eq!(
            catalog.quote("sm_widget", date(2019, 1, 1), Some("250OFF"))?,
            Price::ZERO
        );

        Ok(())
    }

    #[test]
    fn quote_unknown_product() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            catalog.quote("widget", date(2019, 1, 1), None),
            Err(QuoteError::UnknownProduct("widget".to_string()))
        );

        Ok(())
    }

    #[test]
    fn quote_gift_card_not_yet_valid() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(
            catalog.quote("sm_widget", date(2018, 12, 31), Some("250OFF")),
            Err(QuoteError::UnknownGiftCard("250OFF".to_string()))
        );

        Ok(())
    }

    #[test]
    fn active_gift_card_prefers_earliest_start() -> TestResult {
        let mut catalog = catalog()?;

        catalog.add_gift_card(GiftCard::new(
            "250OFF",
            Price::new(1),
            date(2018, 1, 1),
            None,
        ));

        let card = catalog.active_gift_card("250OFF", date(2019, 6, 1));

        assert_eq!(card.map(|card| card.amount), Some(Price::new(1)));

        Ok(())
    }
}
