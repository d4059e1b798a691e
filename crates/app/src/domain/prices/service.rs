//! Prices service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use pricetag::{
    prices::{Price, ProductPrice},
    pricing,
};

use crate::{
    database::Db,
    domain::{
        gift_cards::records::GiftCardRecord,
        prices::errors::PricesServiceError,
        products::{records::ProductRecord, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgPricesService {
    db: Db,
    products: PgProductsRepository,
}

impl PgPricesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl PricesService for PgPricesService {
    async fn get_total(
        &self,
        product: ProductRecord,
        date: Date,
        gift_card: Option<GiftCardRecord>,
    ) -> Result<Price, PricesServiceError> {
        let mut tx = self.db.begin().await?;

        let tiers: Vec<ProductPrice> = self
            .products
            .list_product_prices(&mut tx, product.uuid)
            .await?
            .into_iter()
            .map(|record| record.tier)
            .collect();

        tx.commit().await?;

        Ok(pricing::resolve(
            &product.product,
            &tiers,
            date,
            gift_card.as_ref().map(|record| &record.gift_card),
        ))
    }
}

#[automock]
#[async_trait]
pub trait PricesService: Send + Sync {
    /// Price of `product` on `date`, less the amount of `gift_card` when given.
    ///
    /// The gift card must already have been checked to be valid on `date`.
    async fn get_total(
        &self,
        product: ProductRecord,
        date: Date,
        gift_card: Option<GiftCardRecord>,
    ) -> Result<Price, PricesServiceError>;
}
