//! Catalog loader service.

use async_trait::async_trait;
use mockall::automock;
use pricetag::catalog::Catalog;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        catalog::errors::CatalogLoaderError,
        gift_cards::{data::NewGiftCard, records::GiftCardUuid, repository::PgGiftCardsRepository},
        products::{
            data::{NewProduct, NewProductPrice},
            records::{ProductPriceUuid, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

/// Number of records written by a catalog load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub products: usize,
    pub prices: usize,
    pub gift_cards: usize,
}

#[derive(Debug, Clone)]
pub struct PgCatalogLoader {
    db: Db,
    products: PgProductsRepository,
    gift_cards: PgGiftCardsRepository,
}

impl PgCatalogLoader {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            gift_cards: PgGiftCardsRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogLoader for PgCatalogLoader {
    async fn load_catalog(&self, catalog: Catalog) -> Result<CatalogSummary, CatalogLoaderError> {
        let mut tx = self.db.begin().await?;
        let mut summary = CatalogSummary::default();

        let mut products: Vec<_> = catalog.products().collect();
        products.sort_by(|a, b| a.code.cmp(&b.code));

        for product in products {
            let record = self
                .products
                .create_product(
                    &mut tx,
                    &NewProduct {
                        uuid: ProductUuid::new(),
                        name: product.name.clone(),
                        code: product.code.clone(),
                        price: product.price,
                    },
                )
                .await?;

            summary.products += 1;

            for tier in catalog.prices(&product.code) {
                self.products
                    .create_product_price(
                        &mut tx,
                        &NewProductPrice {
                            uuid: ProductPriceUuid::new(),
                            product_uuid: record.uuid,
                            name: tier.name.clone(),
                            price: tier.price,
                            date_start: tier.validity.start(),
                            date_end: tier.validity.end(),
                        },
                    )
                    .await?;

                summary.prices += 1;
            }
        }

        for gift_card in catalog.gift_cards() {
            self.gift_cards
                .create_gift_card(
                    &mut tx,
                    &NewGiftCard {
                        uuid: GiftCardUuid::new(),
                        code: gift_card.code.clone(),
                        amount: gift_card.amount,
                        date_start: gift_card.validity.start(),
                        date_end: gift_card.validity.end(),
                    },
                )
                .await?;

            summary.gift_cards += 1;
        }

        tx.commit().await?;

        info!(
            products = summary.products,
            prices = summary.prices,
            gift_cards = summary.gift_cards,
            "catalog loaded"
        );

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Writes every product, price tier and gift card of `catalog` in a single transaction.
    ///
    /// Nothing is written if any record is rejected.
    async fn load_catalog(&self, catalog: Catalog) -> Result<CatalogSummary, CatalogLoaderError>;
}
