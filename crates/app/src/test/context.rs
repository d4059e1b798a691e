//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        catalog::PgCatalogLoader, gift_cards::PgGiftCardsService, prices::PgPricesService,
        products::PgProductsService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    /// Keeps the per-test database alive until the context is dropped.
    pub db: TestDb,
    pub products: PgProductsService,
    pub gift_cards: PgGiftCardsService,
    pub prices: PgPricesService,
    pub catalog: PgCatalogLoader,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            gift_cards: PgGiftCardsService::new(db.clone()),
            prices: PgPricesService::new(db.clone()),
            catalog: PgCatalogLoader::new(db),
            db: test_db,
        }
    }
}
