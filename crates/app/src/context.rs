//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        gift_cards::{GiftCardsService, PgGiftCardsService},
        prices::{PgPricesService, PricesService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub gift_cards: Arc<dyn GiftCardsService>,
    pub prices: Arc<dyn PricesService>,
}

impl AppContext {
    /// Build application context from a database URL, pooling up to `max_connections`.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, max_connections: u32) -> Result<Self, AppInitError> {
        let pool = database::connect_with(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Build application context on an existing database handle.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            gift_cards: Arc::new(PgGiftCardsService::new(db.clone())),
            prices: Arc::new(PgPricesService::new(db)),
        }
    }
}
