//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, NewProductPrice},
        errors::ProductsServiceError,
        records::{ProductPriceRecord, ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn get_product_by_code(
        &self,
        code: String,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product_by_code(&mut tx, &code).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn list_product_prices(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ProductPriceRecord>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let prices = self.repository.list_product_prices(&mut tx, product).await?;

        tx.commit().await?;

        Ok(prices)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn create_product_price(
        &self,
        price: NewProductPrice,
    ) -> Result<ProductPriceRecord, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product_price(&mut tx, &price).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve a single product by its code.
    async fn get_product_by_code(
        &self,
        code: String,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieves every price tier of a product, whatever its dates.
    async fn list_product_prices(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ProductPriceRecord>, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Adds a price tier to an existing product.
    async fn create_product_price(
        &self,
        price: NewProductPrice,
    ) -> Result<ProductPriceRecord, ProductsServiceError>;

    /// Deletes a product together with its price tiers.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
