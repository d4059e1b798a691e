//! Products Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use pricetag::{dates::DateRange, prices::ProductPrice, products::Product};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{decode_price, encode_price},
    domain::products::{
        data::{NewProduct, NewProductPrice},
        records::{ProductPriceRecord, ProductPriceUuid, ProductRecord, ProductUuid},
    },
};

const GET_PRODUCT_BY_CODE_SQL: &str = include_str!("sql/get_product_by_code.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const LIST_PRODUCT_PRICES_SQL: &str = include_str!("sql/list_product_prices.sql");
const CREATE_PRODUCT_PRICE_SQL: &str = include_str!("sql/create_product_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_product_by_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_BY_CODE_SQL)
            .bind(code)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid)
            .bind(&product.name)
            .bind(&product.code)
            .bind(encode_price("price", product.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn list_product_prices(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Vec<ProductPriceRecord>, sqlx::Error> {
        query_as::<Postgres, ProductPriceRecord>(LIST_PRODUCT_PRICES_SQL)
            .bind(product)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        price: &NewProductPrice,
    ) -> Result<ProductPriceRecord, sqlx::Error> {
        query_as::<Postgres, ProductPriceRecord>(CREATE_PRODUCT_PRICE_SQL)
            .bind(price.uuid)
            .bind(price.product_uuid)
            .bind(&price.name)
            .bind(encode_price("price", price.price)?)
            .bind(SqlxDate::from(price.date_start))
            .bind(price.date_end.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<ProductUuid, _>("uuid")?,
            product: Product {
                name: row.try_get("name")?,
                code: row.try_get("code")?,
                price: decode_price(row, "price")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductPriceRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let validity = DateRange::new(
            row.try_get::<SqlxDate, _>("date_start")?.to_jiff(),
            row.try_get::<Option<SqlxDate>, _>("date_end")?
                .map(SqlxDate::to_jiff),
        );

        Ok(Self {
            uuid: row.try_get::<ProductPriceUuid, _>("uuid")?,
            product_uuid: row.try_get::<ProductUuid, _>("product_uuid")?,
            tier: ProductPrice {
                name: row.try_get("name")?,
                price: decode_price(row, "price")?,
                validity,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
