//! Test Helpers

use jiff::civil::Date;
use pricetag::prices::Price;

use crate::{
    domain::{
        gift_cards::{
            GiftCardsService, GiftCardsServiceError,
            data::NewGiftCard,
            records::{GiftCardRecord, GiftCardUuid},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::{NewProduct, NewProductPrice},
            records::{ProductPriceRecord, ProductPriceUuid, ProductRecord, ProductUuid},
        },
    },
    test::TestContext,
};

pub(crate) async fn create_product(
    ctx: &TestContext,
    name: &str,
    code: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            code: code.to_string(),
            price: Price::new(price),
        })
        .await
}

pub(crate) async fn create_product_price(
    ctx: &TestContext,
    product: ProductUuid,
    name: &str,
    price: u64,
    date_start: Date,
    date_end: Option<Date>,
) -> Result<ProductPriceRecord, ProductsServiceError> {
    ctx.products
        .create_product_price(NewProductPrice {
            uuid: ProductPriceUuid::new(),
            product_uuid: product,
            name: name.to_string(),
            price: Price::new(price),
            date_start,
            date_end,
        })
        .await
}

pub(crate) async fn create_gift_card(
    ctx: &TestContext,
    code: &str,
    amount: u64,
    date_start: Date,
    date_end: Option<Date>,
) -> Result<GiftCardRecord, GiftCardsServiceError> {
    ctx.gift_cards
        .create_gift_card(NewGiftCard {
            uuid: GiftCardUuid::new(),
            code: code.to_string(),
            amount: Price::new(amount),
            date_start,
            date_end,
        })
        .await
}
