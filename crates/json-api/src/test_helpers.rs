//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use pricetag::{gift_cards::GiftCard, prices::Price, products::Product};
use salvo::{affix_state::inject, prelude::*};

use pricetag_app::{
    context::AppContext,
    domain::{
        gift_cards::{
            MockGiftCardsService,
            records::{GiftCardRecord, GiftCardUuid},
        },
        prices::MockPricesService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::state::State;

pub(crate) fn make_product(code: &str, price: u64) -> ProductRecord {
    ProductRecord {
        uuid: ProductUuid::new(),
        product: Product::new("Widget", code, Price::new(price)),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_gift_card(code: &str, amount: u64) -> GiftCardRecord {
    GiftCardRecord {
        uuid: GiftCardUuid::new(),
        gift_card: GiftCard::new(code, Price::new(amount), date(2019, 1, 1), None),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_get_product_by_code().never();
    products.expect_list_product_prices().never();
    products.expect_create_product().never();
    products.expect_create_product_price().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_gift_cards_mock() -> MockGiftCardsService {
    let mut gift_cards = MockGiftCardsService::new();

    gift_cards.expect_get_active_gift_card().never();
    gift_cards.expect_create_gift_card().never();

    gift_cards
}

pub(crate) fn strict_prices_mock() -> MockPricesService {
    let mut prices = MockPricesService::new();

    prices.expect_get_total().never();

    prices
}

pub(crate) fn state_with(
    products: MockProductsService,
    gift_cards: MockGiftCardsService,
    prices: MockPricesService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        gift_cards: Arc::new(gift_cards),
        prices: Arc::new(prices),
    })
}

pub(crate) fn prices_service(
    products: MockProductsService,
    gift_cards: MockGiftCardsService,
    prices: MockPricesService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, gift_cards, prices)))
            .push(route),
    )
}
