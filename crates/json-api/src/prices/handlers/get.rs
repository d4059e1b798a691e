//! Get Price Handler

use std::sync::Arc;

use pricetag::prices::format_price;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use pricetag_app::domain::{gift_cards::GiftCardsServiceError, products::ProductsServiceError};

use crate::{
    extensions::*,
    observability::{QuoteOutcome, record_quote},
    prices::{
        errors::{FieldErrors, PriceError, gift_cards_error, products_error},
        requests::{
            DATE, GIFT_CARD_CODE, GIFT_CARD_NOT_FOUND, GetPriceQuery, PRODUCT_CODE,
            PRODUCT_NOT_FOUND, validate_date, validate_gift_card_code, validate_product_code,
        },
    },
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceResponse {
    /// Formatted price, e.g. `$40.00`
    pub price: String,
}

/// Get Price Handler
///
/// Returns the price of a product on a date, optionally less a gift card.
#[endpoint(
    tags("prices"),
    summary = "Get Price",
    parameters(
        ("productCode" = String, Query, description = "Product code, at most 10 characters"),
        ("date" = String, Query, description = "Date to price on, YYYY-MM-DD"),
        (
            "giftCardCode" = Option<String>,
            Query,
            description = "Gift card code, at most 30 characters"
        ),
    )
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<PriceResponse>, PriceError> {
    let result = price(req, depot).await;

    record_quote(quote_outcome(&result));

    result
}

fn quote_outcome<T>(result: &Result<T, PriceError>) -> QuoteOutcome {
    match result {
        Ok(_) => QuoteOutcome::Priced,
        Err(PriceError::Status(error)) if error.code.is_server_error() => QuoteOutcome::Failed,
        Err(_) => QuoteOutcome::Rejected,
    }
}

/// Decoded query pairs, in the order their keys appear in the request URI.
fn query_pairs(req: &Request) -> Vec<(&str, &str)> {
    let queries = req.queries();

    req.uri()
        .query()
        .unwrap_or_default()
        .split('&')
        .filter_map(|segment| {
            let key = segment.split_once('=').map_or(segment, |(key, _)| key);
            let value = queries.get_vec(key)?.last()?;

            Some((key, value.as_str()))
        })
        .collect()
}

async fn price(req: &Request, depot: &Depot) -> Result<Json<PriceResponse>, PriceError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let query = GetPriceQuery::from_pairs(query_pairs(req));

    let mut errors = FieldErrors::default();

    let product_code = errors.check(
        PRODUCT_CODE,
        validate_product_code(query.product_code.as_deref()),
    );
    let date = errors.check(DATE, validate_date(query.date.as_deref()));
    let gift_card_code = errors
        .check(
            GIFT_CARD_CODE,
            validate_gift_card_code(query.gift_card_code.as_deref()),
        )
        .flatten();

    let product = match product_code {
        Some(code) => match state.app.products.get_product_by_code(code).await {
            Ok(product) => Some(product),
            Err(ProductsServiceError::NotFound) => {
                errors.add(PRODUCT_CODE, PRODUCT_NOT_FOUND);

                None
            }
            Err(error) => return Err(products_error(error).into()),
        },
        None => None,
    };

    let (Some(product), Some(date)) = (product, date) else {
        return Err(errors.into());
    };

    if !errors.is_empty() {
        return Err(errors.into());
    }

    let gift_card = match gift_card_code {
        Some(code) => match state.app.gift_cards.get_active_gift_card(code, date).await {
            Ok(gift_card) => Some(gift_card),
            Err(GiftCardsServiceError::NotFound) => {
                errors.add(GIFT_CARD_CODE, GIFT_CARD_NOT_FOUND);

                return Err(errors.into());
            }
            Err(error) => return Err(gift_cards_error(error).into()),
        },
        None => None,
    };

    let total = state
        .app
        .prices
        .get_total(product, date, gift_card)
        .await
        .or_500("failed to price product")?;

    Ok(Json(PriceResponse {
        price: format_price(total),
    }))
}
