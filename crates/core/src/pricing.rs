//! Pricing
//!
//! Resolves what a product costs on a given day. Among the price tiers active on that
//! day the cheapest one wins, regardless of its name or when it was created; with no
//! active tier the product's base price applies. A gift card then takes its amount off
//! the result, never going below zero.

use jiff::civil::Date;

use crate::{
    dates::active_on,
    gift_cards::GiftCard,
    prices::{Price, ProductPrice},
    products::Product,
};

/// Returns the cheapest tier active on `date`, if any.
///
/// When several tiers share the lowest price the first one is returned; only its price
/// matters to callers.
pub fn cheapest_active_tier(tiers: &[ProductPrice], date: Date) -> Option<&ProductPrice> {
    active_on(tiers, date).min_by_key(|tier| tier.price)
}

/// Takes the gift card's amount off `total`, flooring at zero.
pub fn apply_gift_card(total: Price, gift_card: Option<&GiftCard>) -> Price {
    gift_card.map_or(total, |card| total.saturating_sub(card.amount))
}

/// Resolves the price of `product` on `date`.
///
/// `tiers` are the product's price tiers; the ones not active on `date` are ignored. The
/// gift card, when given, is assumed to have been checked for validity already.
pub fn resolve(
    product: &Product,
    tiers: &[ProductPrice],
    date: Date,
    gift_card: Option<&GiftCard>,
) -> Price {
    let total = cheapest_active_tier(tiers, date).map_or(product.price, |tier| tier.price);

    apply_gift_card(total, gift_card)
}
