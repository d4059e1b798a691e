//! Pricetag
//!
//! Point-in-time product pricing: time-bounded price tiers, gift card discounts and
//! the catalog fixtures used to seed and evaluate them.

pub mod catalog;
pub mod dates;
pub mod fixtures;
pub mod gift_cards;
pub mod prices;
pub mod pricing;
pub mod products;
