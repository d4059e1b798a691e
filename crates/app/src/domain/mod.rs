//! Domain services and persistence.

pub mod catalog;
pub mod gift_cards;
pub mod prices;
pub mod products;
