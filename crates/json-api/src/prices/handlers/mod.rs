//! Price Handlers

pub(crate) mod get;
