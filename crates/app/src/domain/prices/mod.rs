//! Prices

pub mod errors;
pub mod service;

pub use errors::PricesServiceError;
pub use service::*;
