//! Catalog loading

pub mod errors;
pub mod service;

pub use errors::CatalogLoaderError;
pub use service::*;
