//! Product Records

use jiff::Timestamp;
use pricetag::{prices::ProductPrice, products::Product};

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub product: Product,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Product Price UUID
pub type ProductPriceUuid = TypedUuid<ProductPriceRecord>;

/// Product Price Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPriceRecord {
    pub uuid: ProductPriceUuid,
    pub product_uuid: ProductUuid,
    pub tier: ProductPrice,
    pub created_at: Timestamp,
}
