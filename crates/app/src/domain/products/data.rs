//! Products Data

use jiff::civil::Date;
use pricetag::prices::Price;

use crate::domain::products::records::{ProductPriceUuid, ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub code: String,
    pub price: Price,
}

/// New Product Price Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductPrice {
    pub uuid: ProductPriceUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: Price,
    pub date_start: Date,
    pub date_end: Option<Date>,
}
